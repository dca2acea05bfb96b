//! Text formatting for games, prices, and the two output panes.

use crate::generator::{GenerationBatch, Mode};
use crate::model::{NUMBER_MAX, NUMBER_MIN};

/// Two-digit numbers joined by spaces: `01 05 23 42 57 60`.
pub fn format_game(numbers: &[u8]) -> String {
    numbers
        .iter()
        .map(|n| format!("{:02}", n))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Brazilian currency: thousands dot, decimal comma, two places.
/// The one place amounts get rounded.
pub fn format_brl(value: f64) -> String {
    let cents = (value * 100.0).round() as i64;
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.abs();
    let whole = (cents / 100).to_string();

    let mut grouped = String::new();
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    format!("{}R$ {},{:02}", sign, grouped, cents % 100)
}

/// The generated-games report shown in the output pane and written by the
/// TXT export.
pub fn build_report(batch: &GenerationBatch) -> String {
    let mut out = String::new();
    out.push_str(&format!("Mode: {}\n", batch.mode.label()));
    out.push_str(&format!(
        "Games: {} | Numbers per game: {} | Pool: {}\n",
        batch.games.len(),
        batch.numbers_per_game,
        batch.pool_size
    ));
    out.push_str(&format!(
        "Price per game: {} | Estimated total: {}\n\n",
        format_brl(batch.game_price),
        format_brl(batch.total_price)
    ));
    for (i, game) in batch.games.iter().enumerate() {
        out.push_str(&format!("Game {:03}: {}\n", i + 1, format_game(game)));
    }
    out
}

/// The frequency-preview pane for the selected mode.
pub fn build_preview(
    mode: Mode,
    draws_used: usize,
    ranked: &[(u8, u32)],
    pool_size: usize,
    numbers_per_game: usize,
) -> String {
    if mode == Mode::Uniform {
        return format!(
            "Random mode: numbers drawn from {} to {}.\nPool: full range | Game: {} numbers\n",
            NUMBER_MIN, NUMBER_MAX, numbers_per_game
        );
    }

    let mut out = String::new();
    out.push_str(&format!("{}\n", mode.label()));
    out.push_str(&format!("Draws used: {}\n", draws_used));
    out.push_str(&format!(
        "Pool = top {} numbers | Game = {} numbers\n\n",
        pool_size, numbers_per_game
    ));
    out.push_str("Top 20 (number: frequency):\n");
    for &(number, count) in ranked.iter().take(20) {
        out.push_str(&format!("{:02}: {}\n", number, count));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_game_zero_pads() {
        assert_eq!(format_game(&[1, 5, 23, 42, 57, 60]), "01 05 23 42 57 60");
    }

    #[test]
    fn test_format_brl() {
        assert_eq!(format_brl(6.0), "R$ 6,00");
        assert_eq!(format_brl(42.0), "R$ 42,00");
        assert_eq!(format_brl(1234.5), "R$ 1.234,50");
        assert_eq!(format_brl(1_000_000.0), "R$ 1.000.000,00");
        assert_eq!(format_brl(12345.678), "R$ 12.345,68");
    }

    #[test]
    fn test_report_lists_each_game() {
        let batch = GenerationBatch {
            mode: Mode::Uniform,
            pool_size: 60,
            numbers_per_game: 6,
            games: vec![vec![1, 2, 3, 4, 5, 6], vec![10, 20, 30, 40, 50, 60]],
            game_price: 6.0,
            total_price: 12.0,
        };
        let report = build_report(&batch);
        assert!(report.contains("Game 001: 01 02 03 04 05 06"));
        assert!(report.contains("Game 002: 10 20 30 40 50 60"));
        assert!(report.contains("R$ 12,00"));
    }

    #[test]
    fn test_preview_caps_at_twenty() {
        let ranked: Vec<(u8, u32)> = (1..=30).map(|n| (n, 31 - n as u32)).collect();
        let preview = build_preview(Mode::AllTimeFrequency, 100, &ranked, 30, 6);
        assert!(preview.contains("01: 30"));
        assert!(preview.contains("20: 11"));
        assert!(!preview.contains("21: 10"));
    }
}
