//! Frequency analysis over a draw history.

use std::collections::HashMap;

use crate::model::DrawRecord;

/// Occurrence count per number, built fresh from one history.
pub type FrequencyTable = HashMap<u8, u32>;

/// Ordered (number, weight) candidates for the sampler.
pub type Pool = Vec<(u8, u32)>;

/// Counts how often each number came out across the given draws.
///
/// Every draw contributes exactly six numbers, so the counts always sum to
/// six times the number of draws analyzed.
pub fn count_frequencies(draws: &[DrawRecord]) -> FrequencyTable {
    let mut counts = FrequencyTable::new();
    for draw in draws {
        for &n in &draw.numbers {
            *counts.entry(n).or_insert(0) += 1;
        }
    }
    counts
}

/// Orders a table by count descending; ties go to the smaller number so
/// equal counts always list in the same order.
pub fn rank(table: &FrequencyTable) -> Pool {
    let mut ranked: Pool = table.iter().map(|(&n, &c)| (n, c)).collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    ranked
}

/// First `pool_size` ranked entries; everything observed when the ranking is
/// shorter than that.
pub fn top_pool(ranked: &[(u8, u32)], pool_size: usize) -> Pool {
    ranked.iter().take(pool_size).copied().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn draw(numbers: [u8; 6]) -> DrawRecord {
        DrawRecord::new(NaiveDate::from_ymd_opt(2023, 6, 15).unwrap(), numbers).unwrap()
    }

    #[test]
    fn test_counts_sum_to_six_per_draw() {
        let draws = vec![
            draw([1, 2, 3, 4, 5, 6]),
            draw([1, 2, 3, 10, 11, 12]),
            draw([40, 41, 42, 43, 44, 45]),
        ];
        let table = count_frequencies(&draws);
        let total: u32 = table.values().sum();
        assert_eq!(total, 6 * draws.len() as u32);
    }

    #[test]
    fn test_rank_breaks_ties_by_number() {
        let draws = vec![
            draw([1, 2, 10, 20, 30, 40]),
            draw([1, 2, 11, 21, 31, 41]),
            draw([1, 2, 12, 22, 32, 42]),
        ];
        let ranked = rank(&count_frequencies(&draws));
        // 1 and 2 are tied at three appearances; the smaller number leads.
        assert_eq!(ranked[0], (1, 3));
        assert_eq!(ranked[1], (2, 3));
        // the singletons that follow are tied too, so they come out ascending
        let singles: Vec<u8> = ranked[2..].iter().map(|&(n, _)| n).collect();
        let mut sorted = singles.clone();
        sorted.sort_unstable();
        assert_eq!(singles, sorted);
    }

    #[test]
    fn test_top_pool_caps_at_observed() {
        let draws = vec![draw([1, 2, 3, 4, 5, 6])];
        let ranked = rank(&count_frequencies(&draws));
        assert_eq!(top_pool(&ranked, 3).len(), 3);
        assert_eq!(top_pool(&ranked, 30).len(), 6);
    }

    #[test]
    fn test_empty_history_yields_empty_table() {
        let table = count_frequencies(&[]);
        assert!(table.is_empty());
        assert!(rank(&table).is_empty());
    }
}
