//! Date-based selection of draws from a history.

use chrono::Datelike;

use crate::model::DrawRecord;

/// Keeps the draws matching `predicate`, preserving their original order.
/// An empty result means the history has no such draws, not an error.
pub fn filter_draws<F>(draws: &[DrawRecord], predicate: F) -> Vec<DrawRecord>
where
    F: Fn(&DrawRecord) -> bool,
{
    draws.iter().filter(|d| predicate(d)).cloned().collect()
}

/// Mega da Virada draws land on December 31st.
pub fn is_year_end(draw: &DrawRecord) -> bool {
    draw.date.day() == 31 && draw.date.month() == 12
}

pub fn year_end_draws(draws: &[DrawRecord]) -> Vec<DrawRecord> {
    filter_draws(draws, is_year_end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn draw(y: i32, m: u32, d: u32, first: u8) -> DrawRecord {
        let numbers = [first, first + 1, first + 2, first + 3, first + 4, first + 5];
        DrawRecord::new(NaiveDate::from_ymd_opt(y, m, d).unwrap(), numbers).unwrap()
    }

    #[test]
    fn test_keeps_only_december_31() {
        let draws = vec![
            draw(2021, 12, 31, 1),
            draw(2022, 3, 31, 10),
            draw(2022, 12, 30, 20),
            draw(2022, 12, 31, 30),
        ];
        let filtered = year_end_draws(&draws);
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].numbers[0], 1);
        assert_eq!(filtered[1].numbers[0], 30);
    }

    #[test]
    fn test_no_match_is_empty_not_error() {
        let draws = vec![draw(2022, 5, 14, 1), draw(2022, 7, 2, 10)];
        assert!(year_end_draws(&draws).is_empty());
    }

    #[test]
    fn test_order_preserved() {
        let draws = vec![
            draw(2023, 12, 31, 40),
            draw(2020, 12, 31, 10),
            draw(2021, 12, 31, 25),
        ];
        let filtered = year_end_draws(&draws);
        let firsts: Vec<u8> = filtered.iter().map(|d| d.numbers[0]).collect();
        assert_eq!(firsts, vec![40, 10, 25]);
    }
}
