//! Game pricing from exact combinatorics.
//!
//! An n-number game covers C(n, 6) simple games, so it costs that many times
//! the base price. The coefficient is computed on integers; currency only
//! gets rounded when formatted for display.

use crate::error::GenerationError;
use crate::model::{MIN_GAME_SIZE, NUMBERS_PER_DRAW};

/// Exact n-choose-k on integers.
pub fn binomial(n: u64, k: u64) -> u64 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    let mut result = 1u64;
    // multiply before dividing; each prefix product is divisible by i!
    for i in 1..=k {
        result = result * (n - k + i) / i;
    }
    result
}

/// Price of one game of `numbers_per_game` numbers.
pub fn game_price(numbers_per_game: usize, base_price_6: f64) -> Result<f64, GenerationError> {
    if numbers_per_game < MIN_GAME_SIZE {
        return Err(GenerationError::precondition(
            "numbers_per_game",
            format!("{} is below the minimum of {}", numbers_per_game, MIN_GAME_SIZE),
        ));
    }
    let combinations = binomial(numbers_per_game as u64, NUMBERS_PER_DRAW as u64);
    Ok(base_price_6 * combinations as f64)
}

/// Price of `quantity` games of the same size.
pub fn total_price(
    numbers_per_game: usize,
    base_price_6: f64,
    quantity: usize,
) -> Result<f64, GenerationError> {
    Ok(game_price(numbers_per_game, base_price_6)? * quantity as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binomial_values() {
        assert_eq!(binomial(6, 6), 1);
        assert_eq!(binomial(7, 6), 7);
        assert_eq!(binomial(8, 6), 28);
        assert_eq!(binomial(20, 6), 38760);
        assert_eq!(binomial(5, 6), 0);
    }

    #[test]
    fn test_game_price_matches_betting_table() {
        assert_eq!(game_price(6, 6.00).unwrap(), 6.00);
        assert_eq!(game_price(7, 6.00).unwrap(), 42.00);
        assert_eq!(game_price(8, 6.00).unwrap(), 168.00);
    }

    #[test]
    fn test_total_price() {
        assert_eq!(total_price(6, 6.00, 10).unwrap(), 60.00);
        assert_eq!(total_price(7, 6.00, 2).unwrap(), 84.00);
    }

    #[test]
    fn test_below_minimum_rejected() {
        let err = game_price(5, 6.00).unwrap_err();
        assert!(matches!(err, GenerationError::Precondition { .. }));
    }
}
