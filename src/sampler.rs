//! Number sampling: weighted without replacement, and plain uniform.

use std::collections::HashSet;

use rand::distributions::{Distribution, WeightedIndex};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::GenerationError;
use crate::model::{NUMBER_MAX, NUMBER_MIN};

/// Hard ceiling on weighted redraws for a single game.
const MAX_ATTEMPTS: u32 = 20_000;

/// Draws `k` distinct numbers from a weighted pool, returned sorted.
///
/// Repeated weighted draws with replacement, discarding repeats, until `k`
/// unique numbers are collected. Approximate for small pools, but the bias
/// toward heavier weights is preserved and termination is guaranteed by the
/// attempt ceiling. Hitting the ceiling short of `k` is an error, never a
/// short game.
pub fn weighted_sample(
    pool: &[(u8, u32)],
    k: usize,
    rng: &mut impl Rng,
) -> Result<Vec<u8>, GenerationError> {
    let weights: Vec<u32> = pool.iter().map(|&(_, w)| w).collect();
    let dist = WeightedIndex::new(&weights)
        .map_err(|e| GenerationError::precondition("pool", e.to_string()))?;

    let mut chosen: HashSet<u8> = HashSet::new();
    let mut attempts = 0u32;
    while chosen.len() < k {
        if attempts >= MAX_ATTEMPTS {
            return Err(GenerationError::SamplingExhausted {
                attempts,
                collected: chosen.len(),
                requested: k,
            });
        }
        attempts += 1;
        let (number, _) = pool[dist.sample(rng)];
        chosen.insert(number);
    }

    let mut game: Vec<u8> = chosen.into_iter().collect();
    game.sort_unstable();
    Ok(game)
}

/// Draws `k` distinct numbers uniformly from the full range, sorted.
pub fn uniform_sample(k: usize, rng: &mut impl Rng) -> Vec<u8> {
    let range: Vec<u8> = (NUMBER_MIN..=NUMBER_MAX).collect();
    let mut game: Vec<u8> = range.choose_multiple(rng, k).copied().collect();
    game.sort_unstable();
    game
}
