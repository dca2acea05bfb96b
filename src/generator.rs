//! Batch generation: mode dispatch over the analysis and sampling modules.

use rand::Rng;

use crate::analysis;
use crate::error::GenerationError;
use crate::filter;
use crate::model::{self, DrawRecord, BASE_PRICE_6, MAX_GAME_SIZE, MIN_GAME_SIZE};
use crate::pricing;
use crate::sampler;

/// How the numbers of each game are picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Weighted toward the numbers drawn most often over the whole history.
    AllTimeFrequency,
    /// Weighted toward the numbers drawn most often on December 31st.
    YearEndFrequency,
    /// Uniform over the full range; the history is ignored.
    Uniform,
}

impl Mode {
    pub fn label(&self) -> &'static str {
        match self {
            Mode::AllTimeFrequency => "Most drawn numbers (all time)",
            Mode::YearEndFrequency => "Most drawn numbers (Mega da Virada, 31/12)",
            Mode::Uniform => "Random numbers",
        }
    }

    pub fn uses_history(&self) -> bool {
        !matches!(self, Mode::Uniform)
    }
}

/// The games produced by one request, with the settings that produced them.
#[derive(Debug, Clone)]
pub struct GenerationBatch {
    pub mode: Mode,
    pub pool_size: usize,
    pub numbers_per_game: usize,
    pub games: Vec<Vec<u8>>,
    pub game_price: f64,
    pub total_price: f64,
}

/// Generates `quantity` games under the given mode.
///
/// Parameter checks run before any filtering, analysis, or sampling. A game
/// that fails to sample aborts the whole batch; a partial batch is never
/// returned.
pub fn generate(
    mode: Mode,
    history: Option<&[DrawRecord]>,
    pool_size: usize,
    numbers_per_game: usize,
    quantity: usize,
    rng: &mut impl Rng,
) -> Result<GenerationBatch, GenerationError> {
    if quantity < 1 {
        return Err(GenerationError::precondition(
            "quantity",
            "at least one game must be requested",
        ));
    }
    if !(MIN_GAME_SIZE..=MAX_GAME_SIZE).contains(&numbers_per_game) {
        return Err(GenerationError::precondition(
            "numbers_per_game",
            format!(
                "{} is outside {}-{}",
                numbers_per_game, MIN_GAME_SIZE, MAX_GAME_SIZE
            ),
        ));
    }
    if mode.uses_history() {
        if numbers_per_game > pool_size {
            return Err(GenerationError::precondition(
                "pool_size",
                format!(
                    "pool of {} cannot fill a game of {} numbers",
                    pool_size, numbers_per_game
                ),
            ));
        }
    } else if numbers_per_game > model::range_size() {
        return Err(GenerationError::precondition(
            "numbers_per_game",
            format!("{} exceeds the {} playable numbers", numbers_per_game, model::range_size()),
        ));
    }

    let game_price = pricing::game_price(numbers_per_game, BASE_PRICE_6)?;
    let total_price = pricing::total_price(numbers_per_game, BASE_PRICE_6, quantity)?;

    let games = match mode {
        Mode::Uniform => (0..quantity)
            .map(|_| sampler::uniform_sample(numbers_per_game, rng))
            .collect(),
        Mode::AllTimeFrequency | Mode::YearEndFrequency => {
            let draws = history.ok_or_else(|| {
                GenerationError::InsufficientData("no draw history loaded".into())
            })?;
            let filtered;
            let draws: &[DrawRecord] = if mode == Mode::YearEndFrequency {
                filtered = filter::year_end_draws(draws);
                &filtered
            } else {
                draws
            };
            if draws.is_empty() {
                let what = if mode == Mode::YearEndFrequency {
                    "the history has no December 31st draws"
                } else {
                    "the draw history is empty"
                };
                return Err(GenerationError::InsufficientData(what.into()));
            }

            let table = analysis::count_frequencies(draws);
            let ranked = analysis::rank(&table);
            let pool = analysis::top_pool(&ranked, pool_size);

            let mut games = Vec::with_capacity(quantity);
            for _ in 0..quantity {
                games.push(sampler::weighted_sample(&pool, numbers_per_game, rng)?);
            }
            games
        }
    };

    Ok(GenerationBatch {
        mode,
        pool_size: if mode.uses_history() {
            pool_size
        } else {
            model::range_size()
        },
        numbers_per_game,
        games,
        game_price,
        total_price,
    })
}
