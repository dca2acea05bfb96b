//! Error taxonomy for game generation.
//!
//! Callers match on the variant to tell invalid input apart from missing
//! draw data and from a sampler that ran dry.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerationError {
    /// Invalid parameter combination, rejected before any analysis or
    /// sampling runs.
    #[error("invalid {name}: {reason}")]
    Precondition { name: &'static str, reason: String },

    /// A frequency mode was requested without the draw data to back it.
    #[error("not enough draw data: {0}")]
    InsufficientData(String),

    /// The bounded retry loop ran out of attempts before filling a game.
    #[error("sampling stopped after {attempts} attempts with {collected} of {requested} numbers")]
    SamplingExhausted {
        attempts: u32,
        collected: usize,
        requested: usize,
    },
}

impl GenerationError {
    pub fn precondition(name: &'static str, reason: impl Into<String>) -> Self {
        Self::Precondition {
            name,
            reason: reason.into(),
        }
    }
}
