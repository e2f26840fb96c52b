//! Game configuration, deserializable from a JS object.

use serde::{Deserialize, Serialize};

use crate::error::GameError;

/// Upper bound on the rejection-sampling loop used by `Grid::reset`.
pub const DEFAULT_MAX_GENERATION_ATTEMPTS: u32 = 10_000;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GameConfig {
    /// Cells per side.
    pub size: usize,
    /// Chance, in percent, that each cell starts lit.
    pub percent_on: u8,
    pub max_generation_attempts: u32,
    /// Fixed seed for reproducible layouts. `None` draws from system entropy.
    pub seed: Option<u64>,
}

impl GameConfig {
    pub fn new(size: usize, percent_on: u8) -> Self {
        Self {
            size,
            percent_on,
            ..Self::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_max_generation_attempts(mut self, attempts: u32) -> Self {
        self.max_generation_attempts = attempts;
        self
    }

    /// Reject configurations that cannot produce a playable grid.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.size == 0 {
            return Err(GameError::InvalidSize { size: self.size });
        }
        // 0% can never light a cell, so the retry loop could not terminate.
        if self.percent_on == 0 || self.percent_on > 100 {
            return Err(GameError::InvalidPercent {
                percent_on: self.percent_on,
            });
        }
        if self.max_generation_attempts == 0 {
            return Err(GameError::InvalidAttempts);
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: 5,
            percent_on: 20,
            max_generation_attempts: DEFAULT_MAX_GENERATION_ATTEMPTS,
            seed: None,
        }
    }
}
