//! Per-game random number generator.
//!
//! Uses the `rand` crate with `SmallRng` (xoshiro256++). Each `Grid` owns one
//! instance, so games can be replayed from a seed.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// A seedable RNG owned by a single grid.
pub struct GameRng {
    inner: SmallRng,
}

impl GameRng {
    /// Create from system entropy (browser crypto.getRandomValues or OS).
    pub fn new() -> Self {
        Self {
            inner: SmallRng::from_os_rng(),
        }
    }

    /// Create with a specific seed for deterministic behavior.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: SmallRng::seed_from_u64(seed),
        }
    }

    /// Draw a uniform percentage in [0, 100).
    #[inline(always)]
    pub fn percent(&mut self) -> u8 {
        self.inner.random_range(0..100)
    }

    /// True with probability `percent_on / 100`.
    #[inline]
    pub fn chance(&mut self, percent_on: u8) -> bool {
        self.percent() < percent_on
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new()
    }
}
