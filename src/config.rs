//! Per-game settings

use crate::game::DEFAULT_MAX_HINTS;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Settings shared by every game in a process
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Hints available in each game
    pub max_hints: u8,
    /// Fixed seed for reproducible secrets and hints
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_hints: DEFAULT_MAX_HINTS,
            seed: None,
        }
    }
}

impl GameConfig {
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub const fn with_max_hints(mut self, max_hints: u8) -> Self {
        self.max_hints = max_hints;
        self
    }

    /// Random source for secret and hint choices
    #[must_use]
    pub fn rng(&self) -> StdRng {
        self.seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
    }
}
