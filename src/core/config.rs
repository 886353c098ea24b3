//! Scramble configuration.
//!
//! Callers describe a scramble with `ScrambleConfig` and hand it to
//! `Cube::scramble_with`. A fixed seed makes the scramble reproducible;
//! without one the RNG is seeded from OS entropy.

use serde::{Deserialize, Serialize};

use super::rng::CubeRng;

/// Number of random turns in a scramble when the caller does not say.
pub const DEFAULT_SCRAMBLE_MOVES: usize = 20;

/// How to scramble a cube.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrambleConfig {
    /// Number of random quarter turns to apply. Zero is allowed.
    pub move_count: usize,

    /// Fixed seed for a reproducible scramble. `None` draws from entropy.
    pub seed: Option<u64>,
}

impl Default for ScrambleConfig {
    fn default() -> Self {
        Self {
            move_count: DEFAULT_SCRAMBLE_MOVES,
            seed: None,
        }
    }
}

impl ScrambleConfig {
    /// Default scramble: 20 moves, entropy seeded.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of moves.
    #[must_use]
    pub fn with_move_count(mut self, move_count: usize) -> Self {
        self.move_count = move_count;
        self
    }

    /// Fix the seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build the RNG this configuration describes.
    #[must_use]
    pub fn rng(&self) -> CubeRng {
        match self.seed {
            Some(seed) => CubeRng::new(seed),
            None => CubeRng::from_entropy(),
        }
    }
}
