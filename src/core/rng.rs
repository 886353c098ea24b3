//! Deterministic random number generation for scrambles.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces the same scramble
//! - **Recoverable**: An entropy-seeded RNG keeps its seed for replay
//!
//! ```
//! use rust_cube::core::CubeRng;
//!
//! let mut rng = CubeRng::new(42);
//! let mut again = CubeRng::new(rng.seed());
//! assert_eq!(rng.random_move(), again.random_move());
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::face::Face;
use super::moves::{Direction, Move};

/// Deterministic RNG backing scrambles.
///
/// Uses ChaCha8 for speed while maintaining high quality randomness.
#[derive(Clone, Debug)]
pub struct CubeRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl CubeRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from OS entropy.
    ///
    /// The drawn seed is kept, so `seed()` still reproduces the sequence.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Generate a random boolean with given probability of true.
    pub fn gen_bool(&mut self, probability: f64) -> bool {
        self.inner.gen_bool(probability)
    }

    /// Uniformly random face.
    pub fn random_face(&mut self) -> Face {
        Face::ALL[self.gen_range_usize(0..Face::ALL.len())]
    }

    /// Uniformly random direction, independent of any other draw.
    pub fn random_direction(&mut self) -> Direction {
        Direction::from_prime(self.gen_bool(0.5))
    }

    /// Uniformly random move out of the 12 quarter turns.
    pub fn random_move(&mut self) -> Move {
        let face = self.random_face();
        Move::new(face, self.random_direction())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = CubeRng::new(42);
        let mut rng2 = CubeRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.random_move(), rng2.random_move());
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = CubeRng::new(1);
        let mut rng2 = CubeRng::new(2);

        let seq1: Vec<_> = (0..20).map(|_| rng1.random_move()).collect();
        let seq2: Vec<_> = (0..20).map(|_| rng2.random_move()).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_entropy_seed_reproduces() {
        let mut rng = CubeRng::from_entropy();
        let mut replay = CubeRng::new(rng.seed());

        for _ in 0..10 {
            assert_eq!(rng.random_move(), replay.random_move());
        }
    }

    #[test]
    fn test_random_move_covers_all_moves() {
        let mut rng = CubeRng::new(7);
        let mut seen = std::collections::HashSet::new();

        for _ in 0..1000 {
            seen.insert(rng.random_move());
        }

        assert_eq!(seen.len(), 12);
    }
}
