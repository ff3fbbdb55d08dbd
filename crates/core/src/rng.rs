//! RNG module - uniform random piece generation
//!
//! Every draw picks one of the seven kinds with equal probability, independent of
//! previous draws (no bag). A seeded generator replays the same sequence, which the
//! tests and benches rely on; an unseeded one draws its seed from OS entropy.

use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::types::PieceKind;

/// Uniform piece generator
#[derive(Debug, Clone)]
pub struct PieceGenerator {
    rng: StdRng,
    uniform: Uniform<usize>,
    seed: Option<u64>,
}

impl PieceGenerator {
    /// Create a deterministic generator from `seed`
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            uniform: Uniform::from(0..PieceKind::ALL.len()),
            seed: Some(seed),
        }
    }

    /// Create a generator seeded from OS entropy
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            uniform: Uniform::from(0..PieceKind::ALL.len()),
            seed: None,
        }
    }

    /// Create a generator from an optional seed
    pub fn with_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::new(seed),
            None => Self::from_entropy(),
        }
    }

    /// Seed this generator was built from, if any
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Draw the next piece kind
    pub fn next_kind(&mut self) -> PieceKind {
        PieceKind::ALL[self.uniform.sample(&mut self.rng)]
    }

    /// Rewind to the start of the sequence (seeded) or reseed from entropy (unseeded)
    pub fn reset(&mut self) {
        *self = Self::with_seed(self.seed);
    }
}

impl Iterator for PieceGenerator {
    type Item = PieceKind;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.next_kind())
    }
}
