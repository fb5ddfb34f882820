//! Chromosome representation and random generation.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// A fixed-length bit sequence encoding one candidate solution.
///
/// All chromosomes in a population share one length, fixed for the
/// lifetime of a run. Operators never edit a chromosome in place; each
/// returns a freshly built value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chromosome {
    /// Raw bit sequence.
    pub bits: Vec<bool>,
}

impl Chromosome {
    /// Generate `length` independent, uniformly random bits.
    #[must_use]
    pub fn random<R: Rng>(rng: &mut R, length: usize) -> Self {
        let bits = (0..length).map(|_| rng.gen_bool(0.5)).collect();
        Self { bits }
    }

    /// Number of bits.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Whether the chromosome holds no bits.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }
}

/// Generate `size` independent random chromosomes of `length` bits each.
///
/// Duplicates are permitted; nothing de-duplicates the population.
#[must_use]
pub fn random_population<R: Rng>(rng: &mut R, size: usize, length: usize) -> Vec<Chromosome> {
    (0..size).map(|_| Chromosome::random(rng, length)).collect()
}
