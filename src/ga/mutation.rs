//! Single-bit mutation.
//!
//! Mutation is unconditional: every call flips exactly one bit at a
//! uniformly chosen position. There is no rate parameter.

use crate::error::{GaError, GaResult};
use crate::ga::genome::Chromosome;
use rand::Rng;

/// Flip one uniformly chosen bit, returning the mutated copy.
///
/// The input chromosome is left untouched.
///
/// # Errors
///
/// Returns [`GaError::EmptyChromosome`] if the chromosome has no bits.
pub fn mutate<R: Rng>(chromosome: &Chromosome, rng: &mut R) -> GaResult<Chromosome> {
    if chromosome.is_empty() {
        return Err(GaError::EmptyChromosome);
    }
    let index = rng.gen_range(0..chromosome.len());
    let mut mutated = chromosome.clone();
    mutated.bits[index] = !mutated.bits[index];
    Ok(mutated)
}
