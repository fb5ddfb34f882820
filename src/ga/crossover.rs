//! Two-point segment-exchange crossover.
//!
//! Two cut indices are drawn uniformly with replacement and ordered; the
//! bits in the closed range between them are swapped between offspring
//! initialized as parent copies. Because the draws are independent, short
//! segments are over-represented: both cuts land on the same index with
//! probability 1/len, swapping a single bit.

use crate::error::{GaError, GaResult};
use crate::ga::genome::Chromosome;
use rand::Rng;

/// Exchange a contiguous bit segment between two parents.
///
/// Offspring start as copies of `parent_a` and `parent_b`; positions in
/// the drawn range `[lo, hi]` (inclusive on both ends) hold the other
/// parent's bits. The parents are left untouched.
///
/// # Errors
///
/// Returns [`GaError::LengthMismatch`] for unequal-length parents and
/// [`GaError::EmptyChromosome`] for empty ones.
pub fn crossover<R: Rng>(
    parent_a: &Chromosome,
    parent_b: &Chromosome,
    rng: &mut R,
) -> GaResult<(Chromosome, Chromosome)> {
    if parent_a.len() != parent_b.len() {
        return Err(GaError::LengthMismatch {
            left: parent_a.len(),
            right: parent_b.len(),
        });
    }
    if parent_a.is_empty() {
        return Err(GaError::EmptyChromosome);
    }

    let first = rng.gen_range(0..parent_a.len());
    let second = rng.gen_range(0..parent_a.len());
    let (lo, hi) = if first <= second { (first, second) } else { (second, first) };

    let mut offspring_a = parent_a.clone();
    let mut offspring_b = parent_b.clone();
    for i in lo..=hi {
        std::mem::swap(&mut offspring_a.bits[i], &mut offspring_b.bits[i]);
    }
    Ok((offspring_a, offspring_b))
}
