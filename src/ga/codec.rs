//! Conversions between genotypes, chromosomes, and the search domain.
//!
//! A genotype is a pair of signed 64-bit integers. Encoding lays each
//! component out most-significant-bit first, giving a 128-bit chromosome;
//! decoding reads the two 64-bit windows back. `to_domain` scales a
//! component onto the real-valued search domain.

// Bit packing and domain scaling use intentional integer/float casts
#![allow(
    clippy::cast_sign_loss,
    clippy::cast_possible_wrap,
    clippy::cast_precision_loss
)]

use crate::error::{GaError, GaResult};
use crate::ga::genome::Chromosome;
use serde::{Deserialize, Serialize};

/// Bits per genotype component.
pub const COMPONENT_BITS: usize = 64;

/// Total chromosome length produced by [`encode`] and required by
/// [`decode`].
pub const CHROMOSOME_BITS: usize = 2 * COMPONENT_BITS;

/// Divisor scaling a component onto the search domain.
///
/// The i64 extremes land at roughly ±5.0000001, so the searchable domain
/// is about [-5, 5]. The map is linear and stateless; nothing clamps.
const DOMAIN_SCALE: f64 = 1.8446744e18;

/// A pair of signed 64-bit coordinates in encoded form.
///
/// Never mutated in place; operators that need a different genotype
/// build a new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genotype {
    /// First coordinate.
    pub x: i64,
    /// Second coordinate.
    pub y: i64,
}

impl Genotype {
    /// Scale both components onto the real-valued search domain.
    #[must_use]
    pub fn to_phenotype(self) -> Phenotype {
        Phenotype {
            x: to_domain(self.x),
            y: to_domain(self.y),
        }
    }
}

/// A pair of real-valued coordinates in the search domain.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Phenotype {
    /// First coordinate.
    pub x: f64,
    /// Second coordinate.
    pub y: f64,
}

/// Serialize a genotype into a 128-bit chromosome.
///
/// The first component occupies bits [0, 64), the second bits [64, 128),
/// each most significant bit first. Lossless: [`decode`] inverts it.
#[must_use]
pub fn encode(genotype: Genotype) -> Chromosome {
    let mut bits = Vec::with_capacity(CHROMOSOME_BITS);
    push_component(&mut bits, genotype.x);
    push_component(&mut bits, genotype.y);
    Chromosome { bits }
}

fn push_component(bits: &mut Vec<bool>, component: i64) {
    let raw = component as u64;
    for i in (0..COMPONENT_BITS).rev() {
        bits.push(((raw >> i) & 1) == 1);
    }
}

/// Reconstruct a genotype from the first 128 bits of a chromosome.
///
/// Bits past the decode window are ignored.
///
/// # Errors
///
/// Returns [`GaError::ChromosomeTooShort`] if fewer than 128 bits are
/// present.
pub fn decode(chromosome: &Chromosome) -> GaResult<Genotype> {
    if chromosome.len() < CHROMOSOME_BITS {
        return Err(GaError::ChromosomeTooShort {
            len: chromosome.len(),
            required: CHROMOSOME_BITS,
        });
    }
    Ok(Genotype {
        x: read_component(&chromosome.bits[..COMPONENT_BITS]),
        y: read_component(&chromosome.bits[COMPONENT_BITS..CHROMOSOME_BITS]),
    })
}

fn read_component(window: &[bool]) -> i64 {
    let mut value = 0u64;
    for &bit in window {
        value = (value << 1) | u64::from(bit);
    }
    value as i64
}

/// Scale an encoded component onto the real-valued search domain.
#[must_use]
pub fn to_domain(component: i64) -> f64 {
    component as f64 / DOMAIN_SCALE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let genotype = Genotype {
            x: 5534023222112865484,
            y: -3689348814741910323,
        };
        let chromosome = encode(genotype);
        assert_eq!(chromosome.len(), CHROMOSOME_BITS);
        assert_eq!(decode(&chromosome).unwrap(), genotype);
    }

    #[test]
    fn test_round_trip_extremes() {
        for value in [i64::MIN, -1, 0, 1, i64::MAX] {
            let genotype = Genotype { x: value, y: value.wrapping_neg() };
            assert_eq!(decode(&encode(genotype)).unwrap(), genotype);
        }
    }

    #[test]
    fn test_encode_is_msb_first() {
        let chromosome = encode(Genotype { x: 1, y: i64::MIN });
        // x = 1: only the last bit of the first window is set.
        assert!(!chromosome.bits[0]);
        assert!(chromosome.bits[COMPONENT_BITS - 1]);
        // y = i64::MIN: only the sign bit of the second window is set.
        assert!(chromosome.bits[COMPONENT_BITS]);
        assert!(!chromosome.bits[CHROMOSOME_BITS - 1]);
    }

    #[test]
    fn test_decode_ignores_trailing_bits() {
        let genotype = Genotype { x: 42, y: -42 };
        let mut chromosome = encode(genotype);
        chromosome.bits.extend([true, false, true]);
        assert_eq!(decode(&chromosome).unwrap(), genotype);
    }

    #[test]
    fn test_decode_short_chromosome() {
        let chromosome = Chromosome { bits: vec![true; 64] };
        assert_eq!(
            decode(&chromosome),
            Err(GaError::ChromosomeTooShort { len: 64, required: 128 })
        );
    }

    #[test]
    fn test_domain_boundaries() {
        assert!(to_domain(0).abs() < f64::EPSILON);
        let hi = to_domain(i64::MAX);
        let lo = to_domain(i64::MIN);
        assert!(hi > 5.0 && hi < 5.000001);
        assert!(lo < -5.0 && lo > -5.000001);
    }

    #[test]
    fn test_domain_is_monotone() {
        let samples = [i64::MIN, -1_000_000, -1, 0, 1, 1_000_000, i64::MAX];
        for pair in samples.windows(2) {
            assert!(to_domain(pair[0]) < to_domain(pair[1]));
        }
    }
}
