//! Fitness evaluation over the decoded search domain.
//!
//! An external objective is treated as lower-is-better and non-negative.
//! The adapter decodes a chromosome, scales it to domain coordinates, and
//! maps the objective through `1 / (objective + 1)`, so scores live in
//! (0, 1] and the objective's global minimum scores exactly 1.

use crate::error::{GaError, GaResult};
use crate::ga::codec::decode;
use crate::ga::genome::Chromosome;
use std::fmt;

/// Adapter from a bivariate objective to a chromosome fitness score.
pub struct DomainFitness<F> {
    objective: F,
}

impl<F> fmt::Debug for DomainFitness<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DomainFitness").finish_non_exhaustive()
    }
}

impl<F: Fn(f64, f64) -> f64> DomainFitness<F> {
    /// Wrap an objective function.
    #[must_use]
    pub fn new(objective: F) -> Self {
        Self { objective }
    }

    /// Score a chromosome.
    ///
    /// # Errors
    ///
    /// Returns [`GaError::ChromosomeTooShort`] if the chromosome cannot
    /// be decoded and [`GaError::ObjectiveRange`] if the objective
    /// returns a value at or below -1.
    pub fn score(&self, chromosome: &Chromosome) -> GaResult<f64> {
        let phenotype = decode(chromosome)?.to_phenotype();
        let value = (self.objective)(phenotype.x, phenotype.y);
        if value <= -1.0 {
            return Err(GaError::ObjectiveRange { value });
        }
        Ok(1.0 / (value + 1.0))
    }
}

/// Score every chromosome, in population order.
///
/// # Errors
///
/// Propagates the first scoring error; the fitness vector is all-or-nothing.
pub fn evaluate_population<F: Fn(f64, f64) -> f64>(
    population: &[Chromosome],
    fitness: &DomainFitness<F>,
) -> GaResult<Vec<f64>> {
    population.iter().map(|c| fitness.score(c)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga::codec::{Genotype, encode};
    use crate::ga::genome::random_population;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn test_zero_objective_scores_one() {
        let fitness = DomainFitness::new(|_, _| 0.0);
        let chromosome = encode(Genotype { x: 123, y: -456 });
        let score = fitness.score(&chromosome).unwrap();
        assert!((score - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_positive_objective_scores_below_one() {
        let fitness = DomainFitness::new(|_, _| 3.0);
        let chromosome = encode(Genotype { x: 0, y: 0 });
        let score = fitness.score(&chromosome).unwrap();
        assert!((score - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_short_chromosome_is_rejected() {
        let fitness = DomainFitness::new(|_, _| 0.0);
        let chromosome = Chromosome { bits: vec![false; 100] };
        assert_eq!(
            fitness.score(&chromosome),
            Err(GaError::ChromosomeTooShort { len: 100, required: 128 })
        );
    }

    #[test]
    fn test_objective_at_minus_one_is_rejected() {
        let fitness = DomainFitness::new(|_, _| -1.0);
        let chromosome = encode(Genotype { x: 0, y: 0 });
        assert!(matches!(
            fitness.score(&chromosome),
            Err(GaError::ObjectiveRange { .. })
        ));
    }

    #[test]
    fn test_population_scores_align_by_index() {
        let mut rng = SmallRng::seed_from_u64(42);
        let population = random_population(&mut rng, 10, 128);
        let fitness = DomainFitness::new(|x: f64, y: f64| x * x + y * y);
        let scores = evaluate_population(&population, &fitness).unwrap();
        assert_eq!(scores.len(), population.len());
        for (chromosome, &score) in population.iter().zip(&scores) {
            assert!((fitness.score(chromosome).unwrap() - score).abs() < f64::EPSILON);
        }
    }
}
