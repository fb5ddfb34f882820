//! Generational evolution loop.
//!
//! One generation evaluates the population, then repeatedly selects two
//! parents by tournament, crosses them, and mutates both offspring until
//! a full replacement population exists. The loop runs a fixed number of
//! generations with no elitism and no convergence check.

use crate::error::{GaError, GaResult};
use crate::ga::crossover::crossover;
use crate::ga::fitness::{DomainFitness, evaluate_population};
use crate::ga::genome::Chromosome;
use crate::ga::mutation::mutate;
use crate::ga::selection::{FitnessStats, tournament_selection};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Statistics for a single generation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenerationStats {
    /// Generation number, starting at zero.
    pub generation: usize,
    /// Fitness summary of the population entering this generation.
    pub fitness: FitnessStats,
}

/// Statistics from a full evolution run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EvolutionStats {
    /// Per-generation summaries, one per completed transition.
    pub generations: Vec<GenerationStats>,
}

/// Advance a population by one generation.
///
/// Evaluates every chromosome, then produces `size / 2` offspring pairs:
/// each pair comes from tournament-selected parents, segment-exchange
/// crossover, and an independent single-bit mutation of both children.
/// The offspring wholly replace the input population; nothing survives
/// unchanged.
///
/// Returns the offspring population together with the fitness vector of
/// the *input* population, which is the per-generation reporting
/// channel. The offspring themselves are not evaluated here.
///
/// # Errors
///
/// Returns [`GaError::EmptyPopulation`] for an empty population,
/// [`GaError::OddPopulationSize`] for an odd-sized one (offspring come
/// in pairs, so an odd size would silently shrink the population), and
/// [`GaError::LengthMismatch`] when chromosome lengths are not uniform.
/// Fitness errors from scoring propagate unchanged.
pub fn step<F, R>(
    population: Vec<Chromosome>,
    fitness: &DomainFitness<F>,
    rng: &mut R,
) -> GaResult<(Vec<Chromosome>, Vec<f64>)>
where
    F: Fn(f64, f64) -> f64,
    R: Rng,
{
    validate(&population)?;
    let scores = evaluate_population(&population, fitness)?;

    let mut offspring = Vec::with_capacity(population.len());
    for _ in 0..population.len() / 2 {
        let (a, b) = tournament_selection(&scores, rng)?;
        let (child_a, child_b) = crossover(&population[a], &population[b], rng)?;
        offspring.push(mutate(&child_a, rng)?);
        offspring.push(mutate(&child_b, rng)?);
    }
    Ok((offspring, scores))
}

fn validate(population: &[Chromosome]) -> GaResult<()> {
    let Some(first) = population.first() else {
        return Err(GaError::EmptyPopulation);
    };
    if !population.len().is_multiple_of(2) {
        return Err(GaError::OddPopulationSize { size: population.len() });
    }
    if let Some(other) = population.iter().find(|c| c.len() != first.len()) {
        return Err(GaError::LengthMismatch {
            left: first.len(),
            right: other.len(),
        });
    }
    Ok(())
}

/// Run the loop for a fixed number of generations.
///
/// `generations == 0` returns the initial population unchanged. The
/// final population's fitness is not re-evaluated after the last
/// transition, and the best chromosome of a generation survives only if
/// re-selected and left un-mutated by chance.
///
/// # Errors
///
/// Same conditions as [`step`], reported at the violating generation.
pub fn evolve<F, R>(
    initial: Vec<Chromosome>,
    generations: usize,
    fitness: &DomainFitness<F>,
    rng: &mut R,
) -> GaResult<(Vec<Chromosome>, EvolutionStats)>
where
    F: Fn(f64, f64) -> f64,
    R: Rng,
{
    let mut population = initial;
    let mut stats = EvolutionStats::default();
    for generation in 0..generations {
        let (next, scores) = step(population, fitness, rng)?;
        stats.generations.push(GenerationStats {
            generation,
            fitness: FitnessStats::from_scores(&scores),
        });
        population = next;
    }
    Ok((population, stats))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga::codec::CHROMOSOME_BITS;
    use crate::ga::genome::random_population;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn test_step_conserves_population_size() {
        let mut rng = SmallRng::seed_from_u64(42);
        let fitness = DomainFitness::new(|x: f64, y: f64| x * x + y * y);
        let population = random_population(&mut rng, 20, CHROMOSOME_BITS);
        let (next, scores) = step(population, &fitness, &mut rng).unwrap();
        assert_eq!(next.len(), 20);
        assert_eq!(scores.len(), 20);
        assert!(next.iter().all(|c| c.len() == CHROMOSOME_BITS));
    }

    #[test]
    fn test_zero_generations_is_identity() {
        let mut rng = SmallRng::seed_from_u64(42);
        let fitness = DomainFitness::new(|_, _| 0.0);
        let initial = random_population(&mut rng, 4, CHROMOSOME_BITS);
        let (population, stats) = evolve(initial.clone(), 0, &fitness, &mut rng).unwrap();
        assert_eq!(population, initial);
        assert!(stats.generations.is_empty());
    }

    #[test]
    fn test_stats_cover_every_generation() {
        let mut rng = SmallRng::seed_from_u64(42);
        let fitness = DomainFitness::new(|x: f64, y: f64| x.abs() + y.abs());
        let initial = random_population(&mut rng, 10, CHROMOSOME_BITS);
        let (_, stats) = evolve(initial, 7, &fitness, &mut rng).unwrap();
        assert_eq!(stats.generations.len(), 7);
        for (i, generation) in stats.generations.iter().enumerate() {
            assert_eq!(generation.generation, i);
            assert!(generation.fitness.best > 0.0);
        }
    }

    #[test]
    fn test_odd_population_is_rejected() {
        let mut rng = SmallRng::seed_from_u64(42);
        let fitness = DomainFitness::new(|_, _| 0.0);
        let population = random_population(&mut rng, 21, CHROMOSOME_BITS);
        assert_eq!(
            step(population, &fitness, &mut rng).unwrap_err(),
            GaError::OddPopulationSize { size: 21 }
        );
    }

    #[test]
    fn test_empty_population_is_rejected() {
        let mut rng = SmallRng::seed_from_u64(42);
        let fitness = DomainFitness::new(|_, _| 0.0);
        assert_eq!(
            evolve(Vec::new(), 3, &fitness, &mut rng).unwrap_err(),
            GaError::EmptyPopulation
        );
    }

    #[test]
    fn test_mixed_lengths_are_rejected() {
        let mut rng = SmallRng::seed_from_u64(42);
        let fitness = DomainFitness::new(|_, _| 0.0);
        let population = vec![
            Chromosome::random(&mut rng, CHROMOSOME_BITS),
            Chromosome::random(&mut rng, CHROMOSOME_BITS + 2),
        ];
        assert_eq!(
            step(population, &fitness, &mut rng).unwrap_err(),
            GaError::LengthMismatch { left: CHROMOSOME_BITS, right: CHROMOSOME_BITS + 2 }
        );
    }
}
