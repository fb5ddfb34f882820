//! Run command: evolve a population against the Himmelblau objective.
//!
//! This is the thin demo caller: it wires parameters, seeds the RNG,
//! drives the loop one generation at a time for progress reporting, and
//! formats a summary of the run. The objective lives here, not in the
//! engine; any `Fn(f64, f64) -> f64` slots in the same way.

// Progress reporting uses intentional casts
#![allow(clippy::cast_possible_truncation)]

use super::{CliError, OutputFormat};
use bitga::ga::{
    CHROMOSOME_BITS, DomainFitness, FitnessStats, decode, evaluate_population, random_population,
    step,
};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use serde::Serialize;

/// JSON-serializable summary of an evolution run.
#[derive(Debug, Serialize)]
struct RunReport {
    /// Seed the run was started from.
    seed: u64,
    /// Population size.
    population: usize,
    /// Generations executed.
    generations: usize,
    /// Fitness summary of the initial population.
    initial: FitnessStats,
    /// Fitness summary of the final population.
    evolved: FitnessStats,
    /// Best decoded solution in the final population.
    best: BestSolution,
}

/// The fittest chromosome of the final population, decoded.
#[derive(Debug, Serialize)]
struct BestSolution {
    /// First domain coordinate.
    x: f64,
    /// Second domain coordinate.
    y: f64,
    /// Objective value at (x, y).
    objective: f64,
    /// Fitness score of the chromosome.
    fitness: f64,
}

/// Bivariate test function with four global minima, all at objective zero.
fn himmelblau(x: f64, y: f64) -> f64 {
    (x * x + y - 11.0).powi(2) + (x + y * y - 7.0).powi(2)
}

/// Execute the run command.
pub(crate) fn execute(
    population_size: usize,
    generations: usize,
    seed: Option<u64>,
    format: OutputFormat,
    quiet: bool,
) -> Result<(), CliError> {
    let seed = seed.unwrap_or_else(|| {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(42)
    });

    if population_size == 0 || !population_size.is_multiple_of(2) {
        return Err(CliError::new(format!(
            "population size must be a positive even number, got {population_size}"
        )));
    }

    let mut rng = SmallRng::seed_from_u64(seed);
    let fitness = DomainFitness::new(himmelblau);
    let mut population = random_population(&mut rng, population_size, CHROMOSOME_BITS);

    let initial = FitnessStats::from_scores(&evaluate_population(&population, &fitness)?);

    let bar = if quiet {
        ProgressBar::hidden()
    } else {
        let bar = ProgressBar::new(generations as u64);
        bar.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} generations {msg}",
                )
                .expect("valid template")
                .progress_chars("=>-"),
        );
        bar
    };

    for _ in 0..generations {
        let (next, scores) = step(population, &fitness, &mut rng)?;
        bar.set_message(format!("best {:.4}", FitnessStats::from_scores(&scores).best));
        bar.inc(1);
        population = next;
    }
    bar.finish_and_clear();

    // The loop never scores the final population; do it here for the report.
    let final_scores = evaluate_population(&population, &fitness)?;
    let evolved = FitnessStats::from_scores(&final_scores);

    let best_idx = final_scores
        .iter()
        .enumerate()
        .max_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
        .map_or(0, |(i, _)| i);
    let phenotype = decode(&population[best_idx])?.to_phenotype();
    let report = RunReport {
        seed,
        population: population_size,
        generations,
        initial,
        evolved,
        best: BestSolution {
            x: phenotype.x,
            y: phenotype.y,
            objective: himmelblau(phenotype.x, phenotype.y),
            fitness: final_scores.get(best_idx).copied().unwrap_or(0.0),
        },
    };

    match format {
        OutputFormat::Text => print_text(&report),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&report)
                .map_err(|e| CliError::new(e.to_string()))?;
            println!("{json}");
        }
    }

    Ok(())
}

fn print_text(report: &RunReport) {
    println!(
        "Evolution complete (seed {}, population {}, {} generations)",
        report.seed, report.population, report.generations
    );
    println!(
        "  Initial: best={:.4} mean={:.4} std={:.4}",
        report.initial.best, report.initial.mean, report.initial.std_dev
    );
    println!(
        "  Final:   best={:.4} mean={:.4} std={:.4}",
        report.evolved.best, report.evolved.mean, report.evolved.std_dev
    );
    println!(
        "  Best solution: x={:.4} y={:.4} objective={:.6} fitness={:.4}",
        report.best.x, report.best.y, report.best.objective, report.best.fitness
    );
}
