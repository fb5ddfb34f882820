//! Tournament selection over a fitness vector.
//!
//! Each parent is the better of two uniformly drawn candidates; two
//! independent tournaments pick the two parents. Candidates are drawn
//! with replacement, so a tournament can compare an index against itself
//! and the two winners can coincide.

// Statistics use intentional precision-losing casts
#![allow(clippy::cast_precision_loss)]

use crate::error::{GaError, GaResult};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Pick two parent indices by independent binary tournaments.
///
/// There is no distinctness guarantee: a chromosome may end up crossed
/// with a copy of itself.
///
/// # Errors
///
/// Returns [`GaError::EmptyPopulation`] for an empty fitness vector.
pub fn tournament_selection<R: Rng>(fitness: &[f64], rng: &mut R) -> GaResult<(usize, usize)> {
    let a = binary_tournament(fitness, rng)?;
    let b = binary_tournament(fitness, rng)?;
    Ok((a, b))
}

fn binary_tournament<R: Rng>(fitness: &[f64], rng: &mut R) -> GaResult<usize> {
    if fitness.is_empty() {
        return Err(GaError::EmptyPopulation);
    }
    let first = rng.gen_range(0..fitness.len());
    let second = rng.gen_range(0..fitness.len());
    // Strict comparison: the first draw wins on equal fitness.
    Ok(if fitness[second] > fitness[first] { second } else { first })
}

/// Summary statistics over one generation's fitness vector.
///
/// This is the reporting side channel: the loop records these per
/// generation and callers decide what to log.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FitnessStats {
    /// Highest score.
    pub best: f64,
    /// Arithmetic mean.
    pub mean: f64,
    /// Population standard deviation.
    pub std_dev: f64,
}

impl FitnessStats {
    /// Compute statistics over a fitness vector; all zeros when empty.
    #[must_use]
    pub fn from_scores(scores: &[f64]) -> Self {
        if scores.is_empty() {
            return Self { best: 0.0, mean: 0.0, std_dev: 0.0 };
        }
        let mean = scores.iter().sum::<f64>() / scores.len() as f64;
        let best = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let variance =
            scores.iter().map(|s| (s - mean).powi(2)).sum::<f64>() / scores.len() as f64;
        Self { best, mean, std_dev: variance.sqrt() }
    }
}
