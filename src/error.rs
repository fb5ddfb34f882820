//! Error types for the genetic algorithm engine.

use std::fmt;

/// Precondition violations reported at the call that breaks them.
///
/// Every operator validates its input synchronously; an invalid input
/// aborts only that call and leaves the caller's data untouched. No
/// operation is retried.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GaError {
    /// A chromosome is shorter than the decoder's fixed window.
    ChromosomeTooShort {
        /// Bits actually present.
        len: usize,
        /// Bits the decoder requires.
        required: usize,
    },
    /// Two chromosomes of different lengths were crossed, or a population
    /// mixes chromosome lengths.
    LengthMismatch {
        /// Length of the first chromosome seen.
        left: usize,
        /// Length of the offending chromosome.
        right: usize,
    },
    /// An operator was handed a zero-length chromosome.
    EmptyChromosome,
    /// Selection or evolution was handed an empty population.
    EmptyPopulation,
    /// The generational loop was handed an odd-sized population.
    ///
    /// Offspring are produced in pairs, so an odd size would silently
    /// shrink the population every generation.
    OddPopulationSize {
        /// The rejected population size.
        size: usize,
    },
    /// The objective returned a value at or below -1, which would make
    /// the fitness transform's denominator non-positive.
    ObjectiveRange {
        /// The offending objective value.
        value: f64,
    },
}

impl fmt::Display for GaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GaError::ChromosomeTooShort { len, required } => {
                write!(f, "chromosome has {len} bits, decoder requires {required}")
            }
            GaError::LengthMismatch { left, right } => {
                write!(f, "chromosome lengths differ: {left} vs {right}")
            }
            GaError::EmptyChromosome => write!(f, "chromosome is empty"),
            GaError::EmptyPopulation => write!(f, "population is empty"),
            GaError::OddPopulationSize { size } => {
                write!(f, "population size {size} is odd; offspring are produced in pairs")
            }
            GaError::ObjectiveRange { value } => {
                write!(f, "objective value {value} is at or below -1")
            }
        }
    }
}

impl std::error::Error for GaError {}

/// Result type for engine operations.
pub type GaResult<T> = Result<T, GaError>;
