//! Genetic algorithm engine over binary chromosomes.
//!
//! Candidate solutions are fixed-length bit-strings. The codec maps them
//! to pairs of signed 64-bit integers and onward to real-valued
//! coordinates; the fitness adapter scores those coordinates against a
//! caller-supplied objective; selection, crossover, and mutation are
//! independent building blocks the generational loop composes.
//!
//! All randomness flows through an explicit [`rand::Rng`] handle passed
//! into each call, so seeded runs are reproducible.
//!
//! # Example
//!
//! ```
//! use bitga::ga::{evolve, random_population, DomainFitness, CHROMOSOME_BITS};
//! use rand::SeedableRng;
//! use rand::rngs::SmallRng;
//!
//! let mut rng = SmallRng::seed_from_u64(42);
//! let fitness = DomainFitness::new(|x: f64, y: f64| x * x + y * y);
//! let initial = random_population(&mut rng, 20, CHROMOSOME_BITS);
//! let (population, _stats) = evolve(initial, 10, &fitness, &mut rng)?;
//! assert_eq!(population.len(), 20);
//! # Ok::<(), bitga::GaError>(())
//! ```

mod codec;
mod crossover;
mod evolution;
mod fitness;
mod genome;
mod mutation;
mod selection;

pub use codec::{CHROMOSOME_BITS, COMPONENT_BITS, Genotype, Phenotype, decode, encode, to_domain};
pub use crossover::crossover;
pub use evolution::{EvolutionStats, GenerationStats, evolve, step};
pub use fitness::{DomainFitness, evaluate_population};
pub use genome::{Chromosome, random_population};
pub use mutation::mutate;
pub use selection::{FitnessStats, tournament_selection};
