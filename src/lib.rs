// Allow unwrap and unreadable literals in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::unreadable_literal))]
//! Bitga: a binary-encoded genetic algorithm engine.
//!
//! This crate optimizes a caller-supplied bivariate objective function by
//! evolving fixed-length bit-string chromosomes with tournament selection,
//! two-point segment-exchange crossover, and single-bit mutation.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │         Evolution Loop              │
//! ├─────────────────────────────────────┤
//! │  Selection │ Crossover │ Mutation   │
//! ├─────────────────────────────────────┤
//! │         Fitness Adapter             │
//! ├─────────────────────────────────────┤
//! │    Codec (bits ↔ i64 ↔ domain)      │
//! └─────────────────────────────────────┘
//! ```

pub mod error;
pub mod ga;

pub use error::{GaError, GaResult};
