//! Compiled binary quadratic models.
//!
//! A [`BinaryQuadraticModel`] is the index-based form a sampler consumes:
//! linear biases, quadratic biases keyed by index pair, a constant offset,
//! and the variable domain. A [`CompiledModel`] wraps one together with the
//! variable names, providing named Ising/QUBO exports and decoding of raw
//! sampler output back into named assignments.
//!
//! Best-candidate selection over decoded samples lives here too
//! ([`select_best`]): a linear scan that keeps the first sample attaining
//! the minimum energy.

mod bqm;
mod compile;
mod select;

pub use bqm::{BinaryQuadraticModel, Vartype};
pub use compile::{CompiledModel, DecodedSample};
pub use select::{select_best, SelectError};
