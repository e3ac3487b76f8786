//! Samplers for binary quadratic models.
//!
//! A sampler draws scored candidate assignments from a model: the
//! [`Sampler`] trait is the single synchronous call boundary
//! `sample(model, num_reads)`, and any search strategy that can score
//! {0,1} assignments can implement it. Two implementations ship here:
//!
//! - [`SimulatedAnnealingSampler`]: Metropolis single-bit-flip sweeps with
//!   pluggable cooling schedules and independent restarts per read.
//! - [`ExhaustiveSampler`]: full enumeration for small instances, handy as
//!   a ground-truth substitute in tests.
//!
//! Sampling is heuristic. A sample set holds whatever the reads produced,
//! in production order; nothing deduplicates equal assignments or sorts by
//! energy.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Metropolis et al. (1953), "Equation of State Calculations by Fast Computing Machines"
//! - Lundy & Mees (1986), "Convergence of an Annealing Algorithm"

mod annealer;
mod config;
mod exact;
mod types;

pub use annealer::SimulatedAnnealingSampler;
pub use config::{AnnealConfig, CoolingSchedule};
pub use exact::ExhaustiveSampler;
pub use types::{Sample, SampleSet, Sampler, SamplerError};
