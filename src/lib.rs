//! QUBO/Ising modeling and simulated-annealing sampling.
//!
//! Provides the three layers needed to pose and heuristically minimize a
//! quadratic unconstrained binary optimization (QUBO) objective:
//!
//! - **Expressions** ([`expr`]): named decision variables, weighted linear
//!   expressions over them, and explicit expansion of a squared sum into a
//!   quadratic objective.
//! - **Models** ([`model`]): compiled binary quadratic models holding linear
//!   biases, quadratic biases, and a constant offset, with exact
//!   Spin/Binary conversion, Ising- and QUBO-form exports keyed by variable
//!   name, sample decoding, and best-candidate selection.
//! - **Samplers** ([`sampler`]): a capability trait for drawing scored
//!   candidate assignments from a model, implemented by a simulated
//!   annealer and by exhaustive enumeration for small instances.
//!
//! # Example
//!
//! Split the multiset {1, 5, 6} into two groups of equal sum by minimizing
//! `(1*x0 + 5*x1 + 6*x2)^2` over ±1 spins:
//!
//! ```
//! use qubo_anneal::expr::{var_array, LinearExpr};
//! use qubo_anneal::model::select_best;
//! use qubo_anneal::sampler::{AnnealConfig, Sampler, SimulatedAnnealingSampler};
//! use qubo_anneal::Vartype;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let x = var_array("x", 3);
//! let objective = LinearExpr::weighted(&x, &[1.0, 5.0, 6.0])?.squared();
//! let model = objective.compile(Vartype::Spin);
//!
//! let sampler = SimulatedAnnealingSampler::new(AnnealConfig::default().with_seed(7));
//! let sampleset = sampler.sample(model.bqm(), 10)?;
//! let decoded = model.decode_sampleset(&sampleset);
//! let best = select_best(&decoded)?;
//! assert_eq!(best.energy, 0.0);
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! The expression layer is the only writer; everything downstream is
//! immutable once built. Samplers see models through
//! [`model::BinaryQuadraticModel`] alone and report raw index-based
//! assignments; names are reattached during decoding. Any search strategy
//! that can score {0,1} assignments can stand in for the annealer by
//! implementing [`sampler::Sampler`].

pub mod expr;
pub mod model;
pub mod sampler;

pub use model::Vartype;
