//! Splits the multiset {1, 5, 6} into two equal-sum groups.
//!
//! Builds the objective (1*x0 + 5*x1 + 6*x2)^2 over ±1 spins, prints its
//! Ising form, samples it with simulated annealing, and prints the
//! minimum-energy assignment in the {0,1} encoding.

use qubo_anneal::expr::{var_array, LinearExpr};
use qubo_anneal::model::select_best;
use qubo_anneal::sampler::{AnnealConfig, Sampler, SimulatedAnnealingSampler};
use qubo_anneal::Vartype;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let x = var_array("x", 3);
    let objective = LinearExpr::weighted(&x, &[1.0, 5.0, 6.0])?.squared();
    let model = objective.compile(Vartype::Spin);

    let (h, j, offset) = model.to_ising();
    println!("Ising form (linear biases, quadratic biases, offset):");
    println!("({h:?}, {j:?}, {offset})");

    let sampler = SimulatedAnnealingSampler::new(AnnealConfig::default());
    let sampleset = sampler.sample(model.bqm(), 10)?;
    let decoded = model.decode_sampleset(&sampleset);
    let best = select_best(&decoded)?;

    println!("Best assignment found ({{0,1}} encoding, energy {}):", best.energy);
    println!("{:?}", best.assignment);
    Ok(())
}
