//! Simulated annealing over binary quadratic models.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use super::config::{AnnealConfig, CoolingSchedule};
use super::types::{Sample, SampleSet, Sampler, SamplerError};
use crate::model::{BinaryQuadraticModel, Vartype};

/// Samples a model with Metropolis single-bit-flip annealing.
///
/// Each read starts from a fresh uniform-random {0,1} state and walks the
/// full cooling trajectory; the best state seen during the walk is that
/// read's sample. Spin models are converted to the {0,1} encoding before
/// sweeping, so assignments in the result are always bits.
///
/// With the `parallel` feature, reads run on the rayon thread pool. Results
/// are collected in read order and each read owns its RNG stream, so a
/// seeded run produces the same sample set either way.
#[derive(Debug, Clone, Default)]
pub struct SimulatedAnnealingSampler {
    config: AnnealConfig,
}

impl SimulatedAnnealingSampler {
    pub fn new(config: AnnealConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnnealConfig {
        &self.config
    }

    /// One annealing read: random restart, cooled Metropolis sweeps,
    /// best-seen state reported.
    fn run_read(
        &self,
        model: &BinaryQuadraticModel,
        neighbors: &[Vec<(usize, f64)>],
        seed: u64,
    ) -> Sample {
        let config = &self.config;
        let n = model.num_variables();
        let mut rng = StdRng::seed_from_u64(seed);

        let mut state: Vec<i8> = (0..n).map(|_| rng.random_range(0..2) as i8).collect();
        let mut energy = model.energy(&state);
        let mut best = state.clone();
        let mut best_energy = energy;

        let mut temperature = config.initial_temperature;
        let mut total_sweeps = 0usize;
        let mut step = 0usize;
        let linear_max_steps = compute_linear_steps(config);

        'cooling: while temperature > config.min_temperature {
            let sweeps_here = match config.cooling {
                CoolingSchedule::LundyMees { .. } => 1,
                _ => config.sweeps_per_temperature,
            };

            for _ in 0..sweeps_here {
                if config.max_sweeps > 0 && total_sweeps >= config.max_sweeps {
                    break 'cooling;
                }

                for i in 0..n {
                    let delta = flip_delta(model, neighbors, &state, i);

                    // Metropolis acceptance criterion
                    let accept = if delta < 0.0 {
                        true
                    } else {
                        rng.random_range(0.0..1.0) < (-delta / temperature).exp()
                    };

                    if accept {
                        state[i] = 1 - state[i];
                        energy += delta;

                        if energy < best_energy {
                            best_energy = energy;
                            best.copy_from_slice(&state);
                        }
                    }
                }

                total_sweeps += 1;
            }

            temperature = cool(temperature, config, step, linear_max_steps);
            step += 1;
        }

        // Incremental deltas accumulate rounding; score the reported state
        // from scratch.
        let energy = model.energy(&best);
        debug!(seed, sweeps = total_sweeps, energy, "annealing read finished");

        Sample {
            assignment: best,
            energy,
        }
    }
}

impl Sampler for SimulatedAnnealingSampler {
    fn sample(
        &self,
        bqm: &BinaryQuadraticModel,
        num_reads: usize,
    ) -> Result<SampleSet, SamplerError> {
        self.config
            .validate()
            .map_err(SamplerError::InvalidConfig)?;
        if num_reads == 0 {
            return Err(SamplerError::NoReads);
        }

        let binary = match bqm.vartype() {
            Vartype::Binary => bqm.clone(),
            Vartype::Spin => bqm.to_binary(),
        };
        let neighbors = build_neighbors(&binary);

        let seeds: Vec<u64> = match self.config.seed {
            Some(seed) => (0..num_reads as u64).map(|r| seed.wrapping_add(r)).collect(),
            None => {
                let mut rng = rand::rng();
                (0..num_reads).map(|_| rng.random()).collect()
            }
        };

        debug!(
            num_reads,
            variables = binary.num_variables(),
            "sampling with simulated annealing"
        );

        #[cfg(feature = "parallel")]
        let samples: Vec<Sample> = {
            use rayon::prelude::*;
            seeds
                .par_iter()
                .map(|&seed| self.run_read(&binary, &neighbors, seed))
                .collect()
        };

        #[cfg(not(feature = "parallel"))]
        let samples: Vec<Sample> = seeds
            .iter()
            .map(|&seed| self.run_read(&binary, &neighbors, seed))
            .collect();

        Ok(SampleSet::new(samples))
    }
}

/// Adjacency list of quadratic couplings, both directions per pair.
fn build_neighbors(model: &BinaryQuadraticModel) -> Vec<Vec<(usize, f64)>> {
    let mut neighbors = vec![Vec::new(); model.num_variables()];
    for (&(i, j), &w) in model.quadratic() {
        neighbors[i].push((j, w));
        neighbors[j].push((i, w));
    }
    neighbors
}

/// Energy change from flipping bit `i` of a {0,1} state.
///
/// Flipping moves the bit by `d = 1 - 2*x_i`; only the linear bias of `i`
/// and its incident couplings contribute.
fn flip_delta(
    model: &BinaryQuadraticModel,
    neighbors: &[Vec<(usize, f64)>],
    state: &[i8],
    i: usize,
) -> f64 {
    let d = f64::from(1 - 2 * state[i]);
    let mut coupling = model.linear()[i];
    for &(j, w) in &neighbors[i] {
        coupling += w * f64::from(state[j]);
    }
    d * coupling
}

/// Applies the cooling schedule to compute the next temperature.
fn cool(temperature: f64, config: &AnnealConfig, step: usize, linear_max_steps: usize) -> f64 {
    match config.cooling {
        CoolingSchedule::Geometric { alpha } => temperature * alpha,

        CoolingSchedule::Linear => {
            let range = config.initial_temperature - config.min_temperature;
            let t = config.initial_temperature
                - (step + 1) as f64 * range / linear_max_steps as f64;
            t.max(config.min_temperature)
        }

        CoolingSchedule::LundyMees { beta } => temperature / (1.0 + beta * temperature),
    }
}

/// Estimates the number of temperature steps for linear cooling.
fn compute_linear_steps(config: &AnnealConfig) -> usize {
    if config.max_sweeps > 0 {
        (config.max_sweeps / config.sweeps_per_temperature).max(1)
    } else {
        1000
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::{var_array, LinearExpr};
    use crate::model::{select_best, CompiledModel};

    /// (1*x0 + 5*x1 + 6*x2)^2 over spins; global minimum energy 0 at the
    /// two balanced splits.
    fn partition_model() -> CompiledModel {
        let x = var_array("x", 3);
        LinearExpr::weighted(&x, &[1.0, 5.0, 6.0])
            .unwrap()
            .squared()
            .compile(Vartype::Spin)
    }

    fn seeded_sampler(seed: u64) -> SimulatedAnnealingSampler {
        SimulatedAnnealingSampler::new(AnnealConfig::default().with_seed(seed))
    }

    #[test]
    fn test_finds_balanced_partition() {
        let model = partition_model();
        let sampleset = seeded_sampler(42).sample(model.bqm(), 10).unwrap();
        assert_eq!(sampleset.len(), 10);

        let decoded = model.decode_sampleset(&sampleset);
        let best = select_best(&decoded).unwrap();

        assert_eq!(best.energy, 0.0);
        // Both balanced splits put {1, 5} against {6}.
        let bits = [
            best.assignment["x[0]"],
            best.assignment["x[1]"],
            best.assignment["x[2]"],
        ];
        assert!(bits == [0, 0, 1] || bits == [1, 1, 0], "got {bits:?}");
    }

    #[test]
    fn test_assignments_are_bits_for_spin_models() {
        let model = partition_model();
        let sampleset = seeded_sampler(1).sample(model.bqm(), 5).unwrap();

        for sample in &sampleset {
            assert!(sample.assignment.iter().all(|&v| v == 0 || v == 1));
        }
    }

    #[test]
    fn test_sample_energies_are_consistent() {
        let model = partition_model();
        let binary = model.bqm().to_binary();
        let sampleset = seeded_sampler(7).sample(model.bqm(), 8).unwrap();

        for sample in &sampleset {
            assert_eq!(sample.energy, binary.energy(&sample.assignment));
        }
    }

    #[test]
    fn test_seeded_runs_are_deterministic() {
        let model = partition_model();
        let first = seeded_sampler(99).sample(model.bqm(), 6).unwrap();
        let second = seeded_sampler(99).sample(model.bqm(), 6).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_zero_reads_is_an_error() {
        let model = partition_model();
        let result = seeded_sampler(0).sample(model.bqm(), 0);
        assert_eq!(result, Err(SamplerError::NoReads));
    }

    #[test]
    fn test_invalid_config_is_surfaced() {
        let config = AnnealConfig::default().with_initial_temperature(-1.0);
        let sampler = SimulatedAnnealingSampler::new(config);
        let model = partition_model();

        match sampler.sample(model.bqm(), 1) {
            Err(SamplerError::InvalidConfig(_)) => {}
            other => panic!("expected InvalidConfig, got {other:?}"),
        }
    }

    #[test]
    fn test_max_sweeps_budget_is_respected_by_schedules() {
        // A tiny budget must terminate even with a slow schedule.
        let config = AnnealConfig::default()
            .with_initial_temperature(1e9)
            .with_min_temperature(1e-9)
            .with_cooling(CoolingSchedule::Geometric { alpha: 0.9999 })
            .with_max_sweeps(50)
            .with_seed(3);
        let sampler = SimulatedAnnealingSampler::new(config);
        let model = partition_model();

        let sampleset = sampler.sample(model.bqm(), 2).unwrap();
        assert_eq!(sampleset.len(), 2);
    }

    #[test]
    fn test_linear_and_lundy_mees_schedules_solve_small_instance() {
        let model = partition_model();

        let linear = AnnealConfig::default()
            .with_cooling(CoolingSchedule::Linear)
            .with_max_sweeps(2000)
            .with_seed(5);
        let set = SimulatedAnnealingSampler::new(linear)
            .sample(model.bqm(), 10)
            .unwrap();
        let decoded = model.decode_sampleset(&set);
        assert_eq!(select_best(&decoded).unwrap().energy, 0.0);

        let lundy = AnnealConfig::default()
            .with_cooling(CoolingSchedule::LundyMees { beta: 0.05 })
            .with_seed(5);
        let set = SimulatedAnnealingSampler::new(lundy)
            .sample(model.bqm(), 10)
            .unwrap();
        let decoded = model.decode_sampleset(&set);
        assert_eq!(select_best(&decoded).unwrap().energy, 0.0);
    }
}
