//! Exhaustive enumeration for small models.

use tracing::debug;

use super::types::{Sample, SampleSet, Sampler, SamplerError};
use crate::model::{BinaryQuadraticModel, Vartype};

/// Scores every {0,1} assignment of a small model.
///
/// Not a heuristic: the returned set always contains a global minimum.
/// Useful as a ground truth against annealing on small instances, and as a
/// drop-in [`Sampler`] substitute. `num_reads` only gates the zero-reads
/// error; the set always holds all `2^n` assignments, in ascending
/// bit-pattern order.
pub struct ExhaustiveSampler;

impl ExhaustiveSampler {
    /// Largest variable count the enumeration accepts.
    pub const MAX_VARIABLES: usize = 24;

    pub fn new() -> Self {
        Self
    }
}

impl Default for ExhaustiveSampler {
    fn default() -> Self {
        Self::new()
    }
}

impl Sampler for ExhaustiveSampler {
    fn sample(
        &self,
        bqm: &BinaryQuadraticModel,
        num_reads: usize,
    ) -> Result<SampleSet, SamplerError> {
        if num_reads == 0 {
            return Err(SamplerError::NoReads);
        }
        let n = bqm.num_variables();
        if n > Self::MAX_VARIABLES {
            return Err(SamplerError::TooManyVariables {
                limit: Self::MAX_VARIABLES,
                actual: n,
            });
        }

        let binary = match bqm.vartype() {
            Vartype::Binary => bqm.clone(),
            Vartype::Spin => bqm.to_binary(),
        };

        let mut samples = Vec::with_capacity(1usize << n);
        let mut state = vec![0i8; n];
        for bits in 0..(1u64 << n) {
            for (i, v) in state.iter_mut().enumerate() {
                *v = (bits >> i & 1) as i8;
            }
            samples.push(Sample {
                assignment: state.clone(),
                energy: binary.energy(&state),
            });
        }

        debug!(variables = n, assignments = samples.len(), "enumerated model");
        Ok(SampleSet::new(samples))
    }
}
