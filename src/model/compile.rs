//! Compilation of quadratic expressions and decoding of sampler output.

use std::collections::{BTreeMap, HashMap};

use super::bqm::{BinaryQuadraticModel, Vartype};
use crate::expr::QuadExpr;
use crate::sampler::{Sample, SampleSet};

/// A quadratic objective compiled down to an indexed model.
///
/// Owns the variable order (sorted by name) and the name-to-index map, so
/// raw sampler output can be decoded back into named assignments.
#[derive(Debug, Clone)]
pub struct CompiledModel {
    variables: Vec<String>,
    index: HashMap<String, usize>,
    bqm: BinaryQuadraticModel,
}

/// A sampler result mapped back to named variables.
///
/// Assignments are always in the {0, 1} encoding; the energy is recomputed
/// from the compiled model rather than trusted from the sampler.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DecodedSample {
    /// Variable name to assigned bit.
    pub assignment: BTreeMap<String, i8>,
    /// Objective value at this assignment.
    pub energy: f64,
}

impl CompiledModel {
    pub(crate) fn from_expr(expr: &QuadExpr, vartype: Vartype) -> Self {
        let variables: Vec<String> = expr.variables().into_iter().collect();
        let index: HashMap<String, usize> = variables
            .iter()
            .enumerate()
            .map(|(i, name)| (name.clone(), i))
            .collect();

        let mut linear = vec![0.0; variables.len()];
        for (name, w) in expr.linear() {
            linear[index[name]] += w;
        }

        let quadratic = expr
            .quadratic()
            .iter()
            .map(|((a, b), &w)| ((index[a], index[b]), w));
        let bqm = BinaryQuadraticModel::new(vartype, linear, quadratic, expr.offset());

        Self {
            variables,
            index,
            bqm,
        }
    }

    /// Variable names in index order.
    pub fn variables(&self) -> &[String] {
        &self.variables
    }

    /// Index of a variable name, if present.
    pub fn variable_index(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// The indexed model a sampler consumes.
    pub fn bqm(&self) -> &BinaryQuadraticModel {
        &self.bqm
    }

    /// Exports the model in Ising form: linear biases, quadratic biases,
    /// and constant offset, keyed by variable name.
    ///
    /// Every variable appears in the linear map, zero biases included.
    pub fn to_ising(&self) -> (BTreeMap<String, f64>, BTreeMap<(String, String), f64>, f64) {
        let spin = self.bqm.to_spin();
        let h = self
            .variables
            .iter()
            .zip(spin.linear())
            .map(|(name, &bias)| (name.clone(), bias))
            .collect();
        let j = spin
            .quadratic()
            .iter()
            .map(|(&(i, j), &w)| ((self.variables[i].clone(), self.variables[j].clone()), w))
            .collect();
        (h, j, spin.offset())
    }

    /// Exports the model in QUBO form: a named coefficient map with linear
    /// biases on the diagonal, and the constant offset.
    pub fn to_qubo(&self) -> (BTreeMap<(String, String), f64>, f64) {
        let binary = self.bqm.to_binary();
        let mut q: BTreeMap<(String, String), f64> = self
            .variables
            .iter()
            .zip(binary.linear())
            .map(|(name, &bias)| ((name.clone(), name.clone()), bias))
            .collect();
        for (&(i, j), &w) in binary.quadratic() {
            q.insert((self.variables[i].clone(), self.variables[j].clone()), w);
        }
        (q, binary.offset())
    }

    /// Decodes one raw sample into a named assignment.
    pub fn decode_sample(&self, sample: &Sample) -> DecodedSample {
        self.decode_with(&self.bqm.to_binary(), sample)
    }

    /// Decodes a whole sample set, preserving its native order.
    pub fn decode_sampleset(&self, sampleset: &SampleSet) -> Vec<DecodedSample> {
        let binary = self.bqm.to_binary();
        sampleset
            .iter()
            .map(|sample| self.decode_with(&binary, sample))
            .collect()
    }

    fn decode_with(&self, binary: &BinaryQuadraticModel, sample: &Sample) -> DecodedSample {
        let assignment = self
            .variables
            .iter()
            .zip(&sample.assignment)
            .map(|(name, &bit)| (name.clone(), bit))
            .collect();
        DecodedSample {
            assignment,
            energy: binary.energy(&sample.assignment),
        }
    }
}
