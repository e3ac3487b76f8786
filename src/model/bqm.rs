//! Index-based binary quadratic model and domain conversion.

use std::collections::BTreeMap;

/// Variable domain of a binary quadratic model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Vartype {
    /// Variables take values in {-1, +1}.
    Spin,
    /// Variables take values in {0, 1}.
    Binary,
}

/// A quadratic objective over indexed binary or spin variables.
///
/// Energy of an assignment `v`:
///
/// ```text
/// E(v) = offset + sum_i linear[i] * v[i] + sum_{i<j} quadratic[(i,j)] * v[i] * v[j]
/// ```
///
/// Quadratic biases are stored with `i < j`; the map is ordered so
/// iteration is deterministic. The model is immutable once built.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BinaryQuadraticModel {
    vartype: Vartype,
    linear: Vec<f64>,
    quadratic: BTreeMap<(usize, usize), f64>,
    offset: f64,
}

impl BinaryQuadraticModel {
    /// Builds a model from biases.
    ///
    /// Pair keys are canonicalized to `i < j`; duplicate pairs accumulate.
    /// Self-pairs `(i, i)` fold into the offset for spins (`s^2 = 1`) and
    /// into the linear bias for bits (`b^2 = b`).
    ///
    /// # Panics
    ///
    /// If a quadratic index is out of range for `linear`.
    pub fn new(
        vartype: Vartype,
        linear: Vec<f64>,
        quadratic: impl IntoIterator<Item = ((usize, usize), f64)>,
        offset: f64,
    ) -> Self {
        let mut model = Self {
            vartype,
            linear,
            quadratic: BTreeMap::new(),
            offset,
        };
        let n = model.linear.len();
        for ((i, j), w) in quadratic {
            assert!(i < n && j < n, "quadratic index ({i}, {j}) out of range for {n} variables");
            if i == j {
                match vartype {
                    Vartype::Spin => model.offset += w,
                    Vartype::Binary => model.linear[i] += w,
                }
            } else {
                let key = (i.min(j), i.max(j));
                *model.quadratic.entry(key).or_insert(0.0) += w;
            }
        }
        model
    }

    /// The variable domain.
    pub fn vartype(&self) -> Vartype {
        self.vartype
    }

    /// Number of variables.
    pub fn num_variables(&self) -> usize {
        self.linear.len()
    }

    /// Linear biases, indexed by variable.
    pub fn linear(&self) -> &[f64] {
        &self.linear
    }

    /// Quadratic biases, keyed by `(i, j)` with `i < j`.
    pub fn quadratic(&self) -> &BTreeMap<(usize, usize), f64> {
        &self.quadratic
    }

    /// The constant offset.
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Evaluates the energy of an assignment.
    ///
    /// Values are expected in the model's domain ({-1,+1} or {0,1});
    /// `sample` must have one entry per variable.
    pub fn energy(&self, sample: &[i8]) -> f64 {
        debug_assert_eq!(sample.len(), self.linear.len());

        let mut total = self.offset;
        for (i, &h) in self.linear.iter().enumerate() {
            total += h * f64::from(sample[i]);
        }
        for (&(i, j), &w) in &self.quadratic {
            total += w * f64::from(sample[i]) * f64::from(sample[j]);
        }
        total
    }

    /// Re-expresses the model over {0, 1} variables via `s = 2b - 1`.
    ///
    /// Exact: for any spin assignment `s` and its bit image `b`, the
    /// converted model's energy at `b` equals this model's energy at `s`.
    pub fn to_binary(&self) -> Self {
        match self.vartype {
            Vartype::Binary => self.clone(),
            Vartype::Spin => {
                let mut linear: Vec<f64> = self.linear.iter().map(|h| 2.0 * h).collect();
                let mut quadratic = BTreeMap::new();
                let mut offset = self.offset - self.linear.iter().sum::<f64>();
                for (&(i, j), &w) in &self.quadratic {
                    quadratic.insert((i, j), 4.0 * w);
                    linear[i] -= 2.0 * w;
                    linear[j] -= 2.0 * w;
                    offset += w;
                }
                Self {
                    vartype: Vartype::Binary,
                    linear,
                    quadratic,
                    offset,
                }
            }
        }
    }

    /// Re-expresses the model over {-1, +1} variables via `b = (s + 1) / 2`.
    pub fn to_spin(&self) -> Self {
        match self.vartype {
            Vartype::Spin => self.clone(),
            Vartype::Binary => {
                let mut linear: Vec<f64> = self.linear.iter().map(|l| l / 2.0).collect();
                let mut quadratic = BTreeMap::new();
                let mut offset = self.offset + self.linear.iter().sum::<f64>() / 2.0;
                for (&(i, j), &w) in &self.quadratic {
                    quadratic.insert((i, j), w / 4.0);
                    linear[i] += w / 4.0;
                    linear[j] += w / 4.0;
                    offset += w / 4.0;
                }
                Self {
                    vartype: Vartype::Spin,
                    linear,
                    quadratic,
                    offset,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Ising form of (1*s0 + 5*s1 + 6*s2)^2: zero fields, pair couplings,
    /// constant 1 + 25 + 36.
    fn partition_spin_model() -> BinaryQuadraticModel {
        BinaryQuadraticModel::new(
            Vartype::Spin,
            vec![0.0; 3],
            [((0, 1), 10.0), ((0, 2), 12.0), ((1, 2), 60.0)],
            62.0,
        )
    }

    #[test]
    fn test_spin_energy() {
        let model = partition_spin_model();
        assert_eq!(model.energy(&[-1, -1, -1]), 144.0); // (1+5+6)^2
        assert_eq!(model.energy(&[-1, -1, 1]), 0.0); // (1+5-6)^2
        assert_eq!(model.energy(&[1, 1, -1]), 0.0);
        assert_eq!(model.energy(&[1, -1, 1]), 4.0); // (1-5+6)^2
    }

    #[test]
    fn test_to_binary_biases() {
        let binary = partition_spin_model().to_binary();

        assert_eq!(binary.vartype(), Vartype::Binary);
        assert_eq!(binary.linear(), &[-44.0, -140.0, -144.0]);
        assert_eq!(binary.quadratic()[&(0, 1)], 40.0);
        assert_eq!(binary.quadratic()[&(0, 2)], 48.0);
        assert_eq!(binary.quadratic()[&(1, 2)], 240.0);
        assert_eq!(binary.offset(), 144.0);
    }

    #[test]
    fn test_conversion_preserves_energy() {
        let spin = partition_spin_model();
        let binary = spin.to_binary();

        for bits in 0..8u32 {
            let b: Vec<i8> = (0..3).map(|i| (bits >> i & 1) as i8).collect();
            let s: Vec<i8> = b.iter().map(|&v| 2 * v - 1).collect();
            assert!(
                (spin.energy(&s) - binary.energy(&b)).abs() < 1e-9,
                "energies diverge at bits {bits:03b}"
            );
        }
    }

    #[test]
    fn test_round_trip_is_identity() {
        let spin = partition_spin_model();
        let back = spin.to_binary().to_spin();

        assert_eq!(back.vartype(), Vartype::Spin);
        for (a, b) in spin.linear().iter().zip(back.linear()) {
            assert!((a - b).abs() < 1e-9);
        }
        assert!((spin.offset() - back.offset()).abs() < 1e-9);
        for (k, w) in spin.quadratic() {
            assert!((w - back.quadratic()[k]).abs() < 1e-9);
        }
    }

    #[test]
    fn test_self_pair_folds_by_vartype() {
        let spin = BinaryQuadraticModel::new(Vartype::Spin, vec![0.0], [((0, 0), 9.0)], 0.0);
        assert_eq!(spin.offset(), 9.0);
        assert!(spin.quadratic().is_empty());

        let binary = BinaryQuadraticModel::new(Vartype::Binary, vec![0.0], [((0, 0), 9.0)], 0.0);
        assert_eq!(binary.linear(), &[9.0]);
        assert!(binary.quadratic().is_empty());
    }

    #[test]
    fn test_pair_keys_accumulate_both_orders() {
        let model = BinaryQuadraticModel::new(
            Vartype::Binary,
            vec![0.0, 0.0],
            [((1, 0), 3.0), ((0, 1), 4.0)],
            0.0,
        );
        assert_eq!(model.quadratic()[&(0, 1)], 7.0);
    }
}
