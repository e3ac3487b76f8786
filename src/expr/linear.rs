//! Weighted linear expressions.

use super::quad::QuadExpr;
use super::types::ConstructionError;

/// A weighted sum of named variables plus a constant.
///
/// Immutable once constructed. Term order is the order of the input
/// sequences; repeated variable names are allowed and accumulate when the
/// expression is squared.
///
/// # Examples
///
/// ```
/// use qubo_anneal::expr::{var_array, LinearExpr};
///
/// let x = var_array("x", 3);
/// let expr = LinearExpr::weighted(&x, &[1.0, 5.0, 6.0]).unwrap();
/// assert_eq!(expr.len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinearExpr {
    terms: Vec<(String, f64)>,
    constant: f64,
}

impl LinearExpr {
    /// Builds the weighted sum `sum(coefficients[i] * variables[i])`.
    ///
    /// Coefficients may be zero or negative; no normalization is applied.
    ///
    /// # Errors
    ///
    /// [`ConstructionError::EmptyTerms`] if `variables` is empty,
    /// [`ConstructionError::LengthMismatch`] if the sequences differ in
    /// length.
    pub fn weighted<S: AsRef<str>>(
        variables: &[S],
        coefficients: &[f64],
    ) -> Result<Self, ConstructionError> {
        if variables.is_empty() {
            return Err(ConstructionError::EmptyTerms);
        }
        if variables.len() != coefficients.len() {
            return Err(ConstructionError::LengthMismatch {
                variables: variables.len(),
                coefficients: coefficients.len(),
            });
        }

        let terms = variables
            .iter()
            .zip(coefficients)
            .map(|(v, &c)| (v.as_ref().to_owned(), c))
            .collect();

        Ok(Self {
            terms,
            constant: 0.0,
        })
    }

    /// Adds a constant term to the sum.
    pub fn with_constant(mut self, constant: f64) -> Self {
        self.constant = constant;
        self
    }

    /// Number of variable terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// The `(variable, coefficient)` terms in construction order.
    pub fn terms(&self) -> &[(String, f64)] {
        &self.terms
    }

    /// The constant term.
    pub fn constant(&self) -> f64 {
        self.constant
    }

    /// Expands the square of this expression into a quadratic objective.
    ///
    /// Every ordered term pair `(i, j)` contributes `c_i * c_j` to the
    /// weight of the unordered variable pair `{i, j}`; self-pairs contribute
    /// `c_i^2`. A nonzero constant `k` additionally contributes `2 * k * c_i`
    /// to each linear term and `k^2` to the offset. Pure: identical inputs
    /// produce identical objectives.
    pub fn squared(&self) -> QuadExpr {
        let mut quad = QuadExpr::new();

        for (vi, ci) in &self.terms {
            for (vj, cj) in &self.terms {
                quad.add_quadratic(vi, vj, ci * cj);
            }
            if self.constant != 0.0 {
                quad.add_linear(vi, 2.0 * self.constant * ci);
            }
        }
        quad.add_offset(self.constant * self.constant);

        quad
    }
}
