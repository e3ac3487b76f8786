//! Variable naming and construction errors.

use thiserror::Error;

/// An error raised while constructing an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConstructionError {
    /// The expression has no terms.
    #[error("expression requires at least one term")]
    EmptyTerms,

    /// Variable and coefficient sequences differ in length.
    #[error("got {variables} variables but {coefficients} coefficients")]
    LengthMismatch {
        variables: usize,
        coefficients: usize,
    },
}

/// Creates `len` variable names of the form `prefix[i]`.
///
/// The returned names carry no domain; the domain is chosen when the
/// objective is compiled.
///
/// # Examples
///
/// ```
/// use qubo_anneal::expr::var_array;
///
/// assert_eq!(var_array("x", 3), vec!["x[0]", "x[1]", "x[2]"]);
/// ```
pub fn var_array(prefix: &str, len: usize) -> Vec<String> {
    (0..len).map(|i| format!("{prefix}[{i}]")).collect()
}
