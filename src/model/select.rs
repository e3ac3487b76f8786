//! Best-candidate selection.

use thiserror::Error;

use super::compile::DecodedSample;

/// An error raised while selecting from a sample collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectError {
    /// There were no samples to select from.
    #[error("no samples to select from")]
    EmptySampleSet,
}

/// Returns the minimum-energy sample.
///
/// Linear scan with a strict `<` comparison, so on ties the first sample in
/// the slice's order wins. The order is whatever the sampler produced;
/// samplers are not required to make it stable across runs, so equal-energy
/// ties should not be relied on to break the same way twice.
///
/// # Errors
///
/// [`SelectError::EmptySampleSet`] if `samples` is empty.
pub fn select_best(samples: &[DecodedSample]) -> Result<&DecodedSample, SelectError> {
    let mut iter = samples.iter();
    let mut best = iter.next().ok_or(SelectError::EmptySampleSet)?;
    for sample in iter {
        if sample.energy < best.energy {
            best = sample;
        }
    }
    Ok(best)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn sample(bit: i8, energy: f64) -> DecodedSample {
        let assignment: BTreeMap<String, i8> = [("x".to_owned(), bit)].into();
        DecodedSample { assignment, energy }
    }

    #[test]
    fn test_empty_is_an_error() {
        assert_eq!(select_best(&[]), Err(SelectError::EmptySampleSet));
    }

    #[test]
    fn test_single_sample() {
        let samples = [sample(0, 5.0)];
        assert_eq!(select_best(&samples).unwrap().energy, 5.0);
    }

    #[test]
    fn test_minimum_wins() {
        let samples = [sample(0, 5.0), sample(1, -2.0), sample(0, 3.0)];
        assert_eq!(select_best(&samples).unwrap().energy, -2.0);
    }

    #[test]
    fn test_tie_breaks_to_first_occurrence() {
        let samples = [sample(0, 5.0), sample(1, 2.0), sample(2, 2.0)];
        let best = select_best(&samples).unwrap();
        assert_eq!(best.energy, 2.0);
        assert_eq!(best.assignment["x"], 1);
    }
}
