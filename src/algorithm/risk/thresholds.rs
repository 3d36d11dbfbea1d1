//! Threshold derivation from a collection of disease scores
//!
//! The observed score range is split into thirds of the maximum score:
//! `threshold_1 = max / 3` and `threshold_2 = 2 * max / 3`. Thresholds are
//! derived once per dataset and never reused across datasets.

use arrow::array::Float64Array;
use arrow::record_batch::RecordBatch;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::utils::arrow::extract_scores;

/// The two cut points splitting a dataset's scores into three tiers
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThresholdPair {
    /// Upper bound (inclusive) of the Low Risk tier
    pub threshold_1: f64,
    /// Upper bound (inclusive) of the Medium Risk tier
    pub threshold_2: f64,
}

impl ThresholdPair {
    /// Derive the pair from a maximum score
    ///
    /// Scales linearly with `max_score`, sign included.
    #[must_use]
    pub fn from_max(max_score: f64) -> Self {
        Self {
            threshold_1: max_score / 3.0,
            threshold_2: 2.0 * max_score / 3.0,
        }
    }

    /// Both cut points coincide, which leaves the Medium tier empty
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.threshold_1 == self.threshold_2
    }
}

/// Compute thresholds from the maximum of `scores`
///
/// No value is filtered out; zero and negative scores take part in the
/// maximum. NaN is skipped unless every score is NaN.
///
/// # Errors
/// Returns `Error::EmptyInput` if `scores` yields nothing
pub fn compute_thresholds<I>(scores: I) -> Result<ThresholdPair>
where
    I: IntoIterator<Item = f64>,
{
    let max_score = scores.into_iter().reduce(f64::max).ok_or(Error::EmptyInput)?;
    Ok(ThresholdPair::from_max(max_score))
}

/// Compute thresholds over one column of a record batch
pub fn compute_column_thresholds(batch: &RecordBatch, column_name: &str) -> Result<ThresholdPair> {
    let scores = extract_scores(batch, column_name)?;
    compute_thresholds(scores.values().iter().copied())
}

/// Compute one threshold pair across the same column of every batch
pub fn compute_dataset_thresholds(
    batches: &[RecordBatch],
    column_name: &str,
) -> Result<ThresholdPair> {
    dataset_scores_and_thresholds(batches, column_name).map(|(_, thresholds)| thresholds)
}

/// Extract `column_name` from every batch and derive the shared pair
///
/// Returns one score array per batch, in batch order.
pub(crate) fn dataset_scores_and_thresholds(
    batches: &[RecordBatch],
    column_name: &str,
) -> Result<(Vec<Float64Array>, ThresholdPair)> {
    let scores = batches
        .iter()
        .map(|batch| extract_scores(batch, column_name))
        .collect::<Result<Vec<_>>>()?;

    let thresholds = compute_thresholds(scores.iter().flat_map(|s| s.values().iter().copied()))?;
    Ok((scores, thresholds))
}
