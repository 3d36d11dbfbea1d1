//! Dataset-level risk assignment
//!
//! One `ThresholdPair` is computed up front from the whole score column,
//! then every row is classified against it in original order.

use std::sync::Arc;
use std::time::Instant;

use arrow::array::{Float64Array, StringArray};
use arrow::record_batch::RecordBatch;
use log::debug;

use super::adjust::add_hiv_adjusted_score_batches;
use super::classify::{RiskLevel, classify_risk};
use super::summary::RiskSummary;
use super::thresholds::{ThresholdPair, dataset_scores_and_thresholds};
use crate::config::{ADJUSTED_DISEASE_SCORE, RiskColumns};
use crate::error::Result;
use crate::utils::arrow::replace_or_append_column;
use crate::utils::logging::{log_operation_complete, log_operation_start};

/// Result of a full triage pass over a dataset
#[derive(Debug, Clone)]
pub struct TriageOutcome {
    /// Annotated batches, same order and row order as the input
    pub batches: Vec<RecordBatch>,
    /// Thresholds shared by every row of the pass
    pub thresholds: ThresholdPair,
    /// Tier counts of the pass
    pub summary: RiskSummary,
}

/// Add a risk label column to a single batch
///
/// Thresholds come from `columns.score_col` of this batch; labels are
/// written to `columns.risk_col`, replacing an existing column of that name.
///
/// # Errors
/// * `Error::MissingField` if the score column is absent or has a null value
/// * `Error::EmptyInput` if the batch has no rows
pub fn assign_risk_levels(batch: &RecordBatch, columns: &RiskColumns) -> Result<RecordBatch> {
    let (mut batches, _) = classify_batches(std::slice::from_ref(batch), columns)?;
    Ok(batches.remove(0))
}

/// Add a risk label column to every batch of a dataset
///
/// A single threshold pair is derived across all batches, so the split of
/// a dataset into batches does not change any label.
pub fn assign_risk_levels_batches(
    batches: &[RecordBatch],
    columns: &RiskColumns,
) -> Result<Vec<RecordBatch>> {
    classify_batches(batches, columns).map(|(batches, _)| batches)
}

/// Optionally adjust scores, then assign risk levels across the dataset
///
/// With `hiv_adjust` the adjuster runs first and classification uses
/// `adjusted_disease_score` whatever `columns.score_col` names; only
/// `columns.risk_col` is taken from `columns`. Without it, `columns` is
/// used as given.
pub fn triage(
    batches: &[RecordBatch],
    columns: &RiskColumns,
    hiv_adjust: bool,
) -> Result<TriageOutcome> {
    let start = Instant::now();
    let rows: usize = batches.iter().map(RecordBatch::num_rows).sum();

    let adjusted;
    let adjusted_columns;
    let (input, columns) = if hiv_adjust {
        adjusted = add_hiv_adjusted_score_batches(batches)?;
        adjusted_columns = columns.clone().with_score_col(ADJUSTED_DISEASE_SCORE);
        (adjusted.as_slice(), &adjusted_columns)
    } else {
        (batches, columns)
    };
    log_operation_start("Triaging patient records by", &columns.score_col);

    let (batches, summary) = classify_batches(input, columns)?;
    let target = format!("{} batches", batches.len());
    log_operation_complete("classified", target, rows, Some(start.elapsed()));

    Ok(TriageOutcome {
        batches,
        thresholds: summary.thresholds,
        summary,
    })
}

fn classify_batches(
    batches: &[RecordBatch],
    columns: &RiskColumns,
) -> Result<(Vec<RecordBatch>, RiskSummary)> {
    let (scores, thresholds) = dataset_scores_and_thresholds(batches, &columns.score_col)?;
    debug!(
        "Thresholds for '{}': low <= {}, medium <= {}",
        columns.score_col, thresholds.threshold_1, thresholds.threshold_2
    );

    let mut levels = Vec::new();
    let labelled = batches
        .iter()
        .zip(&scores)
        .map(|(batch, scores)| {
            let batch_levels = classify_scores(scores, &thresholds);
            let labels = StringArray::from_iter_values(batch_levels.iter().map(|l| l.as_str()));
            levels.extend(batch_levels);
            replace_or_append_column(batch, &columns.risk_col, Arc::new(labels))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok((labelled, RiskSummary::tally(thresholds, levels)))
}

fn classify_scores(scores: &Float64Array, thresholds: &ThresholdPair) -> Vec<RiskLevel> {
    scores
        .values()
        .iter()
        .map(|&score| classify_risk(score, thresholds))
        .collect()
}
