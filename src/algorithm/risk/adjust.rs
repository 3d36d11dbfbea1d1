//! HIV score adjustment
//!
//! Patients flagged `HIV_positive == 1` get a 30% uplift on their disease
//! score before classification. Only the exact value 1 triggers the uplift;
//! other non-zero flags are kept as recorded but leave the score unchanged.

use std::sync::Arc;

use arrow::array::{Float64Array, Int64Array};
use arrow::record_batch::RecordBatch;
use log::debug;

use crate::config::{ADJUSTED_DISEASE_SCORE, HIV_POSITIVE, HIV_UPLIFT};
use crate::error::Result;
use crate::models::extract_records;
use crate::utils::arrow::replace_or_append_column;

/// Apply the HIV uplift to a single score
#[must_use]
pub fn adjust_score(disease_score: f64, hiv_positive: i64) -> f64 {
    if hiv_positive == 1 {
        disease_score * HIV_UPLIFT
    } else {
        disease_score
    }
}

/// Add normalized `HIV_positive` and `adjusted_disease_score` columns
///
/// `HIV_positive` becomes an `Int64` column with absent or null flags set
/// to 0. `adjusted_disease_score` is always computed from `disease_score`,
/// so running this on its own output gives the same result. Existing
/// columns of either name are replaced in place; all others are kept.
///
/// # Errors
/// Returns `Error::MissingField` if `disease_score` is absent or null for
/// any record; no partial batch is produced.
pub fn add_hiv_adjusted_score(batch: &RecordBatch) -> Result<RecordBatch> {
    let records = extract_records(batch)?;

    let flags = Int64Array::from_iter_values(records.iter().map(|r| r.hiv_flag()));
    let adjusted =
        Float64Array::from_iter_values(records.iter().map(|r| r.adjusted_disease_score()));

    debug!(
        "Applied HIV uplift to {} of {} records",
        records.iter().filter(|r| r.hiv_flag() == 1).count(),
        records.len()
    );

    let batch = replace_or_append_column(batch, HIV_POSITIVE, Arc::new(flags))?;
    replace_or_append_column(&batch, ADJUSTED_DISEASE_SCORE, Arc::new(adjusted))
}

/// Adjust every batch of a dataset, failing on the first invalid batch
pub fn add_hiv_adjusted_score_batches(batches: &[RecordBatch]) -> Result<Vec<RecordBatch>> {
    batches.iter().map(add_hiv_adjusted_score).collect()
}
