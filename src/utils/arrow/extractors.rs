//! Field extraction utilities for Arrow record batches
//!
//! Scores are required and must be non-null for every record. Flags are
//! optional: a missing column reads as all-`None`.

use arrow::array::{Array, Float64Array, Int64Array};
use arrow::datatypes::DataType;
use arrow::record_batch::RecordBatch;

use crate::error::{Error, Result};
use crate::utils::arrow::array_utils::{downcast_array, get_column};

/// Extract a required score column as `Float64`
///
/// Integer and other numeric columns are coerced to `Float64`.
///
/// # Errors
///
/// * `Error::MissingField` with `row: None` if the column is absent
/// * `Error::MissingField` with the first offending row if any value is null
pub fn extract_scores(batch: &RecordBatch, column_name: &str) -> Result<Float64Array> {
    let array = get_column(batch, column_name, &DataType::Float64, true)?
        .ok_or_else(|| Error::missing_column(column_name))?;
    let scores = downcast_array::<Float64Array>(&array, column_name, "Float64")?;

    if scores.null_count() > 0 {
        let row = (0..scores.len()).find(|&i| scores.is_null(i)).unwrap_or(0);
        return Err(Error::missing_value(column_name, row));
    }

    Ok(scores.clone())
}

/// Extract an optional integer column, one `Option` per row
///
/// Absent columns and null values both read as `None`. Booleans map to
/// 0/1 and floats are truncated toward zero; values that cannot be
/// represented as `i64` read as `None`.
pub fn extract_optional_i64(batch: &RecordBatch, column_name: &str) -> Result<Vec<Option<i64>>> {
    let Some(array) = get_column(batch, column_name, &DataType::Int64, false)? else {
        return Ok(vec![None; batch.num_rows()]);
    };
    let values = downcast_array::<Int64Array>(&array, column_name, "Int64")?;

    Ok(values.iter().collect())
}
