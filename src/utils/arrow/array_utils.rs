//! Utilities for working with Arrow arrays.
//!
//! This module provides utility functions for safely extracting columns
//! from record batches, coercing them to the type a caller expects, and
//! assembling new batches with derived columns.

use std::sync::Arc;

use arrow::array::{Array, ArrayRef};
use arrow::compute::kernels::cast::cast;
use arrow::datatypes::{DataType, Field, Schema};
use arrow::error::ArrowError;
use arrow::record_batch::RecordBatch;
use log::debug;

use crate::error::{Error, Result};

/// Get a column from a record batch, cast to the expected data type
///
/// # Arguments
///
/// * `batch` - The record batch containing the column
/// * `column_name` - The name of the column to extract
/// * `expected_type` - The data type the caller works with
/// * `required` - Whether the column is required (error if missing) or optional (None if missing)
///
/// # Returns
///
/// * `Ok(Some(ArrayRef))` - The column array (converted if necessary) if found
/// * `Ok(None)` - If the column is not found and `required` is false
/// * `Err(Error::MissingField)` - If the column is not found and `required` is true
/// * `Err(Error::Arrow)` - If the column cannot be cast to `expected_type`
pub fn get_column(
    batch: &RecordBatch,
    column_name: &str,
    expected_type: &DataType,
    required: bool,
) -> Result<Option<ArrayRef>> {
    let Ok(idx) = batch.schema().index_of(column_name) else {
        if required {
            return Err(Error::missing_column(column_name));
        }
        debug!("Optional column '{column_name}' not found in record batch");
        return Ok(None);
    };

    let column = batch.column(idx);
    let actual_type = column.data_type();

    if actual_type == expected_type {
        return Ok(Some(Arc::clone(column)));
    }

    debug!("Converting column '{column_name}' from {actual_type:?} to {expected_type:?}");
    Ok(Some(cast(column, expected_type)?))
}

/// Downcast a column to a specific array type with clear error messages
///
/// # Type Parameters
///
/// * `A` - The target array type to downcast to
pub fn downcast_array<'a, A: Array + 'static>(
    array: &'a ArrayRef,
    column_name: &str,
    expected_type_name: &str,
) -> Result<&'a A> {
    array.as_any().downcast_ref::<A>().ok_or_else(|| {
        Error::Arrow(ArrowError::CastError(format!(
            "Column '{column_name}' is not a {expected_type_name} array"
        )))
    })
}

/// Return a new batch with `column_name` set to `array`
///
/// An existing column of that name is replaced at its position and keeps
/// any field metadata; otherwise the column is appended. All other columns
/// are shared with the input batch, which is left untouched.
pub fn replace_or_append_column(
    batch: &RecordBatch,
    column_name: &str,
    array: ArrayRef,
) -> Result<RecordBatch> {
    let schema = batch.schema();
    let field = Field::new(
        column_name,
        array.data_type().clone(),
        array.null_count() > 0,
    );

    let mut fields: Vec<Field> = schema.fields().iter().map(|f| f.as_ref().clone()).collect();
    let mut columns = batch.columns().to_vec();

    match schema.index_of(column_name) {
        Ok(idx) => {
            fields[idx] = field.with_metadata(fields[idx].metadata().clone());
            columns[idx] = array;
        }
        Err(_) => {
            fields.push(field);
            columns.push(array);
        }
    }

    let schema = Schema::new_with_metadata(fields, schema.metadata().clone());
    Ok(RecordBatch::try_new(Arc::new(schema), columns)?)
}
