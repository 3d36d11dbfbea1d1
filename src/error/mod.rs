//! Error handling for risk triage.

use arrow::error::ArrowError;
use parquet::errors::ParquetError;

/// Errors that can occur while deriving thresholds, adjusting scores or
/// assigning risk levels
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Thresholds were requested for a collection without any scores
    #[error("Cannot compute thresholds from an empty collection of scores")]
    EmptyInput,

    /// A required field is absent from the dataset, or null for one record
    #[error("Missing required field '{column}'{}", row_suffix(.row))]
    MissingField {
        /// Name of the missing column
        column: String,
        /// Row holding the null value, `None` when the whole column is absent
        row: Option<usize>,
    },

    /// Arrow error raised by a compute kernel or while assembling a batch
    #[error("Arrow error: {0}")]
    Arrow(#[from] ArrowError),

    /// Error reading or writing Parquet data
    #[error("Parquet error: {0}")]
    Parquet(#[from] ParquetError),

    /// Error opening or creating a file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// A required column is not part of the batch schema
    pub fn missing_column(column: impl Into<String>) -> Self {
        Self::MissingField {
            column: column.into(),
            row: None,
        }
    }

    /// A required column is present but has no value at `row`
    pub fn missing_value(column: impl Into<String>, row: usize) -> Self {
        Self::MissingField {
            column: column.into(),
            row: Some(row),
        }
    }
}

fn row_suffix(row: &Option<usize>) -> String {
    row.map(|r| format!(" at row {r}")).unwrap_or_default()
}

/// Alias for Result with the crate [`Error`]
pub type Result<T> = std::result::Result<T, Error>;
