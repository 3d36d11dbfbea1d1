//! Parquet file operations
//!
//! Reading a dataset into Arrow record batches and writing an annotated
//! dataset back out. These are the only file-touching functions in the crate;
//! the triage core works on batches in memory.

use std::fs::File;
use std::path::Path;
use std::time::Instant;

use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use parquet::errors::ParquetError;

use crate::error::Result;
use crate::utils::logging::{log_operation_complete, log_operation_start, log_warning};

/// Default batch size for Parquet reading
pub const DEFAULT_BATCH_SIZE: usize = 16384;

/// Helper function to get batch size from environment
#[must_use]
pub fn get_batch_size() -> Option<usize> {
    std::env::var("PARQUET_BATCH_SIZE")
        .ok()
        .and_then(|s| s.parse::<usize>().ok())
}

/// Read a parquet file into Arrow record batches
///
/// Batches come back in file order, so row order is preserved.
///
/// # Errors
/// Returns an error if the file cannot be opened or if the Parquet file is invalid
pub fn read_parquet(path: &Path) -> Result<Vec<RecordBatch>> {
    let start = Instant::now();
    log_operation_start("Reading parquet file", path.display());

    let file = File::open(path)?;
    let reader = ParquetRecordBatchReaderBuilder::try_new(file)?
        .with_batch_size(get_batch_size().unwrap_or(DEFAULT_BATCH_SIZE))
        .build()?;

    let batches = reader.collect::<std::result::Result<Vec<_>, _>>()?;
    let rows: usize = batches.iter().map(RecordBatch::num_rows).sum();
    if rows == 0 {
        log_warning("Parquet file contains no rows", Some(&path.display()));
    }

    log_operation_complete("read", path.display(), rows, Some(start.elapsed()));
    Ok(batches)
}

/// Write record batches to a single parquet file
///
/// All batches must share the schema of the first one.
///
/// # Errors
/// Returns an error if `batches` is empty, the file cannot be created,
/// or a batch does not match the schema of the first batch
pub fn write_parquet(path: &Path, batches: &[RecordBatch]) -> Result<()> {
    let start = Instant::now();
    let Some(first) = batches.first() else {
        return Err(ParquetError::General("No record batches to write".to_string()).into());
    };
    log_operation_start("Writing parquet file", path.display());

    let file = File::create(path)?;
    let mut writer = ArrowWriter::try_new(file, first.schema(), None)?;
    for batch in batches {
        writer.write(batch)?;
    }
    writer.close()?;

    let rows: usize = batches.iter().map(RecordBatch::num_rows).sum();
    log_operation_complete("wrote", path.display(), rows, Some(start.elapsed()));
    Ok(())
}
