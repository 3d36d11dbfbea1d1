//! File I/O for handing datasets to and from the triage core

pub mod parquet;

pub use self::parquet::{DEFAULT_BATCH_SIZE, read_parquet, write_parquet};
