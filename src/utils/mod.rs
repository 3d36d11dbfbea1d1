//! Utility modules for Arrow columns, Parquet I/O and logging

pub mod arrow;
pub mod io;
pub mod logging;
