//! Logging utilities for dataset operations
//!
//! This module provides utilities for logging operation progress in a consistent format.

pub mod log;

pub use self::log::{log_operation_complete, log_operation_start, log_warning};
