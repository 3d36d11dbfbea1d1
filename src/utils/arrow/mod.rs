//! Arrow utilities for reading typed columns and assembling derived batches

pub mod array_utils;
pub mod extractors;

pub use self::array_utils::{downcast_array, get_column, replace_or_append_column};
pub use self::extractors::{extract_optional_i64, extract_scores};
