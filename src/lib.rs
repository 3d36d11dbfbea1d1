//! A Rust library for triaging patient records into risk tiers.
//!
//! Datasets are Arrow record batches with a numeric `disease_score` column
//! and an optional `HIV_positive` flag. Thresholds are thirds of the maximum
//! score; HIV-positive patients can get a 30% uplift before classification.

pub mod algorithm;
pub mod config;
pub mod error;
pub mod models;
pub mod utils;

// Re-export the most common types for easier use
pub use config::RiskColumns;
pub use error::{Error, Result};
pub use models::PatientRecord;

pub use algorithm::risk::{
    RiskLevel, RiskSummary, ThresholdPair, TriageOutcome, add_hiv_adjusted_score,
    add_hiv_adjusted_score_batches, adjust_score, assign_risk_levels, assign_risk_levels_batches,
    classify_risk, compute_column_thresholds, compute_dataset_thresholds, compute_thresholds,
    triage,
};

// Arrow types
pub use arrow::record_batch::RecordBatch;

// Parquet adapter for the command-line tool and callers without a loader
pub use utils::io::{read_parquet, write_parquet};
