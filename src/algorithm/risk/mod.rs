//! Patient risk triage
//!
//! Three pure operations that can be used on their own or composed:
//!
//! - [`thresholds`]: derive a [`ThresholdPair`] from the maximum score
//! - [`classify`]: map one score to a [`RiskLevel`]
//! - [`adjust`]: apply the HIV uplift before classification
//!
//! [`assign`] applies them across a dataset with one shared threshold pair.

pub mod adjust;
pub mod assign;
pub mod classify;
pub mod summary;
pub mod thresholds;

pub use adjust::{add_hiv_adjusted_score, add_hiv_adjusted_score_batches, adjust_score};
pub use assign::{TriageOutcome, assign_risk_levels, assign_risk_levels_batches, triage};
pub use classify::{RiskLevel, classify_risk};
pub use summary::RiskSummary;
pub use thresholds::{
    ThresholdPair, compute_column_thresholds, compute_dataset_thresholds, compute_thresholds,
};
