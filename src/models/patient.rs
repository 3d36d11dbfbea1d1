//! Patient record model
//!
//! A `PatientRecord` is the typed view of one row of a triage dataset: the
//! raw disease score and the optional HIV flag. Derived values (adjusted
//! score, risk level) are computed from these, never stored.

use arrow::record_batch::RecordBatch;
use serde::{Deserialize, Serialize};

use crate::algorithm::risk::adjust::adjust_score;
use crate::algorithm::risk::classify::RiskLevel;
use crate::algorithm::risk::thresholds::ThresholdPair;
use crate::config::{DISEASE_SCORE, HIV_POSITIVE};
use crate::error::Result;
use crate::utils::arrow::{extract_optional_i64, extract_scores};

/// One patient observation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PatientRecord {
    /// Non-negative disease severity score
    pub disease_score: f64,
    /// HIV flag as recorded; `None` when absent or missing
    #[serde(rename = "HIV_positive", default)]
    pub hiv_positive: Option<i64>,
}

impl PatientRecord {
    /// Create a record without an HIV flag
    #[must_use]
    pub fn new(disease_score: f64) -> Self {
        Self {
            disease_score,
            hiv_positive: None,
        }
    }

    /// Set the HIV flag
    #[must_use]
    pub fn with_hiv_positive(mut self, flag: i64) -> Self {
        self.hiv_positive = Some(flag);
        self
    }

    /// Normalized flag: absent and missing both read as 0
    #[must_use]
    pub fn hiv_flag(&self) -> i64 {
        self.hiv_positive.unwrap_or(0)
    }

    /// Score after the HIV uplift, always derived from `disease_score`
    #[must_use]
    pub fn adjusted_disease_score(&self) -> f64 {
        adjust_score(self.disease_score, self.hiv_flag())
    }

    /// Risk level of the adjusted score
    #[must_use]
    pub fn risk_level(&self, thresholds: &ThresholdPair) -> RiskLevel {
        thresholds.classify(self.adjusted_disease_score())
    }
}

/// Read typed patient records out of a record batch, in row order
///
/// # Errors
/// Returns `Error::MissingField` if `disease_score` is absent or null
pub fn extract_records(batch: &RecordBatch) -> Result<Vec<PatientRecord>> {
    let scores = extract_scores(batch, DISEASE_SCORE)?;
    let flags = extract_optional_i64(batch, HIV_POSITIVE)?;

    Ok(scores
        .values()
        .iter()
        .zip(flags)
        .map(|(&disease_score, hiv_positive)| PatientRecord {
            disease_score,
            hiv_positive,
        })
        .collect())
}
