//! Column names and fixed parameters for risk triage.

use serde::{Deserialize, Serialize};

/// Raw disease score column read by the adjuster
pub const DISEASE_SCORE: &str = "disease_score";
/// Comorbidity flag column; absent or null values count as 0
pub const HIV_POSITIVE: &str = "HIV_positive";
/// Column written by the adjuster
pub const ADJUSTED_DISEASE_SCORE: &str = "adjusted_disease_score";
/// Default output column for tier labels
pub const RISK_LEVEL: &str = "risk_level";

/// Multiplier applied to the disease score when `HIV_positive == 1`
pub const HIV_UPLIFT: f64 = 1.3;

/// Column configuration for assigning risk levels
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskColumns {
    /// Column the thresholds and classification are computed from
    pub score_col: String,
    /// Column the tier labels are written to
    pub risk_col: String,
}

impl Default for RiskColumns {
    fn default() -> Self {
        Self {
            score_col: DISEASE_SCORE.to_string(),
            risk_col: RISK_LEVEL.to_string(),
        }
    }
}

impl RiskColumns {
    /// Classify on the HIV-adjusted score instead of the raw one
    #[must_use]
    pub fn adjusted() -> Self {
        Self::default().with_score_col(ADJUSTED_DISEASE_SCORE)
    }

    #[must_use]
    pub fn with_score_col(mut self, score_col: impl Into<String>) -> Self {
        self.score_col = score_col.into();
        self
    }

    #[must_use]
    pub fn with_risk_col(mut self, risk_col: impl Into<String>) -> Self {
        self.risk_col = risk_col.into();
        self
    }
}
