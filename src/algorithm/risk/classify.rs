//! Risk tier classification of a single score

use std::fmt;

use serde::{Deserialize, Serialize};

use super::thresholds::ThresholdPair;

/// Ordinal risk tier of a patient record
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    #[serde(rename = "Low Risk")]
    Low,
    #[serde(rename = "Medium Risk")]
    Medium,
    #[serde(rename = "High Risk")]
    High,
}

impl RiskLevel {
    /// All tiers, lowest first
    pub const ALL: [Self; 3] = [Self::Low, Self::Medium, Self::High];

    /// Label written to the risk column
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "Low Risk",
            Self::Medium => "Medium Risk",
            Self::High => "High Risk",
        }
    }

    /// Parse a label produced by [`RiskLevel::as_str`]
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.as_str() == label)
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a score against a threshold pair
///
/// - `score <= threshold_1` is Low Risk
/// - `threshold_1 < score <= threshold_2` is Medium Risk
/// - `score > threshold_2` is High Risk
///
/// With a degenerate pair the Medium tier is unreachable. NaN fails both
/// comparisons and lands in High Risk.
#[must_use]
pub fn classify_risk(score: f64, thresholds: &ThresholdPair) -> RiskLevel {
    if score <= thresholds.threshold_1 {
        RiskLevel::Low
    } else if score <= thresholds.threshold_2 {
        RiskLevel::Medium
    } else {
        RiskLevel::High
    }
}

impl ThresholdPair {
    /// Classify `score` against this pair
    #[must_use]
    pub fn classify(&self, score: f64) -> RiskLevel {
        classify_risk(score, self)
    }
}
