//! Risk distribution summary for a classified dataset

use serde::Serialize;

use super::classify::RiskLevel;
use super::thresholds::ThresholdPair;

/// Number of records per tier together with the thresholds that produced them
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RiskSummary {
    pub thresholds: ThresholdPair,
    pub low_risk: usize,
    pub medium_risk: usize,
    pub high_risk: usize,
}

impl RiskSummary {
    /// Count the levels of one classification pass
    pub fn tally<I>(thresholds: ThresholdPair, levels: I) -> Self
    where
        I: IntoIterator<Item = RiskLevel>,
    {
        let mut summary = Self {
            thresholds,
            low_risk: 0,
            medium_risk: 0,
            high_risk: 0,
        };
        for level in levels {
            match level {
                RiskLevel::Low => summary.low_risk += 1,
                RiskLevel::Medium => summary.medium_risk += 1,
                RiskLevel::High => summary.high_risk += 1,
            }
        }
        summary
    }

    #[must_use]
    pub fn count(&self, level: RiskLevel) -> usize {
        match level {
            RiskLevel::Low => self.low_risk,
            RiskLevel::Medium => self.medium_risk,
            RiskLevel::High => self.high_risk,
        }
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.low_risk + self.medium_risk + self.high_risk
    }

    /// Percentage of records in `level`, 0 for an empty summary
    #[must_use]
    pub fn percentage(&self, level: RiskLevel) -> f64 {
        let total = self.total();
        if total == 0 {
            0.0
        } else {
            self.count(level) as f64 / total as f64 * 100.0
        }
    }
}
