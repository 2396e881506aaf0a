use crate::compliance::domain::{ComplianceItem, SeverityTier};
use serde::Serialize;

/// Aggregate counts of a catalogue by severity tier
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct PostureSummary {
    pub total: usize,
    pub healthy: usize,
    pub warning: usize,
    pub critical: usize,
    /// Mean score over all items; `None` for an empty catalogue
    pub average_score: Option<f64>,
}

impl PostureSummary {
    pub fn from_items<'a>(items: impl IntoIterator<Item = &'a ComplianceItem>) -> Self {
        let mut summary = Self::default();
        let mut score_sum = 0.0;

        for item in items {
            summary.total += 1;
            score_sum += item.score().value();
            match item.severity_tier() {
                SeverityTier::Healthy => summary.healthy += 1,
                SeverityTier::Warning => summary.warning += 1,
                SeverityTier::Critical => summary.critical += 1,
            }
        }

        if summary.total > 0 {
            summary.average_score = Some(score_sum / summary.total as f64);
        }
        summary
    }

    pub fn count(&self, tier: SeverityTier) -> usize {
        match tier {
            SeverityTier::Healthy => self.healthy,
            SeverityTier::Warning => self.warning,
            SeverityTier::Critical => self.critical,
        }
    }

    pub fn has_critical(&self) -> bool {
        self.critical > 0
    }
}
