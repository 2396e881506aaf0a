use crate::compliance::domain::{ComplianceStatus, ItemId, Score, SeverityTier};
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// ScanReport - Result DTO of one completed scan
///
/// Carries the values before and after the scan so callers can show what changed
/// without keeping their own copy of the item.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScanReport {
    pub scan_id: Uuid,
    pub item_id: ItemId,
    pub previous_score: Score,
    pub previous_status: ComplianceStatus,
    pub score: Score,
    pub status: ComplianceStatus,
    /// Tier of the new score
    pub severity_tier: SeverityTier,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl ScanReport {
    pub fn score_delta(&self) -> f64 {
        self.score.value() - self.previous_score.value()
    }

    pub fn status_changed(&self) -> bool {
        self.status != self.previous_status
    }
}
