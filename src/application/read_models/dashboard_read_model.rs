//! Dashboard read model for query operations
//!
//! Aggregates everything a renderer needs in one snapshot.

use super::compliance_item_view::ComplianceItemView;
use crate::application::dto::ViewMode;
use crate::compliance::domain::PostureSummary;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Main read model for the compliance dashboard
///
/// A point-in-time copy; it does not follow later scans.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardReadModel {
    /// When the snapshot was taken
    pub generated_at: DateTime<Utc>,
    /// Layout requested by the view state
    pub view_mode: ViewMode,
    /// Items in display order
    pub items: Vec<ComplianceItemView>,
    /// Counts per severity tier
    pub summary: PostureSummary,
    /// Number of scans in flight at snapshot time
    pub scanning: usize,
}

impl DashboardReadModel {
    pub fn expanded_items(&self) -> impl Iterator<Item = &ComplianceItemView> {
        self.items.iter().filter(|item| item.is_expanded)
    }
}
