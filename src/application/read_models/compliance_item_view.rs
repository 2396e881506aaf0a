//! Item view struct for the dashboard read model
//!
//! Flattens one compliance item together with its scan and expansion flags.

use crate::compliance::domain::{ComplianceStatus, SeverityTier};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// View representation of a compliance item
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComplianceItemView {
    /// Stable item id
    pub id: String,
    /// Display name
    pub name: String,
    /// Compliance score in [0, 100]
    pub score: f64,
    /// Status label as last written
    pub status: ComplianceStatus,
    /// Severity derived from the score
    pub severity_tier: SeverityTier,
    /// Whether a scan of this item is in flight
    pub is_scanning: bool,
    /// Whether the item shows its details
    pub is_expanded: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_scanned_at: Option<DateTime<Utc>>,
}
