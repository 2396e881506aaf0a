pub mod catalogue;
pub mod compliance_item;
pub mod posture_summary;
pub mod severity_tier;

pub use catalogue::ComplianceCatalogue;
pub use compliance_item::{ComplianceItem, ComplianceStatus, ItemId, Score, MAX_SCORE, MIN_SCORE};
pub use posture_summary::PostureSummary;
pub use severity_tier::SeverityTier;
