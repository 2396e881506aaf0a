use crate::compliance::domain::ComplianceItem;
use crate::ports::outbound::ScanReporter;
use crate::shared::ComplianceError;
use uuid::Uuid;

/// SilentScanReporter adapter for `--quiet` runs
///
/// Drops every progress event. Warnings still reach the `tracing` log
/// emitted by the orchestrator.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentScanReporter;

impl SilentScanReporter {
    pub fn new() -> Self {
        Self
    }
}

impl ScanReporter for SilentScanReporter {
    fn scan_started(&self, _item: &ComplianceItem, _scan_id: Uuid) {}

    fn scan_completed(&self, _before: &ComplianceItem, _after: &ComplianceItem, _scan_id: Uuid) {}

    fn scan_failed(&self, _item: &ComplianceItem, _error: &ComplianceError, _scan_id: Uuid) {}

    fn warn(&self, _message: &str) {}
}
