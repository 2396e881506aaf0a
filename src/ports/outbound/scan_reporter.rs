use crate::compliance::domain::ComplianceItem;
use crate::shared::ComplianceError;
use uuid::Uuid;

/// ScanReporter port for user-facing scan progress
///
/// Implementations render progress somewhere a person is watching (stderr,
/// a UI event stream). Diagnostic logging goes through `tracing` instead.
pub trait ScanReporter: Send + Sync {
    /// A scan was accepted and the executor is about to run
    fn scan_started(&self, item: &ComplianceItem, scan_id: Uuid);

    /// The catalogue now holds the scan result
    ///
    /// # Arguments
    /// * `before` - The item as it was when the scan started
    /// * `after` - The item as stored after the update
    fn scan_completed(&self, before: &ComplianceItem, after: &ComplianceItem, scan_id: Uuid);

    /// An accepted scan ended without updating the catalogue
    fn scan_failed(&self, item: &ComplianceItem, error: &ComplianceError, scan_id: Uuid);

    /// A non-fatal problem worth showing to the user
    fn warn(&self, message: &str);
}

impl<T: ScanReporter + ?Sized> ScanReporter for Box<T> {
    fn scan_started(&self, item: &ComplianceItem, scan_id: Uuid) {
        (**self).scan_started(item, scan_id)
    }

    fn scan_completed(&self, before: &ComplianceItem, after: &ComplianceItem, scan_id: Uuid) {
        (**self).scan_completed(before, after, scan_id)
    }

    fn scan_failed(&self, item: &ComplianceItem, error: &ComplianceError, scan_id: Uuid) {
        (**self).scan_failed(item, error, scan_id)
    }

    fn warn(&self, message: &str) {
        (**self).warn(message)
    }
}
