use compliance_scan::prelude::*;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

/// Mock ScanReporter for testing that captures events
#[derive(Default, Clone)]
pub struct MockScanReporter {
    pub events: Arc<Mutex<Vec<String>>>,
}

impl MockScanReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.get_events()
            .into_iter()
            .filter(|event| event.starts_with("Warning: "))
            .collect()
    }

    fn push(&self, event: String) {
        self.events.lock().unwrap().push(event);
    }
}

impl ScanReporter for MockScanReporter {
    fn scan_started(&self, item: &ComplianceItem, _scan_id: Uuid) {
        self.push(format!("Started: {}", item.id()));
    }

    fn scan_completed(&self, _before: &ComplianceItem, after: &ComplianceItem, _scan_id: Uuid) {
        self.push(format!(
            "Completed: {} {} {}",
            after.id(),
            after.score(),
            after.status()
        ));
    }

    fn scan_failed(&self, item: &ComplianceItem, _error: &ComplianceError, _scan_id: Uuid) {
        self.push(format!("Failed: {}", item.id()));
    }

    fn warn(&self, message: &str) {
        self.push(format!("Warning: {}", message));
    }
}
