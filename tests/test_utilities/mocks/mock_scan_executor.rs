use async_trait::async_trait;
use compliance_scan::prelude::*;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Mock ScanExecutor for testing
///
/// Returns the outcome registered for an id, or an error for ids without one.
#[derive(Default, Clone)]
pub struct MockScanExecutor {
    outcomes: HashMap<String, ScanOutcome>,
    delay: Option<Duration>,
    calls: Arc<AtomicUsize>,
}

impl MockScanExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_outcome(mut self, id: &str, score: f64, status: &str) -> Self {
        self.outcomes
            .insert(id.to_string(), ScanOutcome::new(score, status));
        self
    }

    /// Every scan sleeps this long before answering
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ScanExecutor for MockScanExecutor {
    async fn execute(&self, item_id: &ItemId) -> Result<ScanOutcome> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.outcomes
            .get(item_id.as_str())
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("Mock scanner has no result for {}", item_id))
    }
}
