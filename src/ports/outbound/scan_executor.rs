use crate::compliance::domain::ItemId;
use crate::shared::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Raw result of one scan as reported by the scanner.
///
/// The status is an unvalidated label; the orchestrator parses and checks it
/// before anything reaches the catalogue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanOutcome {
    pub score: f64,
    pub status: String,
}

impl ScanOutcome {
    pub fn new(score: f64, status: impl Into<String>) -> Self {
        Self {
            score,
            status: status.into(),
        }
    }
}

/// ScanExecutor port for re-evaluating a single compliance item
///
/// This port abstracts whatever actually performs the scan (a remote scan
/// API, a local command, a test stub).
///
/// # Async Support
/// Scans are awaited without blocking other work. Implementations must be
/// `Send + Sync` so one executor can serve concurrent requests.
#[async_trait]
pub trait ScanExecutor: Send + Sync {
    /// Runs a scan of the given item
    ///
    /// # Arguments
    /// * `item_id` - Id of the item to scan
    ///
    /// # Returns
    /// The new score and status label for the item
    ///
    /// # Errors
    /// Any failure of the scanner; the cause is wrapped, not interpreted
    async fn execute(&self, item_id: &ItemId) -> Result<ScanOutcome>;
}

#[async_trait]
impl<T: ScanExecutor + ?Sized> ScanExecutor for Box<T> {
    async fn execute(&self, item_id: &ItemId) -> Result<ScanOutcome> {
        (**self).execute(item_id).await
    }
}
