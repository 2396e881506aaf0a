mod registry;


pub use registry::SlotPolicy;

use crate::application::dto::ScanReport;
use crate::compliance::domain::{
    ComplianceCatalogue, ComplianceItem, ComplianceStatus, ItemId, PostureSummary, Score,
};
use crate::compliance::policies::StatusClassifier;
use crate::ports::outbound::{ScanExecutor, ScanOutcome, ScanReporter};
use crate::shared::{ComplianceError, ComplianceResult};
use chrono::Utc;
use registry::{ScanRegistry, ScanTicket};
use std::sync::{Mutex, MutexGuard, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::Duration;
use tokio::sync::Notify;
use uuid::Uuid;

/// ScanOrchestrator - Use case for on-demand re-scans of compliance items
///
/// Owns the catalogue and the in-flight registry. A request is rejected
/// up front when the item is unknown or its slot is busy; otherwise the
/// executor runs and, on success, the catalogue is updated before the slot
/// is released.
///
/// # Type Parameters
/// * `E` - ScanExecutor implementation
/// * `R` - ScanReporter implementation
pub struct ScanOrchestrator<E, R> {
    catalogue: RwLock<ComplianceCatalogue>,
    registry: Mutex<ScanRegistry>,
    executor: E,
    reporter: R,
    scan_timeout: Option<Duration>,
}

impl<E, R> ScanOrchestrator<E, R>
where
    E: ScanExecutor,
    R: ScanReporter,
{
    /// Creates an orchestrator with the single-slot policy and no timeout
    pub fn new(catalogue: ComplianceCatalogue, executor: E, reporter: R) -> Self {
        Self {
            catalogue: RwLock::new(catalogue),
            registry: Mutex::new(ScanRegistry::new(SlotPolicy::Single)),
            executor,
            reporter,
            scan_timeout: None,
        }
    }

    pub fn with_slot_policy(self, policy: SlotPolicy) -> Self {
        Self {
            registry: Mutex::new(ScanRegistry::new(policy)),
            ..self
        }
    }

    /// Bounds every scan. Without it a scanner that never answers keeps its slot busy.
    pub fn with_scan_timeout(mut self, timeout: Duration) -> Self {
        self.scan_timeout = Some(timeout);
        self
    }

    pub fn slot_policy(&self) -> SlotPolicy {
        self.lock_registry().policy()
    }

    pub fn scan_timeout(&self) -> Option<Duration> {
        self.scan_timeout
    }

    /// Snapshot of every item in display order
    pub fn list(&self) -> Vec<ComplianceItem> {
        self.read_catalogue().list()
    }

    pub fn get(&self, id: &ItemId) -> ComplianceResult<ComplianceItem> {
        self.read_catalogue().get(id).cloned()
    }

    pub fn find_by_name(&self, name: &str) -> Option<ComplianceItem> {
        self.read_catalogue().find_by_name(name).cloned()
    }

    /// Tier counts over the current catalogue
    pub fn summary(&self) -> PostureSummary {
        self.read_catalogue().summary()
    }

    pub fn is_scanning(&self, id: &ItemId) -> bool {
        self.lock_registry().is_scanning(id)
    }

    /// Ids with a scan currently in flight, sorted
    pub fn in_flight(&self) -> Vec<ItemId> {
        self.lock_registry().in_flight()
    }

    /// Asks the running scan of `id` to stop.
    ///
    /// Returns false when nothing is scanning `id`, including a scan whose
    /// result has already been stored. On true the scan ends with
    /// `ScanCancelled`, leaves the catalogue unchanged and frees its slot.
    pub fn cancel_scan(&self, id: &ItemId) -> bool {
        let cancelled = self.lock_registry().cancel(id);
        if cancelled {
            tracing::info!(item = %id, "scan cancellation requested");
        }
        cancelled
    }

    /// Runs a scan of one item and stores the result.
    ///
    /// # Errors
    /// * `NotFound` - `id` is not in the catalogue; nothing is touched
    /// * `ScanAlreadyInProgress` - the slot is busy; the request is not queued
    /// * `ScanExecutionFailed` - the executor failed or returned an invalid result
    /// * `ScanTimedOut` / `ScanCancelled` - the scan was stopped before finishing
    ///
    /// On every error after acceptance the catalogue is unchanged and the slot is free.
    pub async fn request_scan(&self, id: &ItemId) -> ComplianceResult<ScanReport> {
        if !self.read_catalogue().contains(id) {
            tracing::debug!(item = %id, "scan rejected: unknown item");
            return Err(ComplianceError::NotFound { id: id.to_string() });
        }

        let ticket = self.lock_registry().try_acquire(id).inspect_err(|e| {
            tracing::debug!(item = %id, "scan rejected: {}", e);
        })?;
        let slot = SlotGuard {
            registry: &self.registry,
            id: id.clone(),
            scan_id: ticket.scan_id,
        };

        let before = self.get(id)?;
        self.reporter.scan_started(&before, ticket.scan_id);
        tracing::info!(item = %id, scan_id = %ticket.scan_id, "scan started");

        match self.execute_and_store(id, &ticket).await {
            Ok(after) => {
                drop(slot);
                tracing::info!(
                    item = %id,
                    scan_id = %ticket.scan_id,
                    score = after.score().value(),
                    status = %after.status(),
                    "scan completed"
                );
                self.reporter.scan_completed(&before, &after, ticket.scan_id);
                Ok(ScanReport {
                    scan_id: ticket.scan_id,
                    item_id: id.clone(),
                    previous_score: before.score(),
                    previous_status: before.status(),
                    score: after.score(),
                    status: after.status(),
                    severity_tier: after.severity_tier(),
                    started_at: ticket.started_at,
                    finished_at: after.last_scanned_at().unwrap_or_else(Utc::now),
                })
            }
            Err(error) => {
                drop(slot);
                let cause = std::error::Error::source(&error).map(ToString::to_string);
                tracing::warn!(
                    item = %id,
                    scan_id = %ticket.scan_id,
                    cause = cause.as_deref().unwrap_or("none"),
                    "scan failed: {}",
                    error
                );
                self.reporter.scan_failed(&before, &error, ticket.scan_id);
                Err(error)
            }
        }
    }

    /// Requests scans of several items at once and collects every outcome.
    ///
    /// Under `SlotPolicy::Single` only the first request wins the slot; the
    /// others come back as `ScanAlreadyInProgress`.
    pub async fn request_scans(
        &self,
        ids: &[ItemId],
    ) -> Vec<(ItemId, ComplianceResult<ScanReport>)> {
        let requests = ids
            .iter()
            .map(|id| async move { (id.clone(), self.request_scan(id).await) });
        futures::future::join_all(requests).await
    }

    async fn execute_and_store(
        &self,
        id: &ItemId,
        ticket: &ScanTicket,
    ) -> ComplianceResult<ComplianceItem> {
        let outcome = self.run_executor(id, &ticket.cancel).await?;
        let (score, status) = Self::validate_outcome(id, outcome)?;

        if !StatusClassifier::is_consistent(score.value(), status) {
            let tier = StatusClassifier::classify(score.value());
            let message = format!(
                "Scan of '{}' reported status {} for score {} ({} tier); storing it as reported",
                id, status, score, tier
            );
            tracing::warn!(item = %id, "{}", message);
            self.reporter.warn(&message);
        }

        // Check, store and release under one registry lock so cancel_scan never sees a stored scan
        let mut registry = self.lock_registry();
        if ticket.is_cancelled() {
            return Err(ComplianceError::ScanCancelled { id: id.to_string() });
        }
        let stored = self
            .write_catalogue()
            .upsert_result_at(id, score, status, Utc::now())?
            .clone();
        registry.release(id, ticket.scan_id);
        Ok(stored)
    }

    async fn run_executor(&self, id: &ItemId, cancel: &Notify) -> ComplianceResult<ScanOutcome> {
        let deadline = async {
            match self.scan_timeout {
                Some(timeout) => tokio::time::sleep(timeout).await,
                None => std::future::pending::<()>().await,
            }
        };

        tokio::select! {
            result = self.executor.execute(id) => {
                result.map_err(|cause| ComplianceError::ScanExecutionFailed {
                    id: id.to_string(),
                    source: cause.into(),
                })
            }
            _ = cancel.notified() => Err(ComplianceError::ScanCancelled { id: id.to_string() }),
            _ = deadline => Err(ComplianceError::ScanTimedOut {
                id: id.to_string(),
                // deadline only completes when a timeout is set
                timeout: self.scan_timeout.unwrap_or_default(),
            }),
        }
    }

    /// Checks a raw scanner result before it may reach the catalogue
    fn validate_outcome(
        id: &ItemId,
        outcome: ScanOutcome,
    ) -> ComplianceResult<(Score, ComplianceStatus)> {
        let invalid = |cause: ComplianceError| ComplianceError::ScanExecutionFailed {
            id: id.to_string(),
            source: Box::new(cause),
        };
        let score = Score::new(outcome.score).map_err(invalid)?;
        let status = outcome
            .status
            .parse::<ComplianceStatus>()
            .map_err(invalid)?;
        Ok((score, status))
    }

    fn read_catalogue(&self) -> RwLockReadGuard<'_, ComplianceCatalogue> {
        self.catalogue.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_catalogue(&self) -> RwLockWriteGuard<'_, ComplianceCatalogue> {
        self.catalogue.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn lock_registry(&self) -> MutexGuard<'_, ScanRegistry> {
        self.registry.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Frees the slot on every exit path, including the request future being dropped.
struct SlotGuard<'a> {
    registry: &'a Mutex<ScanRegistry>,
    id: ItemId,
    scan_id: Uuid,
}

impl Drop for SlotGuard<'_> {
    fn drop(&mut self) {
        self.registry
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .release(&self.id, self.scan_id);
    }
}
