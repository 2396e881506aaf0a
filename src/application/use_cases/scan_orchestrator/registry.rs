use crate::compliance::domain::ItemId;
use crate::shared::{ComplianceError, ComplianceResult};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::Notify;
use uuid::Uuid;

/// How many scans may be in flight at once
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotPolicy {
    /// One scan at a time across the whole catalogue
    #[default]
    Single,
    /// One scan at a time per item; unrelated items scan in parallel
    PerItem,
}

impl std::str::FromStr for SlotPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "single" => Ok(SlotPolicy::Single),
            "per_item" => Ok(SlotPolicy::PerItem),
            _ => Err(format!(
                "Invalid slot policy: {}. Please specify 'single' or 'per_item'",
                s
            )),
        }
    }
}

/// Ticket handed out when a scan is accepted
#[derive(Debug, Clone)]
pub(super) struct ScanTicket {
    pub scan_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub cancel: Arc<Notify>,
    pub cancelled: Arc<AtomicBool>,
}

impl ScanTicket {
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// In-flight scan registry.
///
/// An id is present iff its scan was accepted and has not ended yet.
/// `try_acquire` checks and marks in one call; the owner holds one mutex
/// around it so two requests can never both see a free slot.
#[derive(Debug, Default)]
pub(super) struct ScanRegistry {
    policy: SlotPolicy,
    in_flight: HashMap<ItemId, ScanTicket>,
}

impl ScanRegistry {
    pub fn new(policy: SlotPolicy) -> Self {
        Self {
            policy,
            in_flight: HashMap::new(),
        }
    }

    pub fn policy(&self) -> SlotPolicy {
        self.policy
    }

    pub fn try_acquire(&mut self, id: &ItemId) -> ComplianceResult<ScanTicket> {
        let blocker = match self.policy {
            SlotPolicy::Single => self.in_flight.keys().next(),
            SlotPolicy::PerItem => self.in_flight.get_key_value(id).map(|(key, _)| key),
        };
        if let Some(busy) = blocker {
            return Err(ComplianceError::ScanAlreadyInProgress {
                requested: id.to_string(),
                in_flight: busy.to_string(),
            });
        }

        let ticket = ScanTicket {
            scan_id: Uuid::new_v4(),
            started_at: Utc::now(),
            cancel: Arc::new(Notify::new()),
            cancelled: Arc::new(AtomicBool::new(false)),
        };
        self.in_flight.insert(id.clone(), ticket.clone());
        Ok(ticket)
    }

    /// Clears the marker for `id` if it still belongs to `scan_id`.
    pub fn release(&mut self, id: &ItemId, scan_id: Uuid) -> bool {
        match self.in_flight.get(id) {
            Some(ticket) if ticket.scan_id == scan_id => {
                self.in_flight.remove(id);
                true
            }
            _ => false,
        }
    }

    pub fn is_scanning(&self, id: &ItemId) -> bool {
        self.in_flight.contains_key(id)
    }

    /// Marks the running scan of `id` as cancelled and wakes it. The scan clears its own marker.
    pub fn cancel(&self, id: &ItemId) -> bool {
        match self.in_flight.get(id) {
            Some(ticket) => {
                ticket.cancelled.store(true, Ordering::SeqCst);
                ticket.cancel.notify_one();
                true
            }
            None => false,
        }
    }

    pub fn in_flight(&self) -> Vec<ItemId> {
        let mut ids: Vec<ItemId> = self.in_flight.keys().cloned().collect();
        ids.sort();
        ids
    }
}
