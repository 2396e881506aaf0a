use crate::compliance::domain::{ComplianceItem, ComplianceStatus, ItemId, PostureSummary, Score};
use crate::shared::{ComplianceError, ComplianceResult};
use chrono::{DateTime, Utc};
use std::collections::HashMap;

/// ComplianceCatalogue - ordered set of compliance items keyed by id
///
/// Insertion order is the default display order. Ids and names are both unique;
/// the name uniqueness lets the presentation layer address items by name.
///
/// The catalogue has no locking of its own. Writers are serialized by the
/// scan orchestrator that owns it.
#[derive(Debug, Clone, Default)]
pub struct ComplianceCatalogue {
    items: Vec<ComplianceItem>,
    index: HashMap<ItemId, usize>,
}

impl ComplianceCatalogue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalogue from seed items, keeping their order.
    ///
    /// # Errors
    /// Returns `DuplicateItem` if two items share an id or a name
    pub fn from_items(items: Vec<ComplianceItem>) -> ComplianceResult<Self> {
        let mut catalogue = Self::new();
        for item in items {
            catalogue.insert(item)?;
        }
        Ok(catalogue)
    }

    /// Appends a new item at the end of the display order.
    pub fn insert(&mut self, item: ComplianceItem) -> ComplianceResult<()> {
        if self.index.contains_key(item.id()) {
            return Err(ComplianceError::DuplicateItem {
                field: "id",
                value: item.id().to_string(),
            });
        }
        if self.find_by_name(item.name()).is_some() {
            return Err(ComplianceError::DuplicateItem {
                field: "name",
                value: item.name().to_string(),
            });
        }
        self.index.insert(item.id().clone(), self.items.len());
        self.items.push(item);
        Ok(())
    }

    /// Read-only snapshot in insertion order
    pub fn list(&self) -> Vec<ComplianceItem> {
        self.items.clone()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ComplianceItem> {
        self.items.iter()
    }

    pub fn get(&self, id: &ItemId) -> ComplianceResult<&ComplianceItem> {
        self.index
            .get(id)
            .map(|&position| &self.items[position])
            .ok_or_else(|| ComplianceError::NotFound { id: id.to_string() })
    }

    pub fn contains(&self, id: &ItemId) -> bool {
        self.index.contains_key(id)
    }

    pub fn find_by_name(&self, name: &str) -> Option<&ComplianceItem> {
        self.items.iter().find(|item| item.name() == name)
    }

    /// Replaces score and status of an existing item, visible to the next read.
    ///
    /// Status is stored as given; callers are expected to pass a label
    /// consistent with the new score's severity tier.
    pub fn upsert_result(
        &mut self,
        id: &ItemId,
        score: Score,
        status: ComplianceStatus,
    ) -> ComplianceResult<&ComplianceItem> {
        self.upsert_result_at(id, score, status, Utc::now())
    }

    pub(crate) fn upsert_result_at(
        &mut self,
        id: &ItemId,
        score: Score,
        status: ComplianceStatus,
        at: DateTime<Utc>,
    ) -> ComplianceResult<&ComplianceItem> {
        let position = *self
            .index
            .get(id)
            .ok_or_else(|| ComplianceError::NotFound { id: id.to_string() })?;
        let item = &mut self.items[position];
        item.apply_result(score, status, at);
        Ok(&*item)
    }

    pub fn ids(&self) -> Vec<ItemId> {
        self.items.iter().map(|item| item.id().clone()).collect()
    }

    pub fn summary(&self) -> PostureSummary {
        PostureSummary::from_items(&self.items)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
