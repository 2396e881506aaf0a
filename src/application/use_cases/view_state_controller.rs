use crate::application::dto::ViewMode;
use crate::compliance::domain::{ComplianceItem, ItemId};
use crate::shared::{ComplianceError, ComplianceResult};
use std::collections::HashSet;

/// ViewStateController - UI-only state of the compliance dashboard
///
/// Holds the view mode and the set of expanded items. Expansion is keyed by
/// item id so a rename never strands a flag; the name-based operations
/// resolve the name against the items they are given.
///
/// Nothing here reads or writes scan state.
#[derive(Debug, Clone, Default)]
pub struct ViewStateController {
    view_mode: ViewMode,
    expanded: HashSet<ItemId>,
}

impl ViewStateController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    /// Flips the expansion of the item called `name`.
    ///
    /// # Arguments
    /// * `name` - Display name of the item
    /// * `items` - Items to resolve the name against
    ///
    /// # Returns
    /// Whether the item is expanded after the toggle
    ///
    /// # Errors
    /// `ItemNameNotFound` when no item has that name; the state is unchanged
    pub fn toggle_expanded(
        &mut self,
        name: &str,
        items: &[ComplianceItem],
    ) -> ComplianceResult<bool> {
        let id = Self::resolve(name, items)?.clone();
        Ok(self.toggle_expanded_id(id))
    }

    /// Whether the item called `name` is expanded; false for unknown names
    pub fn is_expanded(&self, name: &str, items: &[ComplianceItem]) -> bool {
        Self::resolve(name, items)
            .map(|id| self.is_expanded_id(id))
            .unwrap_or(false)
    }

    pub fn toggle_expanded_id(&mut self, id: ItemId) -> bool {
        if self.expanded.remove(&id) {
            false
        } else {
            self.expanded.insert(id);
            true
        }
    }

    pub fn is_expanded_id(&self, id: &ItemId) -> bool {
        self.expanded.contains(id)
    }

    pub fn expand_all(&mut self, items: &[ComplianceItem]) {
        self.expanded
            .extend(items.iter().map(|item| item.id().clone()));
    }

    pub fn collapse_all(&mut self) {
        self.expanded.clear();
    }

    fn resolve<'a>(name: &str, items: &'a [ComplianceItem]) -> ComplianceResult<&'a ItemId> {
        items
            .iter()
            .find(|item| item.name() == name)
            .map(|item| item.id())
            .ok_or_else(|| ComplianceError::ItemNameNotFound {
                name: name.to_string(),
            })
    }
}
