//! Builder for constructing DashboardReadModel from domain objects
//!
//! Joins catalogue items with the in-flight registry and the view state.

use super::compliance_item_view::ComplianceItemView;
use super::dashboard_read_model::DashboardReadModel;
use crate::application::use_cases::{ScanOrchestrator, ViewStateController};
use crate::compliance::domain::{ComplianceItem, ItemId, PostureSummary};
use crate::ports::outbound::{ScanExecutor, ScanReporter};
use chrono::Utc;
use std::collections::HashSet;

/// Builder for constructing DashboardReadModel from domain objects
pub struct DashboardReadModelBuilder;

impl DashboardReadModelBuilder {
    /// Builds a DashboardReadModel from a catalogue snapshot
    ///
    /// # Arguments
    /// * `items` - Catalogue items in display order
    /// * `in_flight` - Ids with a scan currently running
    /// * `view` - View mode and expansion flags
    ///
    /// # Returns
    /// A fully constructed DashboardReadModel
    pub fn build(
        items: &[ComplianceItem],
        in_flight: &[ItemId],
        view: &ViewStateController,
    ) -> DashboardReadModel {
        let scanning: HashSet<&ItemId> = in_flight.iter().collect();

        DashboardReadModel {
            generated_at: Utc::now(),
            view_mode: view.view_mode(),
            items: items
                .iter()
                .map(|item| Self::build_item(item, &scanning, view))
                .collect(),
            summary: PostureSummary::from_items(items),
            scanning: scanning.len(),
        }
    }

    /// Builds the read model from the live orchestrator state
    pub fn from_orchestrator<E, R>(
        orchestrator: &ScanOrchestrator<E, R>,
        view: &ViewStateController,
    ) -> DashboardReadModel
    where
        E: ScanExecutor,
        R: ScanReporter,
    {
        Self::build(&orchestrator.list(), &orchestrator.in_flight(), view)
    }

    fn build_item(
        item: &ComplianceItem,
        scanning: &HashSet<&ItemId>,
        view: &ViewStateController,
    ) -> ComplianceItemView {
        ComplianceItemView {
            id: item.id().to_string(),
            name: item.name().to_string(),
            score: item.score().value(),
            status: item.status(),
            severity_tier: item.severity_tier(),
            is_scanning: scanning.contains(item.id()),
            is_expanded: view.is_expanded_id(item.id()),
            description: item.description().map(str::to_string),
            last_scanned_at: item.last_scanned_at(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dto::ViewMode;
    use crate::compliance::domain::{ComplianceStatus, Score, SeverityTier};

    fn create_test_items() -> Vec<ComplianceItem> {
        vec![
            ComplianceItem::new(
                ItemId::new("cis-1").unwrap(),
                "CIS Benchmark",
                Score::new(92.0).unwrap(),
                ComplianceStatus::Passing,
            )
            .unwrap()
            .with_description("Center for Internet Security hardening guide"),
            ComplianceItem::new(
                ItemId::new("pci").unwrap(),
                "PCI DSS",
                Score::new(55.0).unwrap(),
                ComplianceStatus::Failing,
            )
            .unwrap(),
        ]
    }

    #[test]
    fn test_build_flattens_items_in_order() {
        let items = create_test_items();
        let model = DashboardReadModelBuilder::build(&items, &[], &ViewStateController::new());

        assert_eq!(model.items.len(), 2);
        assert_eq!(model.items[0].id, "cis-1");
        assert_eq!(model.items[0].score, 92.0);
        assert_eq!(model.items[0].severity_tier, SeverityTier::Healthy);
        assert_eq!(
            model.items[0].description.as_deref(),
            Some("Center for Internet Security hardening guide")
        );
        assert_eq!(model.items[1].name, "PCI DSS");
        assert_eq!(model.items[1].severity_tier, SeverityTier::Critical);
        assert_eq!(model.view_mode, ViewMode::Cards);
    }

    #[test]
    fn test_build_marks_scanning_and_expanded() {
        let items = create_test_items();
        let mut view = ViewStateController::new();
        view.set_view_mode(ViewMode::Table);
        view.toggle_expanded("PCI DSS", &items).unwrap();

        let model =
            DashboardReadModelBuilder::build(&items, &[ItemId::new("cis-1").unwrap()], &view);

        assert!(model.items[0].is_scanning);
        assert!(!model.items[0].is_expanded);
        assert!(!model.items[1].is_scanning);
        assert!(model.items[1].is_expanded);
        assert_eq!(model.scanning, 1);
        assert_eq!(model.view_mode, ViewMode::Table);
        assert_eq!(model.expanded_items().count(), 1);
    }

    #[test]
    fn test_build_summary() {
        let model = DashboardReadModelBuilder::build(
            &create_test_items(),
            &[],
            &ViewStateController::new(),
        );
        assert_eq!(model.summary.total, 2);
        assert_eq!(model.summary.healthy, 1);
        assert_eq!(model.summary.critical, 1);
        assert_eq!(model.summary.average_score, Some(73.5));
    }

    #[test]
    fn test_build_empty_catalogue() {
        let model = DashboardReadModelBuilder::build(&[], &[], &ViewStateController::new());
        assert!(model.items.is_empty());
        assert_eq!(model.summary.total, 0);
        assert_eq!(model.scanning, 0);
    }
}
