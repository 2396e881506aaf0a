//! Read models for CQRS-lite pattern
//!
//! This module contains view-optimized structs that provide
//! a denormalized representation of the catalogue for rendering.

pub mod compliance_item_view;
pub mod dashboard_read_model;
pub mod dashboard_read_model_builder;

pub use compliance_item_view::ComplianceItemView;
pub use dashboard_read_model::DashboardReadModel;
pub use dashboard_read_model_builder::DashboardReadModelBuilder;
