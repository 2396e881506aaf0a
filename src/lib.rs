//! compliance-scan - compliance posture catalogue with on-demand re-scans
//!
//! This library keeps a catalogue of compliance standards, derives a severity
//! tier from each score, runs re-scans through a pluggable scanner without
//! letting them overlap, and tracks which items a dashboard shows expanded.
//! It follows hexagonal architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`compliance`): Catalogue, items and the status classifier
//! - **Application Layer** (`application`): Scan orchestration, view state and read models
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use compliance_scan::prelude::*;
//!
//! # async fn run() -> Result<()> {
//! // Load the seed catalogue
//! let items = FileSystemCatalogueReader::new("catalogue.yml").load_items()?;
//! let catalogue = ComplianceCatalogue::from_items(items)?;
//!
//! // Create adapters and the use case
//! let executor = HttpScanExecutor::new(
//!     "https://scanner.internal/api",
//!     HttpScanExecutor::DEFAULT_REQUEST_TIMEOUT,
//! )?;
//! let orchestrator = ScanOrchestrator::new(catalogue, executor, StderrScanReporter::new(true));
//!
//! // Re-scan one item and render the dashboard
//! let report = orchestrator.request_scan(&ItemId::new("cis-1")?).await?;
//! println!("{} is now {}", report.item_id, report.severity_tier);
//!
//! let model = DashboardReadModelBuilder::from_orchestrator(&orchestrator, &ViewStateController::new());
//! println!("{}", TextFormatter::new(false).format(&model)?);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod compliance;
pub mod config;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::{SilentScanReporter, StderrScanReporter};
    pub use crate::adapters::outbound::filesystem::FileSystemCatalogueReader;
    pub use crate::adapters::outbound::formatters::{JsonFormatter, TextFormatter};
    pub use crate::adapters::outbound::network::HttpScanExecutor;
    pub use crate::adapters::outbound::process::CommandScanExecutor;
    pub use crate::application::dto::{OutputFormat, ScanReport, ViewMode};
    pub use crate::application::read_models::{
        ComplianceItemView, DashboardReadModel, DashboardReadModelBuilder,
    };
    pub use crate::application::use_cases::{ScanOrchestrator, SlotPolicy, ViewStateController};
    pub use crate::compliance::domain::{
        ComplianceCatalogue, ComplianceItem, ComplianceStatus, ItemId, PostureSummary, Score,
        SeverityTier,
    };
    pub use crate::compliance::policies::StatusClassifier;
    pub use crate::ports::outbound::{
        CatalogueSource, DashboardFormatter, ScanExecutor, ScanOutcome, ScanReporter,
    };
    pub use crate::shared::{ComplianceError, ComplianceResult, Result};
}
