/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the compliance core uses
/// to reach external systems (scanners, file system, console).
pub mod catalogue_source;
pub mod formatter;
pub mod scan_executor;
pub mod scan_reporter;

pub use catalogue_source::CatalogueSource;
pub use formatter::DashboardFormatter;
pub use scan_executor::{ScanExecutor, ScanOutcome};
pub use scan_reporter::ScanReporter;
