/// Mock implementations for testing
mod mock_catalogue_source;
mod mock_scan_executor;
mod mock_scan_reporter;

pub use mock_catalogue_source::MockCatalogueSource;
pub use mock_scan_executor::MockScanExecutor;
pub use mock_scan_reporter::MockScanReporter;
