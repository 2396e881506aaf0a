/// Console adapters for user-facing progress output
mod silent_scan_reporter;
mod stderr_scan_reporter;

pub use silent_scan_reporter::SilentScanReporter;
pub use stderr_scan_reporter::StderrScanReporter;
