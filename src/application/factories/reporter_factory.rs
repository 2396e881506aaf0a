use crate::adapters::outbound::console::{SilentScanReporter, StderrScanReporter};
use crate::ports::outbound::ScanReporter;

/// Factory for creating scan progress reporters
pub struct ReporterFactory;

impl ReporterFactory {
    /// Creates the reporter for a run
    ///
    /// # Arguments
    /// * `quiet` - Suppress all progress output
    /// * `colored` - Whether progress lines may use ANSI colours
    pub fn create(quiet: bool, colored: bool) -> Box<dyn ScanReporter> {
        if quiet {
            Box::new(SilentScanReporter::new())
        } else {
            Box::new(StderrScanReporter::new(colored))
        }
    }
}
