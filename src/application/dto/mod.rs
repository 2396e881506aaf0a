/// Data Transfer Objects for application layer
///
/// DTOs carry results from the use cases to adapters, keeping the domain
/// layer isolated.
mod output_format;
mod scan_report;
mod view_mode;

pub use output_format::OutputFormat;
pub use scan_report::ScanReport;
pub use view_mode::ViewMode;
