/// Network adapters for external API calls
mod http_scan_executor;

pub use http_scan_executor::HttpScanExecutor;
