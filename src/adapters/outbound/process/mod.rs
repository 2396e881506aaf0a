/// Process adapters for running local scanner programs
mod command_scan_executor;

pub use command_scan_executor::CommandScanExecutor;
