mod formatter_factory;
mod reporter_factory;
mod scan_executor_factory;

pub use formatter_factory::FormatterFactory;
pub use reporter_factory::ReporterFactory;
pub use scan_executor_factory::{ExecutorType, ScanExecutorFactory};
