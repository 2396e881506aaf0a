use super::error::ComplianceError;

/// Type alias for Result with anyhow::Error as the error type.
/// Adapters, configuration and the CLI use this one.
pub type Result<T> = std::result::Result<T, anyhow::Error>;

/// Result of catalogue, orchestrator and view-state operations, whose callers match on the error kind.
pub type ComplianceResult<T> = std::result::Result<T, ComplianceError>;
