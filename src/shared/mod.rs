/// Shared kernel - error types, result aliases and input-file safety checks
pub mod error;
pub mod result;
pub mod security;

pub use error::{ComplianceError, ExitCode};
pub use result::{ComplianceResult, Result};
