use std::fmt;
use std::time::Duration;
use thiserror::Error;

/// Boxed cause carried by [`ComplianceError::ScanExecutionFailed`].
pub type ScanFailureCause = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Exit codes for the CLI application.
///
/// These codes let CI jobs tell a failing posture apart from a broken run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - all requested scans completed and no gate tripped
    Success = 0,
    /// Critical items present while `--fail-on-critical` is set
    CriticalItemsDetected = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (bad config, unknown item, failed scan, I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::CriticalItemsDetected => write!(f, "Critical Items Detected (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Errors raised by the compliance catalogue, the scan orchestrator and the view state.
///
/// `NotFound` and `ScanAlreadyInProgress` are detected before any work starts;
/// the scan variants are reported once the accepted scan has ended.
#[derive(Debug, Error)]
pub enum ComplianceError {
    #[error("Compliance item not found: {id}\n\n💡 Hint: Run with no --scan option to list the catalogue")]
    NotFound { id: String },

    #[error("No compliance item is named '{name}'")]
    ItemNameNotFound { name: String },

    #[error("Cannot scan '{requested}': a scan of '{in_flight}' is already in progress\n\n💡 Hint: Wait for the running scan to finish before requesting another")]
    ScanAlreadyInProgress { requested: String, in_flight: String },

    #[error("Scan of '{id}' failed")]
    ScanExecutionFailed {
        id: String,
        #[source]
        source: ScanFailureCause,
    },

    #[error("Scan of '{id}' timed out after {}s", .timeout.as_secs_f64())]
    ScanTimedOut { id: String, timeout: Duration },

    #[error("Scan of '{id}' was cancelled")]
    ScanCancelled { id: String },

    #[error("Duplicate compliance item {field}: '{value}'")]
    DuplicateItem { field: &'static str, value: String },

    /// Validation error for value objects and scan results
    #[error("Validation error: {message}")]
    Validation { message: String },
}

impl ComplianceError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        ComplianceError::Validation {
            message: message.into(),
        }
    }

    /// Whether the caller may simply request the same scan again later.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            ComplianceError::ScanAlreadyInProgress { .. }
                | ComplianceError::ScanExecutionFailed { .. }
                | ComplianceError::ScanTimedOut { .. }
                | ComplianceError::ScanCancelled { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::CriticalItemsDetected.as_i32(), 1);
        assert_eq!(ExitCode::InvalidArguments.as_i32(), 2);
        assert_eq!(ExitCode::ApplicationError.as_i32(), 3);
    }

    #[test]
    fn test_exit_code_display() {
        assert_eq!(format!("{}", ExitCode::Success), "Success (0)");
        assert_eq!(
            format!("{}", ExitCode::CriticalItemsDetected),
            "Critical Items Detected (1)"
        );
        assert_eq!(
            format!("{}", ExitCode::ApplicationError),
            "Application Error (3)"
        );
    }

    #[test]
    fn test_not_found_display() {
        let error = ComplianceError::NotFound {
            id: "missing-id".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Compliance item not found"));
        assert!(display.contains("missing-id"));
        assert!(display.contains("💡 Hint:"));
    }

    #[test]
    fn test_scan_already_in_progress_display() {
        let error = ComplianceError::ScanAlreadyInProgress {
            requested: "soc2".to_string(),
            in_flight: "cis-1".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("soc2"));
        assert!(display.contains("cis-1"));
        assert!(display.contains("already in progress"));
    }

    #[test]
    fn test_scan_execution_failed_keeps_source() {
        let cause = anyhow::anyhow!("scanner unreachable");
        let error = ComplianceError::ScanExecutionFailed {
            id: "cis-1".to_string(),
            source: cause.into(),
        };
        let source = std::error::Error::source(&error).unwrap();
        assert_eq!(source.to_string(), "scanner unreachable");
        // The cause is reached through source() only, so chains print it once
        assert_eq!(error.to_string(), "Scan of 'cis-1' failed");
        assert!(!error.to_string().contains("scanner unreachable"));
    }

    #[test]
    fn test_scan_timed_out_display() {
        let error = ComplianceError::ScanTimedOut {
            id: "cis-1".to_string(),
            timeout: Duration::from_secs(30),
        };
        assert_eq!(error.to_string(), "Scan of 'cis-1' timed out after 30s");
    }

    #[test]
    fn test_retryable_kinds() {
        assert!(ComplianceError::ScanCancelled {
            id: "a".to_string()
        }
        .is_retryable());
        assert!(!ComplianceError::NotFound {
            id: "a".to_string()
        }
        .is_retryable());
        assert!(!ComplianceError::validation("bad").is_retryable());
    }
}
