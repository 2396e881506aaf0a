use crate::adapters::outbound::network::HttpScanExecutor;
use crate::adapters::outbound::process::CommandScanExecutor;
use crate::ports::outbound::ScanExecutor;
use crate::shared::Result;
use std::time::Duration;

/// Executor type enumeration for factory pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutorType {
    /// Remote scan API reached over HTTP
    Http {
        base_url: String,
        request_timeout: Duration,
    },
    /// Local scanner program; the item id is appended as the last argument
    Command { program: String, args: Vec<String> },
}

/// Factory for creating scan executors
///
/// Keeps the choice between the HTTP and process adapters out of the use case,
/// which only sees the ScanExecutor port.
pub struct ScanExecutorFactory;

impl ScanExecutorFactory {
    /// Creates an executor instance for the specified type
    ///
    /// # Arguments
    /// * `executor_type` - Which scanner to reach and how
    ///
    /// # Errors
    /// Returns an error if the adapter rejects its settings (bad URL, empty command)
    pub fn create(executor_type: ExecutorType) -> Result<Box<dyn ScanExecutor>> {
        let executor: Box<dyn ScanExecutor> = match executor_type {
            ExecutorType::Http {
                base_url,
                request_timeout,
            } => Box::new(HttpScanExecutor::new(&base_url, request_timeout)?),
            ExecutorType::Command { program, args } => {
                Box::new(CommandScanExecutor::new(program, args)?)
            }
        };
        Ok(executor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_http_executor() {
        let executor = ScanExecutorFactory::create(ExecutorType::Http {
            base_url: "https://scanner.example".to_string(),
            request_timeout: Duration::from_secs(5),
        });
        assert!(executor.is_ok());
    }

    #[test]
    fn test_create_http_executor_invalid_url() {
        let executor = ScanExecutorFactory::create(ExecutorType::Http {
            base_url: "scanner.example".to_string(),
            request_timeout: Duration::from_secs(5),
        });
        assert!(executor.is_err());
    }

    #[test]
    fn test_create_command_executor() {
        let executor = ScanExecutorFactory::create(ExecutorType::Command {
            program: "scan-tool".to_string(),
            args: vec!["--json".to_string()],
        });
        assert!(executor.is_ok());

        let empty = ScanExecutorFactory::create(ExecutorType::Command {
            program: String::new(),
            args: vec![],
        });
        assert!(empty.is_err());
    }

    #[test]
    fn test_executor_type_equality() {
        let a = ExecutorType::Command {
            program: "scan-tool".to_string(),
            args: vec![],
        };
        assert_eq!(a.clone(), a);
        assert_ne!(
            a,
            ExecutorType::Command {
                program: "other".to_string(),
                args: vec![],
            }
        );
    }
}
