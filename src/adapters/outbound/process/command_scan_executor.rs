use crate::compliance::domain::ItemId;
use crate::ports::outbound::{ScanExecutor, ScanOutcome};
use crate::shared::Result;
use anyhow::Context;
use async_trait::async_trait;
use std::process::Stdio;
use tokio::process::Command;

/// Longest stderr excerpt carried into an error message
const MAX_STDERR_EXCERPT: usize = 2048;

/// CommandScanExecutor adapter for running a local scanner program
///
/// Runs `program args... <item-id>` and reads one JSON scan result,
/// `{"score": .., "status": ..}`, from stdout. A non-zero exit is a failure
/// that carries the scanner's stderr.
///
/// The child is killed when the scan future is dropped, so a timed-out or
/// cancelled scan does not leave the scanner running.
pub struct CommandScanExecutor {
    program: String,
    args: Vec<String>,
}

impl CommandScanExecutor {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Result<Self> {
        let program = program.into();
        if program.trim().is_empty() {
            anyhow::bail!("Scanner command must not be empty");
        }
        Ok(Self { program, args })
    }

    fn describe(&self) -> String {
        if self.args.is_empty() {
            self.program.clone()
        } else {
            format!("{} {}", self.program, self.args.join(" "))
        }
    }

    fn parse_stdout(stdout: &[u8]) -> Result<ScanOutcome> {
        let text = String::from_utf8_lossy(stdout);
        let trimmed = text.trim();
        if trimmed.is_empty() {
            anyhow::bail!("Scanner produced no output");
        }
        serde_json::from_str(trimmed)
            .with_context(|| format!("Scanner output is not a scan result: {}", excerpt(trimmed)))
    }
}

#[async_trait]
impl ScanExecutor for CommandScanExecutor {
    async fn execute(&self, item_id: &ItemId) -> Result<ScanOutcome> {
        tracing::debug!(command = %self.describe(), item = %item_id, "running scanner");

        let output = Command::new(&self.program)
            .args(&self.args)
            .arg(item_id.as_str())
            .stdin(Stdio::null())
            .kill_on_drop(true)
            .output()
            .await
            .with_context(|| format!("Failed to start scanner '{}'", self.program))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            anyhow::bail!(
                "Scanner '{}' exited with {}: {}",
                self.describe(),
                output.status,
                excerpt(stderr.trim())
            );
        }

        Self::parse_stdout(&output.stdout)
    }
}

fn excerpt(text: &str) -> &str {
    if text.len() <= MAX_STDERR_EXCERPT {
        return text;
    }
    let mut end = MAX_STDERR_EXCERPT;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}
