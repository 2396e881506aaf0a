use crate::compliance::domain::{ComplianceItem, SeverityTier};
use crate::ports::outbound::ScanReporter;
use crate::shared::ComplianceError;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;
use uuid::Uuid;

/// StderrScanReporter adapter for reporting scan progress to stderr
///
/// This adapter implements the ScanReporter port. Each running scan gets a
/// spinner; when it ends the spinner is replaced by a one-line result so
/// stdout stays free for the rendered dashboard.
pub struct StderrScanReporter {
    progress: MultiProgress,
    spinners: Mutex<HashMap<Uuid, ProgressBar>>,
    colored: bool,
}

impl StderrScanReporter {
    pub fn new(colored: bool) -> Self {
        Self {
            progress: MultiProgress::new(),
            spinners: Mutex::new(HashMap::new()),
            colored,
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("   {spinner:.green} {msg} ({elapsed})")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn finish_spinner(&self, scan_id: Uuid) {
        let spinner = self
            .spinners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&scan_id);
        if let Some(spinner) = spinner {
            spinner.finish_and_clear();
            self.progress.remove(&spinner);
        }
    }

    fn print_line(&self, line: String) {
        self.progress.suspend(|| eprintln!("{}", line));
    }

    fn completion_line(&self, before: &ComplianceItem, after: &ComplianceItem) -> String {
        let tier = after.severity_tier();
        let score = format!("{} → {}", before.score(), after.score());
        let tier_label = format!("{} {}", tier.icon(), tier);
        if self.colored {
            let tier_label = match tier {
                SeverityTier::Healthy => tier_label.green().to_string(),
                SeverityTier::Warning => tier_label.yellow().to_string(),
                SeverityTier::Critical => tier_label.red().to_string(),
            };
            format!(
                "   {} {}: {} [{}] {}",
                "✔".green(),
                after.name().bold(),
                score,
                after.status(),
                tier_label
            )
        } else {
            format!(
                "   ✔ {}: {} [{}] {}",
                after.name(),
                score,
                after.status(),
                tier_label
            )
        }
    }

    fn failure_line(&self, item: &ComplianceItem, error: &ComplianceError) -> String {
        let message = describe_failure(error);
        if self.colored {
            format!("   {} {}: {}", "✘".red(), item.name().bold(), message.red())
        } else {
            format!("   ✘ {}: {}", item.name(), message)
        }
    }
}

/// One-line form of `error` with its causes appended
fn describe_failure(error: &ComplianceError) -> String {
    let mut message = error.to_string();
    let mut source = std::error::Error::source(error);
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

impl Default for StderrScanReporter {
    fn default() -> Self {
        Self::new(true)
    }
}

impl ScanReporter for StderrScanReporter {
    fn scan_started(&self, item: &ComplianceItem, scan_id: Uuid) {
        let spinner = self.progress.add(ProgressBar::new_spinner());
        spinner.set_style(Self::spinner_style());
        spinner.set_message(format!("🔍 Scanning {}...", item.name()));
        spinner.enable_steady_tick(Duration::from_millis(100));
        self.spinners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(scan_id, spinner);
    }

    fn scan_completed(&self, before: &ComplianceItem, after: &ComplianceItem, scan_id: Uuid) {
        self.finish_spinner(scan_id);
        self.print_line(self.completion_line(before, after));
    }

    fn scan_failed(&self, item: &ComplianceItem, error: &ComplianceError, scan_id: Uuid) {
        self.finish_spinner(scan_id);
        self.print_line(self.failure_line(item, error));
    }

    fn warn(&self, message: &str) {
        let line = if self.colored {
            format!("⚠️  {}", message.yellow())
        } else {
            format!("⚠️  {}", message)
        };
        self.print_line(line);
    }
}
