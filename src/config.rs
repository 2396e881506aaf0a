//! Configuration file support for compliance-scan.
//!
//! Provides YAML-based configuration through `compliance-scan.config.yml` files,
//! including data structures, file loading, and validation.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::application::dto::{OutputFormat, ViewMode};
use crate::application::use_cases::SlotPolicy;
use crate::shared::security::{read_checked_file, MAX_INPUT_FILE_SIZE};
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "compliance-scan.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    /// Seed catalogue; relative paths resolve against the config file's directory.
    pub catalogue: Option<PathBuf>,
    pub slot_policy: Option<SlotPolicy>,
    pub scan_timeout_secs: Option<f64>,
    pub executor: Option<ExecutorConfig>,
    pub view_mode: Option<ViewMode>,
    pub format: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Which scanner runs the scans.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ExecutorConfig {
    Http {
        base_url: String,
        request_timeout_secs: Option<u64>,
    },
    Command {
        program: String,
        #[serde(default)]
        args: Vec<String>,
    },
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = read_checked_file(path, "config file", MAX_INPUT_FILE_SIZE).with_context(|| {
        format!(
            "Failed to load config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let mut config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    if let (Some(catalogue), Some(base)) = (config.catalogue.as_mut(), path.parent()) {
        if catalogue.is_relative() {
            *catalogue = base.join(&*catalogue);
        }
    }

    tracing::debug!(path = %path.display(), "config loaded");
    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref catalogue) = config.catalogue {
        if catalogue.as_os_str().is_empty() {
            bail!("Invalid config: catalogue must not be empty.");
        }
    }

    if let Some(timeout) = config.scan_timeout_secs {
        if !timeout.is_finite() || timeout <= 0.0 {
            bail!(
                "Invalid config: scan_timeout_secs must be a positive number of seconds, got {}.\n\n\
                 💡 Hint: Remove the field to let scans run until the scanner answers.",
                timeout
            );
        }
    }

    if let Some(ref format) = config.format {
        format
            .parse::<OutputFormat>()
            .map_err(|e| anyhow::anyhow!("Invalid config: {}", e))?;
    }

    match config.executor {
        Some(ExecutorConfig::Http {
            ref base_url,
            request_timeout_secs,
        }) => {
            if base_url.trim().is_empty() {
                bail!(
                    "Invalid config: executor.base_url must not be empty.\n\n\
                     💡 Hint: Point it at the scan API, e.g. \"https://scanner.internal/api\"."
                );
            }
            if request_timeout_secs == Some(0) {
                bail!("Invalid config: executor.request_timeout_secs must be greater than 0.");
            }
        }
        Some(ExecutorConfig::Command { ref program, .. }) => {
            if program.trim().is_empty() {
                bail!("Invalid config: executor.program must not be empty.");
            }
        }
        None => {}
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
