use crate::compliance::domain::SeverityTier;
use crate::compliance::policies::StatusClassifier;
use crate::shared::{ComplianceError, ComplianceResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Maximum length for item ids and names
const MAX_IDENTIFIER_LENGTH: usize = 128;

/// Lowest and highest score a stored item may carry
pub const MIN_SCORE: f64 = 0.0;
pub const MAX_SCORE: f64 = 100.0;

/// NewType wrapper for a compliance item id, stable across scans
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> ComplianceResult<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ComplianceError::validation("Item id cannot be empty"));
        }
        if id.chars().any(char::is_control) {
            return Err(ComplianceError::validation(format!(
                "Item id '{}' contains control characters",
                id.escape_debug()
            )));
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Compliance score, a finite value in [0, 100]
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Score(f64);

impl Score {
    pub fn new(value: f64) -> ComplianceResult<Self> {
        if !value.is_finite() || !(MIN_SCORE..=MAX_SCORE).contains(&value) {
            return Err(ComplianceError::validation(format!(
                "Score must be between {} and {}, got {}",
                MIN_SCORE, MAX_SCORE, value
            )));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0.fract() == 0.0 {
            write!(f, "{:.0}", self.0)
        } else {
            write!(f, "{:.1}", self.0)
        }
    }
}

/// Display status label stored alongside the score.
///
/// Whoever writes the score also writes the label; it is never derived from the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComplianceStatus {
    Passing,
    Warning,
    Failing,
}

impl ComplianceStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ComplianceStatus::Passing => "Passing",
            ComplianceStatus::Warning => "Warning",
            ComplianceStatus::Failing => "Failing",
        }
    }
}

impl FromStr for ComplianceStatus {
    type Err = ComplianceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Exact labels only, ignoring ASCII case
        [
            ComplianceStatus::Passing,
            ComplianceStatus::Warning,
            ComplianceStatus::Failing,
        ]
        .into_iter()
        .find(|status| status.label().eq_ignore_ascii_case(s))
        .ok_or_else(|| {
            ComplianceError::validation(format!(
                "Unknown compliance status '{}'. Expected one of: Passing, Warning, Failing",
                s
            ))
        })
    }
}

impl std::fmt::Display for ComplianceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A compliance standard or benchmark tracked by the catalogue
#[derive(Debug, Clone, PartialEq)]
pub struct ComplianceItem {
    id: ItemId,
    name: String,
    score: Score,
    status: ComplianceStatus,
    description: Option<String>,
    last_scanned_at: Option<DateTime<Utc>>,
}

impl ComplianceItem {
    pub fn new(
        id: ItemId,
        name: impl Into<String>,
        score: Score,
        status: ComplianceStatus,
    ) -> ComplianceResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ComplianceError::validation(format!(
                "Item '{}' must have a non-empty name",
                id
            )));
        }
        if name.len() > MAX_IDENTIFIER_LENGTH {
            return Err(ComplianceError::validation(format!(
                "Name of item '{}' is too long ({} bytes). Maximum allowed: {} bytes",
                id,
                name.len(),
                MAX_IDENTIFIER_LENGTH
            )));
        }
        Ok(Self {
            id,
            name,
            score,
            status,
            description: None,
            last_scanned_at: None,
        })
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_last_scanned_at(mut self, at: DateTime<Utc>) -> Self {
        self.last_scanned_at = Some(at);
        self
    }

    pub fn id(&self) -> &ItemId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn status(&self) -> ComplianceStatus {
        self.status
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn last_scanned_at(&self) -> Option<DateTime<Utc>> {
        self.last_scanned_at
    }

    /// Severity derived from the current score on every read; never stored.
    pub fn severity_tier(&self) -> SeverityTier {
        StatusClassifier::classify(self.score.value())
    }

    /// Replaces the scan-owned fields in one step.
    pub(crate) fn apply_result(&mut self, score: Score, status: ComplianceStatus, at: DateTime<Utc>) {
        self.score = score;
        self.status = status;
        self.last_scanned_at = Some(at);
    }
}
