use serde::Serialize;

/// Three-level visual severity derived from a compliance score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum SeverityTier {
    Healthy,
    Warning,
    Critical,
}

impl SeverityTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            SeverityTier::Healthy => "Healthy",
            SeverityTier::Warning => "Warning",
            SeverityTier::Critical => "Critical",
        }
    }

    /// Icon used by the text renderers
    pub fn icon(&self) -> &'static str {
        match self {
            SeverityTier::Healthy => "✅",
            SeverityTier::Warning => "⚠️",
            SeverityTier::Critical => "❌",
        }
    }
}

impl std::fmt::Display for SeverityTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
