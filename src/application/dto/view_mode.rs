use serde::{Deserialize, Serialize};

/// Layout of the compliance dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// One card per item (default)
    #[default]
    Cards,
    /// One row per item
    Table,
}

impl std::str::FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cards" | "card" => Ok(ViewMode::Cards),
            "table" => Ok(ViewMode::Table),
            _ => Err(format!(
                "Invalid view mode: {}. Please specify 'cards' or 'table'",
                s
            )),
        }
    }
}

impl std::fmt::Display for ViewMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViewMode::Cards => write!(f, "cards"),
            ViewMode::Table => write!(f, "table"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_view_mode_from_str() {
        assert_eq!(ViewMode::from_str("cards").unwrap(), ViewMode::Cards);
        assert_eq!(ViewMode::from_str("Card").unwrap(), ViewMode::Cards);
        assert_eq!(ViewMode::from_str("TABLE").unwrap(), ViewMode::Table);
    }

    #[test]
    fn test_view_mode_from_str_invalid() {
        let error = ViewMode::from_str("grid").unwrap_err();
        assert!(error.contains("Invalid view mode"));
        assert!(error.contains("grid"));
    }

    #[test]
    fn test_view_mode_default_and_display() {
        assert_eq!(ViewMode::default(), ViewMode::Cards);
        assert_eq!(ViewMode::Table.to_string(), "table");
    }
}
