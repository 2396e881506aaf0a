use crate::compliance::domain::{ComplianceItem, ComplianceStatus, ItemId, Score};
use crate::ports::outbound::CatalogueSource;
use crate::shared::security::{read_checked_file, MAX_INPUT_FILE_SIZE};
use crate::shared::Result;
use anyhow::Context;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// On-disk catalogue layout shared by every supported format
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogueFile {
    #[serde(default)]
    items: Vec<ItemRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ItemRecord {
    id: String,
    name: String,
    score: f64,
    status: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    last_scanned_at: Option<DateTime<Utc>>,
}

impl ItemRecord {
    fn into_item(self) -> Result<ComplianceItem> {
        let id = ItemId::new(self.id)?;
        let score = Score::new(self.score)?;
        let status: ComplianceStatus = self.status.parse()?;
        let mut item = ComplianceItem::new(id, self.name, score, status)?;
        if let Some(description) = self.description {
            item = item.with_description(description);
        }
        if let Some(at) = self.last_scanned_at {
            item = item.with_last_scanned_at(at);
        }
        Ok(item)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CatalogueFormat {
    Yaml,
    Json,
    Toml,
}

impl CatalogueFormat {
    fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match extension.as_deref() {
            Some("yml") | Some("yaml") => Ok(Self::Yaml),
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            _ => anyhow::bail!(
                "Unsupported catalogue file: {}\n\n💡 Hint: Use a .yml, .yaml, .json or .toml file.",
                path.display()
            ),
        }
    }
}

/// FileSystemCatalogueReader adapter for loading the seed catalogue from disk
///
/// This adapter implements the CatalogueSource port. The format is chosen by
/// file extension:
///
/// ```yaml
/// items:
///   - id: cis-1
///     name: CIS Benchmark
///     score: 92
///     status: Passing
///     description: Center for Internet Security hardening guide
/// ```
pub struct FileSystemCatalogueReader {
    path: PathBuf,
}

impl FileSystemCatalogueReader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parse(&self, content: &str, format: CatalogueFormat) -> Result<CatalogueFile> {
        let parsed = match format {
            CatalogueFormat::Yaml => serde_yaml_ng::from_str(content).map_err(anyhow::Error::from),
            CatalogueFormat::Json => serde_json::from_str(content).map_err(anyhow::Error::from),
            CatalogueFormat::Toml => toml::from_str(content).map_err(anyhow::Error::from),
        };
        parsed.with_context(|| format!("Failed to parse catalogue file: {}", self.path.display()))
    }
}

impl CatalogueSource for FileSystemCatalogueReader {
    fn load_items(&self) -> Result<Vec<ComplianceItem>> {
        let format = CatalogueFormat::from_path(&self.path)?;
        let content = read_checked_file(&self.path, "catalogue file", MAX_INPUT_FILE_SIZE)?;
        let file = self.parse(&content, format)?;

        let items = file
            .items
            .into_iter()
            .enumerate()
            .map(|(index, record)| {
                record.into_item().with_context(|| {
                    format!(
                        "Invalid catalogue entry items[{}] in {}",
                        index,
                        self.path.display()
                    )
                })
            })
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!(path = %self.path.display(), count = items.len(), "catalogue loaded");
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_yaml_catalogue() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "catalogue.yml",
            r#"
items:
  - id: cis-1
    name: CIS Benchmark
    score: 92
    status: Passing
    description: Center for Internet Security hardening guide
  - id: soc2
    name: SOC 2
    score: 78.5
    status: warning
    last_scanned_at: 2026-10-01T08:00:00Z
"#,
        );

        let items = FileSystemCatalogueReader::new(&path).load_items().unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id().as_str(), "cis-1");
        assert_eq!(items[0].score().value(), 92.0);
        assert_eq!(
            items[0].description(),
            Some("Center for Internet Security hardening guide")
        );
        assert_eq!(items[1].status(), ComplianceStatus::Warning);
        assert!(items[1].last_scanned_at().is_some());
    }

    #[test]
    fn test_load_catalogue_with_whitespace_id() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "catalogue.yml",
            r#"
items:
  - id: CIS 1.2
    name: CIS Benchmark 1.2
    score: 91
    status: Passing
"#,
        );

        let items = FileSystemCatalogueReader::new(&path).load_items().unwrap();

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id().as_str(), "CIS 1.2");
    }

    #[test]
    fn test_load_json_catalogue() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "catalogue.json",
            r#"{"items": [{"id": "pci", "name": "PCI DSS", "score": 55, "status": "Failing"}]}"#,
        );

        let items = FileSystemCatalogueReader::new(&path).load_items().unwrap();

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name(), "PCI DSS");
        assert_eq!(items[0].status(), ComplianceStatus::Failing);
    }

    #[test]
    fn test_load_toml_catalogue() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "catalogue.toml",
            r#"
[[items]]
id = "iso-27001"
name = "ISO 27001"
score = 88.0
status = "Passing"
"#,
        );

        let items = FileSystemCatalogueReader::new(&path).load_items().unwrap();

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id().as_str(), "iso-27001");
    }

    #[test]
    fn test_unsupported_extension() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "catalogue.csv", "id,name\n");
        let err = FileSystemCatalogueReader::new(&path)
            .load_items()
            .unwrap_err();
        assert!(err.to_string().contains("Unsupported catalogue file"));
    }

    #[test]
    fn test_invalid_entry_names_its_index() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "catalogue.yml",
            r#"
items:
  - id: cis-1
    name: CIS Benchmark
    score: 92
    status: Passing
  - id: soc2
    name: SOC 2
    score: 140
    status: Passing
"#,
        );

        let err = FileSystemCatalogueReader::new(&path)
            .load_items()
            .unwrap_err();

        assert!(err.to_string().contains("items[1]"));
        assert!(format!("{:#}", err).contains("Score must be between 0 and 100"));
    }

    #[test]
    fn test_unknown_field_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "catalogue.yml",
            "items:\n  - id: a\n    name: A\n    score: 1\n    status: Failing\n    owner: ops\n",
        );

        let err = FileSystemCatalogueReader::new(&path)
            .load_items()
            .unwrap_err();

        assert!(err.to_string().contains("Failed to parse catalogue file"));
    }

    #[test]
    fn test_missing_file() {
        let err = FileSystemCatalogueReader::new("/nonexistent/catalogue.yml")
            .load_items()
            .unwrap_err();
        assert!(err.to_string().contains("Failed to read catalogue file metadata"));
    }
}
