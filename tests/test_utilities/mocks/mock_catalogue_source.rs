use compliance_scan::prelude::*;

/// Mock CatalogueSource for testing
pub struct MockCatalogueSource {
    pub items: Vec<ComplianceItem>,
    pub should_fail: bool,
}

impl MockCatalogueSource {
    pub fn new(items: Vec<ComplianceItem>) -> Self {
        Self {
            items,
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            items: Vec::new(),
            should_fail: true,
        }
    }
}

impl CatalogueSource for MockCatalogueSource {
    fn load_items(&self) -> Result<Vec<ComplianceItem>> {
        if self.should_fail {
            anyhow::bail!("Mock catalogue failure");
        }
        Ok(self.items.clone())
    }
}
