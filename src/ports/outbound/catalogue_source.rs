use crate::compliance::domain::ComplianceItem;
use crate::shared::Result;

/// CatalogueSource port for loading the seed catalogue
///
/// Stands in for whatever data-access capability owns compliance data.
/// Items are returned in display order; uniqueness is checked by the catalogue.
pub trait CatalogueSource {
    fn load_items(&self) -> Result<Vec<ComplianceItem>>;
}
