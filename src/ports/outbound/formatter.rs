use crate::application::read_models::DashboardReadModel;
use crate::shared::Result;

/// DashboardFormatter port for rendering the compliance dashboard
///
/// Formatters map severity tiers to icons or colours and statuses to badge
/// text; the read model carries both values unformatted.
pub trait DashboardFormatter {
    /// Formats the dashboard read model
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, model: &DashboardReadModel) -> Result<String>;
}
