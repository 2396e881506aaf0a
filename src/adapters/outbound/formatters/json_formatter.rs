use crate::application::read_models::DashboardReadModel;
use crate::ports::outbound::DashboardFormatter;
use crate::shared::Result;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct Tool {
    name: &'static str,
    version: &'static str,
}

#[derive(Debug, Serialize)]
struct JsonDocument<'a> {
    tool: Tool,
    #[serde(flatten)]
    dashboard: &'a DashboardReadModel,
}

/// JsonFormatter adapter for machine-readable dashboard output
///
/// Emits the whole read model, including view mode and expansion flags, so a
/// front end can render the same dashboard the text formatter would.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardFormatter for JsonFormatter {
    fn format(&self, model: &DashboardReadModel) -> Result<String> {
        let document = JsonDocument {
            tool: Tool {
                name: env!("CARGO_PKG_NAME"),
                version: env!("CARGO_PKG_VERSION"),
            },
            dashboard: model,
        };
        let json = serde_json::to_string_pretty(&document)?;
        Ok(json)
    }
}
