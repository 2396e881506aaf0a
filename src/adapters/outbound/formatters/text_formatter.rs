use crate::application::dto::ViewMode;
use crate::application::read_models::{ComplianceItemView, DashboardReadModel};
use crate::compliance::domain::SeverityTier;
use crate::ports::outbound::DashboardFormatter;
use crate::shared::Result;
use owo_colors::OwoColorize;

/// Column headers of the table view
const TABLE_COLUMNS: [&str; 5] = ["NAME", "ID", "SCORE", "STATUS", "SEVERITY"];

/// Marker appended to items with a scan in flight
const SCANNING_MARKER: &str = "🔄 scanning";

/// TextFormatter adapter for the human-readable dashboard
///
/// Renders cards or a table following the view mode. Expanded items add
/// their id, description and last scan time. Colour is optional so output
/// piped to a file stays plain.
pub struct TextFormatter {
    colored: bool,
}

impl TextFormatter {
    pub fn new(colored: bool) -> Self {
        Self { colored }
    }

    fn paint_tier(&self, tier: SeverityTier, text: &str) -> String {
        if !self.colored {
            return text.to_string();
        }
        match tier {
            SeverityTier::Healthy => text.green().to_string(),
            SeverityTier::Warning => text.yellow().to_string(),
            SeverityTier::Critical => text.red().to_string(),
        }
    }

    fn paint_bold(&self, text: &str) -> String {
        if self.colored {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn render_header(&self, model: &DashboardReadModel, output: &mut String) {
        let summary = &model.summary;
        output.push_str(&format!("{}\n", self.paint_bold("📋 Compliance Posture")));
        let average = summary
            .average_score
            .map(|score| format!("{:.1}", score))
            .unwrap_or_else(|| "-".to_string());
        output.push_str(&format!(
            "Items: {} | {} Healthy: {} | {} Warning: {} | {} Critical: {} | Average score: {}\n",
            summary.total,
            SeverityTier::Healthy.icon(),
            summary.healthy,
            SeverityTier::Warning.icon(),
            summary.warning,
            SeverityTier::Critical.icon(),
            summary.critical,
            average
        ));
        if model.scanning > 0 {
            output.push_str(&format!("Scans in progress: {}\n", model.scanning));
        }
        output.push('\n');
    }

    fn render_details(item: &ComplianceItemView, indent: &str, output: &mut String) {
        output.push_str(&format!("{}Id: {}\n", indent, item.id));
        if let Some(description) = &item.description {
            output.push_str(&format!("{}Description: {}\n", indent, description));
        }
        let last_scanned = item
            .last_scanned_at
            .map(|at| at.format("%Y-%m-%d %H:%M:%S UTC").to_string())
            .unwrap_or_else(|| "never".to_string());
        output.push_str(&format!("{}Last scanned: {}\n", indent, last_scanned));
    }

    fn render_cards(&self, model: &DashboardReadModel, output: &mut String) {
        for item in &model.items {
            let scanning = if item.is_scanning {
                format!("  {}", SCANNING_MARKER)
            } else {
                String::new()
            };
            output.push_str(&format!(
                "{} {} [{}]{}\n",
                item.severity_tier.icon(),
                self.paint_bold(&item.name),
                item.status,
                scanning
            ));
            output.push_str(&format!(
                "   Score: {} · {}\n",
                format_score(item.score),
                self.paint_tier(item.severity_tier, item.severity_tier.as_str())
            ));
            if item.is_expanded {
                Self::render_details(item, "   ", output);
            }
            output.push('\n');
        }
    }

    fn render_table(&self, model: &DashboardReadModel, output: &mut String) {
        let rows: Vec<[String; 5]> = model
            .items
            .iter()
            .map(|item| {
                [
                    item.name.clone(),
                    item.id.clone(),
                    format_score(item.score),
                    item.status.to_string(),
                    item.severity_tier.to_string(),
                ]
            })
            .collect();

        let mut widths = TABLE_COLUMNS.map(|column| column.chars().count());
        for row in &rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let header: Vec<String> = TABLE_COLUMNS
            .iter()
            .zip(widths)
            .map(|(column, width)| format!("{:<width$}", column, width = width))
            .collect();
        output.push_str(&format!("{}\n", self.paint_bold(header.join("  ").trim_end())));

        for (item, row) in model.items.iter().zip(&rows) {
            let mut cells: Vec<String> = row
                .iter()
                .zip(widths)
                .map(|(cell, width)| format!("{:<width$}", cell, width = width))
                .collect();
            // pad first so colour codes do not skew the column widths
            cells[4] = self.paint_tier(item.severity_tier, &cells[4]);
            let mut line = cells.join("  ");
            if item.is_scanning {
                line.push_str("  ");
                line.push_str(SCANNING_MARKER);
            }
            output.push_str(&format!("{}\n", line.trim_end()));
            if item.is_expanded {
                Self::render_details(item, "    ", output);
            }
        }
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new(false)
    }
}

impl DashboardFormatter for TextFormatter {
    fn format(&self, model: &DashboardReadModel) -> Result<String> {
        let mut output = String::new();
        self.render_header(model, &mut output);

        if model.items.is_empty() {
            output.push_str("No compliance items in the catalogue.\n");
            return Ok(output);
        }

        match model.view_mode {
            ViewMode::Cards => self.render_cards(model, &mut output),
            ViewMode::Table => self.render_table(model, &mut output),
        }
        Ok(output)
    }
}

fn format_score(score: f64) -> String {
    if score.fract() == 0.0 {
        format!("{:.0}", score)
    } else {
        format!("{:.1}", score)
    }
}
