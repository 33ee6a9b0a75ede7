use crate::inventory::domain::{DependencyRecord, InventoryReport};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use anyhow::Context;

/// Column headers of the tabular export
const HEADER: [&str; 12] = [
    "App Name",
    "App ID",
    "Environment",
    "Created Time",
    "Last Modified Time",
    "Owner",
    "Tables Count",
    "Tables",
    "Connections Count",
    "Connections",
    "Component Libraries Count",
    "Other Dependencies",
];

/// Separator for name lists inside a single cell
const LIST_SEPARATOR: &str = "; ";

/// CsvFormatter adapter for the tabular export
///
/// One row per record; nested lists are flattened into a count column
/// and a joined name column.
pub struct CsvFormatter;

impl CsvFormatter {
    pub fn new() -> Self {
        Self
    }

    fn row(record: &DependencyRecord) -> Vec<String> {
        let tables: Vec<&str> = record.tables().iter().map(|t| t.label()).collect();
        let connections: Vec<&str> = record.connections().iter().map(|c| c.label()).collect();

        vec![
            record.app_name().to_string(),
            record.app_id().to_string(),
            record.environment().to_string(),
            record.created_time().to_string(),
            record.last_modified_time().to_string(),
            record.owner().to_string(),
            record.tables().len().to_string(),
            tables.join(LIST_SEPARATOR),
            record.connections().len().to_string(),
            connections.join(LIST_SEPARATOR),
            record.component_libraries().len().to_string(),
            record.other_dependencies().join(LIST_SEPARATOR),
        ]
    }
}

impl Default for CsvFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for CsvFormatter {
    fn format(&self, report: &InventoryReport) -> Result<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());

        writer
            .write_record(HEADER)
            .context("Failed to write CSV header")?;

        for record in &report.records {
            writer
                .write_record(Self::row(record))
                .with_context(|| format!("Failed to write CSV row for {}", record.app_name()))?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| anyhow::anyhow!("Failed to flush CSV output: {}", e))?;
        String::from_utf8(bytes).context("CSV output is not valid UTF-8")
    }
}
