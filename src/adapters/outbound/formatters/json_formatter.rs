use crate::inventory::domain::InventoryReport;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

/// JsonFormatter adapter for the structured export
///
/// Serializes the full record list, nested references included, as a
/// pretty-printed JSON array.
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

impl ReportFormatter for JsonFormatter {
    fn format(&self, report: &InventoryReport) -> Result<String> {
        serde_json::to_string_pretty(&report.records).map_err(Into::into)
    }
}
