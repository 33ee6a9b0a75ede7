use crate::inventory::domain::InventoryReport;
use crate::shared::Result;

/// ReportFormatter port for serializing the aggregated inventory
///
/// Every implementation renders the complete report; partial output is
/// never produced.
pub trait ReportFormatter {
    /// Formats the report
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, report: &InventoryReport) -> Result<String>;
}
