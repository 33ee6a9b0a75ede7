use crate::application::dto::ReportFormat;
use crate::inventory::domain::InventoryReport;
use std::path::PathBuf;

/// InventoryResponse - output of the inventory use case
#[derive(Debug, Clone)]
pub struct InventoryResponse {
    pub report: InventoryReport,
}

impl InventoryResponse {
    pub fn new(report: InventoryReport) -> Self {
        Self { report }
    }
}

/// One report artifact written by the export use case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenReport {
    pub format: ReportFormat,
    pub path: PathBuf,
}
