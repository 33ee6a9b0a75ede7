use super::{DependencyRecord, InventoryMetadata};

/// The aggregated result of a run; the single input to every formatter
#[derive(Debug, Clone)]
pub struct InventoryReport {
    pub metadata: InventoryMetadata,
    pub records: Vec<DependencyRecord>,
}

impl InventoryReport {
    pub fn new(metadata: InventoryMetadata, records: Vec<DependencyRecord>) -> Self {
        Self { metadata, records }
    }

    pub fn app_count(&self) -> usize {
        self.records.len()
    }

    pub fn failed_count(&self) -> usize {
        self.records.iter().filter(|r| r.has_failures()).count()
    }

    pub fn total_tables(&self) -> usize {
        self.records.iter().map(|r| r.tables().len()).sum()
    }

    pub fn total_connections(&self) -> usize {
        self.records.iter().map(|r| r.connections().len()).sum()
    }
}
