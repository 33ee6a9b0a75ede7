use crate::inventory::domain::DependencyRecord;

/// DependencyAggregator - ordered, append-only collection of records
///
/// Records are kept in the order they were added. Nothing is merged or
/// deduplicated, even when two apps share a name.
#[derive(Debug, Default)]
pub struct DependencyAggregator {
    records: Vec<DependencyRecord>,
}

impl DependencyAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: Vec::with_capacity(capacity),
        }
    }

    pub fn add(&mut self, record: DependencyRecord) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn into_records(self) -> Vec<DependencyRecord> {
        self.records
    }
}
