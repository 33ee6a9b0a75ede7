use crate::inventory::domain::InventoryMetadata;
use chrono::{DateTime, Local};
use uuid::Uuid;

/// Format of the run stamp appended to every artifact name
const RUN_STAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// InventoryMetadataGenerator service for run metadata
///
/// The run stamp is taken once per run so that every package, unpack folder
/// and report produced by the run shares the same suffix.
pub struct InventoryMetadataGenerator;

impl InventoryMetadataGenerator {
    /// Generates metadata for a run started now
    pub fn generate(environment: &str) -> InventoryMetadata {
        Self::generate_at(environment, Local::now())
    }

    /// Generates metadata for a run started at `started_at`
    pub fn generate_at(environment: &str, started_at: DateTime<Local>) -> InventoryMetadata {
        InventoryMetadata::new(
            environment.to_string(),
            started_at.to_rfc3339(),
            started_at.format(RUN_STAMP_FORMAT).to_string(),
            format!("urn:uuid:{}", Uuid::new_v4()),
            env!("CARGO_PKG_NAME").to_string(),
            env!("CARGO_PKG_VERSION").to_string(),
        )
    }
}
