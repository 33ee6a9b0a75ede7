/// InventoryMetadata value object describing one inventory run
#[derive(Debug, Clone)]
pub struct InventoryMetadata {
    environment: String,
    generated_at: String,
    run_stamp: String,
    run_id: String,
    tool_name: String,
    tool_version: String,
}

impl InventoryMetadata {
    pub fn new(
        environment: String,
        generated_at: String,
        run_stamp: String,
        run_id: String,
        tool_name: String,
        tool_version: String,
    ) -> Self {
        Self {
            environment,
            generated_at,
            run_stamp,
            run_id,
            tool_name,
            tool_version,
        }
    }

    /// Environment locator the inventory was taken from
    pub fn environment(&self) -> &str {
        &self.environment
    }

    /// RFC 3339 generation timestamp
    pub fn generated_at(&self) -> &str {
        &self.generated_at
    }

    /// Compact timestamp used as a file name suffix (`YYYYMMDD_HHMMSS`)
    pub fn run_stamp(&self) -> &str {
        &self.run_stamp
    }

    pub fn run_id(&self) -> &str {
        &self.run_id
    }

    pub fn tool_name(&self) -> &str {
        &self.tool_name
    }

    pub fn tool_version(&self) -> &str {
        &self.tool_version
    }
}
