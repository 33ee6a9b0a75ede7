use std::path::PathBuf;

/// InventoryRequest - input of the inventory use case
#[derive(Debug, Clone)]
pub struct InventoryRequest {
    /// Environment locator passed to the external tool
    pub environment: String,
    /// Folder receiving downloaded packages and their unpack folders
    pub work_dir: PathBuf,
    /// Skip the authentication step (an existing session is reused)
    pub skip_auth: bool,
}

impl InventoryRequest {
    pub fn new(environment: impl Into<String>, work_dir: impl Into<PathBuf>) -> Self {
        Self {
            environment: environment.into(),
            work_dir: work_dir.into(),
            skip_auth: false,
        }
    }

    pub fn with_skip_auth(mut self, skip_auth: bool) -> Self {
        self.skip_auth = skip_auth;
        self
    }
}
