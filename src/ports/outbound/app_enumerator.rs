use crate::inventory::domain::AppDescriptor;
use crate::shared::Result;
use async_trait::async_trait;

/// AppEnumerator port for listing the apps of an environment
///
/// This port abstracts the external tool that signs in to the platform
/// and reports which canvas apps exist. A failure here is fatal to the run.
#[async_trait]
pub trait AppEnumerator: Send + Sync {
    /// Establishes an authenticated session for the environment
    ///
    /// # Arguments
    /// * `environment` - Environment locator (URL or environment id)
    async fn authenticate(&self, environment: &str) -> Result<()>;

    /// Lists the canvas apps of the environment
    ///
    /// # Returns
    /// App descriptors in the order reported by the tool
    ///
    /// # Errors
    /// Returns an error if:
    /// - The external tool cannot be started or exits unsuccessfully
    /// - The tool's output is not a recognizable app list
    async fn list_apps(&self, environment: &str) -> Result<Vec<AppDescriptor>>;
}
