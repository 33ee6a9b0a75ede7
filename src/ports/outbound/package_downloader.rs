use crate::inventory::domain::AppId;
use crate::shared::Result;
use async_trait::async_trait;
use std::path::Path;

/// PackageDownloader port for retrieving an app's package file
#[async_trait]
pub trait PackageDownloader: Send + Sync {
    /// Downloads the package of `app_id` to `destination`
    ///
    /// # Errors
    /// Returns an error if the download fails or produces no file
    async fn download(&self, environment: &str, app_id: &AppId, destination: &Path)
        -> Result<()>;
}
