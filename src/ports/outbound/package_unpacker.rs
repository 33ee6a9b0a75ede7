use crate::shared::Result;
use async_trait::async_trait;
use std::path::Path;

/// PackageUnpacker port for expanding a package file into a folder
///
/// After a successful unpack, `destination` holds the known sub-folder
/// layout (`Connections/`, `DataSources/`, component definitions).
#[async_trait]
pub trait PackageUnpacker: Send + Sync {
    async fn unpack(&self, package_file: &Path, destination: &Path) -> Result<()>;
}

#[async_trait]
impl<T: PackageUnpacker + ?Sized> PackageUnpacker for Box<T> {
    async fn unpack(&self, package_file: &Path, destination: &Path) -> Result<()> {
        (**self).unpack(package_file, destination).await
    }
}
