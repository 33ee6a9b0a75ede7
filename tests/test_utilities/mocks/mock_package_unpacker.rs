use async_trait::async_trait;
use canvas_inventory::prelude::*;
use std::collections::HashMap;
use std::path::Path;

/// Mock PackageUnpacker that lays out fixture files per app id
///
/// The app id is read from the package file written by
/// `MockPackageDownloader`.
#[derive(Clone, Default)]
pub struct MockPackageUnpacker {
    layouts: HashMap<String, Vec<(String, String)>>,
}

impl MockPackageUnpacker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, app_id: &str, relative_path: &str, content: &str) -> Self {
        self.layouts
            .entry(app_id.to_string())
            .or_default()
            .push((relative_path.to_string(), content.to_string()));
        self
    }
}

#[async_trait]
impl PackageUnpacker for MockPackageUnpacker {
    async fn unpack(&self, package_file: &Path, destination: &Path) -> Result<()> {
        let app_id = std::fs::read_to_string(package_file)?;
        std::fs::create_dir_all(destination)?;

        for (relative_path, content) in self.layouts.get(app_id.trim()).into_iter().flatten() {
            let path = destination.join(relative_path);
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, content)?;
        }
        Ok(())
    }
}
