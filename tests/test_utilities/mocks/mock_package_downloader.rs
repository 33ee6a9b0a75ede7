use async_trait::async_trait;
use canvas_inventory::prelude::*;
use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use zip::write::SimpleFileOptions;

/// Mock PackageDownloader
///
/// By default the package file holds the app id as plain text, which
/// `MockPackageUnpacker` reads back. Apps registered with `with_archive`
/// get a real zip package instead.
#[derive(Clone, Default)]
pub struct MockPackageDownloader {
    failing_ids: HashSet<String>,
    archives: HashMap<String, Vec<(String, String)>>,
}

impl MockPackageDownloader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_failure(mut self, app_id: &str) -> Self {
        self.failing_ids.insert(app_id.to_string());
        self
    }

    pub fn with_archive(mut self, app_id: &str, entries: &[(&str, &str)]) -> Self {
        self.archives.insert(
            app_id.to_string(),
            entries
                .iter()
                .map(|(name, content)| (name.to_string(), content.to_string()))
                .collect(),
        );
        self
    }
}

fn write_archive(path: &Path, entries: &[(String, String)]) -> Result<()> {
    let mut writer = zip::ZipWriter::new(File::create(path)?);
    for (name, content) in entries {
        writer.start_file(name.as_str(), SimpleFileOptions::default())?;
        writer.write_all(content.as_bytes())?;
    }
    writer.finish()?;
    Ok(())
}

#[async_trait]
impl PackageDownloader for MockPackageDownloader {
    async fn download(&self, _environment: &str, app_id: &AppId, destination: &Path) -> Result<()> {
        if self.failing_ids.contains(app_id.as_str()) {
            anyhow::bail!("Error: app {} could not be exported", app_id.as_str());
        }

        match self.archives.get(app_id.as_str()) {
            Some(entries) => write_archive(destination, entries),
            None => {
                std::fs::write(destination, app_id.as_str())?;
                Ok(())
            }
        }
    }
}
