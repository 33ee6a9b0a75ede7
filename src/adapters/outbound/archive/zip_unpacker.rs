use crate::ports::outbound::PackageUnpacker;
use crate::shared::error::InventoryError;
use crate::shared::security::MAX_FILE_SIZE;
use crate::shared::Result;
use anyhow::Context;
use async_trait::async_trait;
use std::fs::{self, File};
use std::io;
use std::path::{Component, Path, PathBuf};

/// ZipPackageUnpacker adapter for in-process package extraction
///
/// A package file is a zip archive. This adapter expands it as-is, without
/// the source conversion the platform CLI performs, so data sources are
/// found in `References/DataSources.json` instead of `DataSources/`.
pub struct ZipPackageUnpacker;

impl ZipPackageUnpacker {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ZipPackageUnpacker {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PackageUnpacker for ZipPackageUnpacker {
    async fn unpack(&self, package_file: &Path, destination: &Path) -> Result<()> {
        let package_file = package_file.to_path_buf();
        let destination = destination.to_path_buf();
        tokio::task::spawn_blocking(move || extract_archive(&package_file, &destination))
            .await
            .context("Archive extraction task failed")?
            .map(|_| ())
    }
}

/// Extracts every entry of `archive_path` below `destination`
///
/// Entries whose path would land outside `destination` abort the
/// extraction with a `SecurityError`.
///
/// # Returns
/// Number of files written
pub fn extract_archive(archive_path: &Path, destination: &Path) -> Result<usize> {
    let file = File::open(archive_path).map_err(|e| InventoryError::FileReadError {
        path: archive_path.to_path_buf(),
        details: e.to_string(),
    })?;
    let mut archive = zip::ZipArchive::new(file)
        .with_context(|| format!("{} is not a valid package archive", archive_path.display()))?;

    fs::create_dir_all(destination).with_context(|| {
        format!("Failed to create unpack folder: {}", destination.display())
    })?;

    let mut written = 0;
    for index in 0..archive.len() {
        let mut entry = archive
            .by_index(index)
            .with_context(|| format!("Failed to read archive entry #{}", index))?;

        let name = entry.name().replace('\\', "/");
        let relative = match enclosed_path(&name) {
            Some(path) => path,
            None => {
                return Err(InventoryError::SecurityError {
                    path: destination.join(&name),
                    reason: "Archive entry escapes the destination folder".to_string(),
                    hint: "The package may be corrupt or malicious".to_string(),
                }
                .into())
            }
        };
        let out_path = destination.join(&relative);

        if entry.is_dir() || name.ends_with('/') {
            fs::create_dir_all(&out_path)?;
            continue;
        }

        if entry.size() > MAX_FILE_SIZE {
            anyhow::bail!(
                "Security: archive entry {} is too large ({} bytes)",
                relative.display(),
                entry.size()
            );
        }

        if let Some(parent) = out_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut out = File::create(&out_path).map_err(|e| InventoryError::FileWriteError {
            path: out_path.clone(),
            details: e.to_string(),
        })?;
        io::copy(&mut entry, &mut out)
            .with_context(|| format!("Failed to extract {}", relative.display()))?;
        written += 1;
    }

    Ok(written)
}

/// Resolves an entry name to a path that stays below the destination
///
/// Names are expected with `/` separators. Absolute paths, `..`
/// components and NUL bytes yield `None`.
fn enclosed_path(name: &str) -> Option<PathBuf> {
    if name.contains('\0') {
        return None;
    }
    let mut path = PathBuf::new();
    for component in Path::new(name).components() {
        match component {
            Component::Normal(part) => path.push(part),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => return None,
        }
    }
    if path.as_os_str().is_empty() {
        None
    } else {
        Some(path)
    }
}
