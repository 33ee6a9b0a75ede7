use crate::ports::outbound::{PackageContentReader, PackageContents, SourceFile};
use crate::shared::error::InventoryError;
use crate::shared::security::safe_read_to_string;
use crate::shared::Result;
use serde_json::Value;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

const CONNECTIONS_DIR: &str = "Connections";
const CONNECTIONS_MANIFEST: &str = "Connections.json";
const DATA_SOURCES_DIR: &str = "DataSources";

/// Data-source list of a package that was extracted without source conversion
const PACKED_DATA_SOURCES: &str = "References/DataSources.json";

const COMPONENT_EXTENSIONS: [&str; 3] = ["json", "yaml", "yml"];

/// FileSystemPackageReader adapter for reading an unpacked package folder
///
/// Symbolic links are never followed. Every file read goes through the
/// shared size and regular-file checks.
pub struct FileSystemPackageReader;

impl FileSystemPackageReader {
    pub fn new() -> Self {
        Self
    }

    fn read_connections_manifest(&self, unpack_dir: &Path) -> Result<Option<String>> {
        let path = unpack_dir.join(CONNECTIONS_DIR).join(CONNECTIONS_MANIFEST);
        if !is_present(&path) {
            return Ok(None);
        }
        safe_read_to_string(&path, CONNECTIONS_MANIFEST).map(Some)
    }

    /// Reads `DataSources/*.json` in file-name order
    fn read_data_source_files(&self, unpack_dir: &Path) -> Result<Option<Vec<SourceFile>>> {
        let dir = unpack_dir.join(DATA_SOURCES_DIR);
        if !dir.is_dir() || fs::symlink_metadata(&dir)?.is_symlink() {
            return Ok(None);
        }

        let mut files = Vec::new();
        for entry in WalkDir::new(&dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = entry.map_err(|e| InventoryError::FileReadError {
                path: dir.clone(),
                details: e.to_string(),
            })?;
            if !entry.file_type().is_file() || !has_extension(entry.path(), &["json"]) {
                continue;
            }
            files.push(SourceFile {
                relative_path: relative_path(unpack_dir, entry.path()),
                content: safe_read_to_string(entry.path(), "data source file")?,
            });
        }

        Ok(Some(files))
    }

    /// Splits the packed `References/DataSources.json` list into one entry
    /// per data source
    fn read_packed_data_sources(&self, unpack_dir: &Path) -> Result<Vec<SourceFile>> {
        let path = unpack_dir.join(PACKED_DATA_SOURCES);
        if !is_present(&path) {
            return Ok(Vec::new());
        }

        let content = safe_read_to_string(&path, "DataSources.json")?;
        let value: Value =
            serde_json::from_str(&content).map_err(|e| InventoryError::FileReadError {
                path: path.clone(),
                details: format!("Invalid JSON: {}", e),
            })?;

        let entries = match value.get("DataSources") {
            Some(Value::Array(entries)) => entries.as_slice(),
            _ => &[][..],
        };

        entries
            .iter()
            .enumerate()
            .map(|(index, entry)| -> Result<SourceFile> {
                Ok(SourceFile {
                    relative_path: format!("{}#{}", PACKED_DATA_SOURCES, index),
                    content: serde_json::to_string(entry)?,
                })
            })
            .collect()
    }

    /// Collects component-definition candidates outside the manifest folders
    fn read_component_files(&self, unpack_dir: &Path) -> Result<Vec<SourceFile>> {
        let mut files = Vec::new();
        let walker = WalkDir::new(unpack_dir)
            .min_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| {
                !(e.depth() == 1
                    && e.file_type().is_dir()
                    && (e.file_name() == CONNECTIONS_DIR || e.file_name() == DATA_SOURCES_DIR))
            });

        for entry in walker {
            let entry = entry.map_err(|e| InventoryError::FileReadError {
                path: unpack_dir.to_path_buf(),
                details: e.to_string(),
            })?;
            if !entry.file_type().is_file()
                || !has_extension(entry.path(), &COMPONENT_EXTENSIONS)
            {
                continue;
            }
            files.push(SourceFile {
                relative_path: relative_path(unpack_dir, entry.path()),
                content: safe_read_to_string(entry.path(), "component definition")?,
            });
        }

        Ok(files)
    }
}

impl Default for FileSystemPackageReader {
    fn default() -> Self {
        Self::new()
    }
}

impl PackageContentReader for FileSystemPackageReader {
    fn read_contents(&self, unpack_dir: &Path) -> Result<PackageContents> {
        if !unpack_dir.is_dir() {
            return Err(InventoryError::FileReadError {
                path: unpack_dir.to_path_buf(),
                details: "Unpacked package folder does not exist".to_string(),
            }
            .into());
        }

        let connections_manifest = self.read_connections_manifest(unpack_dir)?;
        let data_sources = match self.read_data_source_files(unpack_dir)? {
            Some(files) => files,
            None => self.read_packed_data_sources(unpack_dir)?,
        };
        let component_files = self.read_component_files(unpack_dir)?;

        Ok(PackageContents {
            connections_manifest,
            data_sources,
            component_files,
        })
    }
}

/// Exists without following a final symlink; links are rejected later by
/// the read checks
fn is_present(path: &Path) -> bool {
    fs::symlink_metadata(path).is_ok()
}

fn has_extension(path: &Path, extensions: &[&str]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| extensions.iter().any(|x| e.eq_ignore_ascii_case(x)))
        .unwrap_or(false)
}

fn relative_path(base: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(base).unwrap_or(path);
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
