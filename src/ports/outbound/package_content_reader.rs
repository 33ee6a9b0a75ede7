use crate::shared::Result;
use std::path::Path;

/// A text file read from an unpacked package
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Path relative to the unpack folder, with `/` separators
    pub relative_path: String,
    pub content: String,
}

/// The scan-relevant files of one unpacked package
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageContents {
    /// Content of `Connections/Connections.json`, if present
    pub connections_manifest: Option<String>,
    /// `DataSources/*.json`, sorted by file name
    pub data_sources: Vec<SourceFile>,
    /// Component-definition files found anywhere else in the package
    pub component_files: Vec<SourceFile>,
}

/// PackageContentReader port for reading an unpacked package folder
pub trait PackageContentReader {
    /// Collects the scan-relevant files below `unpack_dir`
    ///
    /// Missing sub-folders are not an error; they simply contribute nothing.
    ///
    /// # Errors
    /// Returns an error if `unpack_dir` is missing or a present file
    /// cannot be read
    fn read_contents(&self, unpack_dir: &Path) -> Result<PackageContents>;
}
