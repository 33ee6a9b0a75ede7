use crate::shared::Result;
use std::path::Path;

/// ReportViewer port for showing a finished report to the user
pub trait ReportViewer {
    /// Opens `path` in the platform's default viewer
    fn open(&self, path: &Path) -> Result<()>;
}
