use crate::ports::outbound::ReportViewer;
use crate::shared::Result;
use anyhow::Context;
use std::path::Path;
use std::process::{Command, Stdio};

/// SystemReportViewer adapter that hands a file to the desktop's default
/// application
///
/// The viewer is started detached; its exit status is not awaited.
pub struct SystemReportViewer;

impl SystemReportViewer {
    pub fn new() -> Self {
        Self
    }

    fn open_command(path: &Path) -> Command {
        if cfg!(target_os = "windows") {
            let mut command = Command::new("cmd");
            command.args(["/C", "start", ""]).arg(path);
            command
        } else if cfg!(target_os = "macos") {
            let mut command = Command::new("open");
            command.arg(path);
            command
        } else {
            let mut command = Command::new("xdg-open");
            command.arg(path);
            command
        }
    }
}

impl Default for SystemReportViewer {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportViewer for SystemReportViewer {
    fn open(&self, path: &Path) -> Result<()> {
        if !path.is_file() {
            anyhow::bail!("Report not found: {}", path.display());
        }

        Self::open_command(path)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .with_context(|| format!("Failed to open {}", path.display()))?;
        Ok(())
    }
}
