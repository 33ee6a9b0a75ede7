use crate::shared::error::InventoryError;
use crate::shared::Result;
use std::ffi::OsStr;
use std::io::ErrorKind;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;

/// Lines of tool output kept in a failure message
const MAX_DETAIL_LINES: usize = 5;

/// CommandRunner - runs one external executable with an optional deadline
///
/// The child is killed when the deadline passes. Standard input is closed
/// so an interactive prompt fails fast instead of waiting for input.
#[derive(Debug, Clone)]
pub struct CommandRunner {
    program: String,
    timeout: Option<Duration>,
}

impl CommandRunner {
    /// Creates a runner for `program`
    ///
    /// # Arguments
    /// * `program` - Executable name or path
    /// * `timeout_secs` - Per-command deadline in seconds; `0` disables it
    pub fn new(program: impl Into<String>, timeout_secs: u64) -> Self {
        Self {
            program: program.into(),
            timeout: (timeout_secs > 0).then(|| Duration::from_secs(timeout_secs)),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Runs the program with `args` and returns its standard output
    ///
    /// # Errors
    /// - `ToolNotFound` if the executable cannot be started
    /// - `ToolTimedOut` if the deadline passes
    /// - `ToolFailed` if the exit status is not success
    pub async fn run<I, S>(&self, args: I) -> Result<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let args: Vec<S> = args.into_iter().collect();
        let command_line = self.describe(&args);

        let mut command = Command::new(&self.program);
        command
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        let child = command.spawn().map_err(|e| -> anyhow::Error {
            if e.kind() == ErrorKind::NotFound {
                InventoryError::ToolNotFound {
                    tool: self.program.clone(),
                    details: e.to_string(),
                }
                .into()
            } else {
                InventoryError::ToolFailed {
                    command: command_line.clone(),
                    details: format!("Failed to start: {}", e),
                }
                .into()
            }
        })?;

        let output = match self.timeout {
            Some(limit) => tokio::time::timeout(limit, child.wait_with_output())
                .await
                .map_err(|_| InventoryError::ToolTimedOut {
                    command: command_line.clone(),
                    seconds: limit.as_secs(),
                })?,
            None => child.wait_with_output().await,
        }
        .map_err(|e| InventoryError::ToolFailed {
            command: command_line.clone(),
            details: e.to_string(),
        })?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(InventoryError::ToolFailed {
                command: command_line,
                details: failure_details(output.status.code(), &stderr, &stdout),
            }
            .into());
        }

        Ok(stdout)
    }

    fn describe<S: AsRef<OsStr>>(&self, args: &[S]) -> String {
        std::iter::once(self.program.clone())
            .chain(args.iter().map(|a| a.as_ref().to_string_lossy().into_owned()))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Summarizes a failed run: stderr first, then stdout, then the exit code
fn failure_details(code: Option<i32>, stderr: &str, stdout: &str) -> String {
    let text = if !stderr.trim().is_empty() {
        stderr
    } else {
        stdout
    };

    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .take(MAX_DETAIL_LINES)
        .collect();

    let status = match code {
        Some(code) => format!("exit code {}", code),
        None => "terminated by signal".to_string(),
    };

    if lines.is_empty() {
        status
    } else {
        format!("{} ({})", lines.join(" | "), status)
    }
}
