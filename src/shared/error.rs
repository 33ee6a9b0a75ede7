use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// Per-app extraction failures never change the exit code; they are
/// recorded in the report instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - all reports were written
    Success = 0,
    /// Application error (enumeration failure, report write failure, bad config, etc.)
    ApplicationError = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ApplicationError => write!(f, "Application Error (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
        }
    }
}

/// Application-specific errors for canvas app inventory.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// keeping a hint line on every user-facing message.
#[derive(Debug, Error)]
pub enum InventoryError {
    #[error("External tool not found: {tool}\nDetails: {details}\n\n💡 Hint: Install the Power Platform CLI or point --tool at the executable")]
    ToolNotFound { tool: String, details: String },

    #[error("External tool failed: {command}\nDetails: {details}")]
    ToolFailed { command: String, details: String },

    #[error("External tool timed out after {seconds}s: {command}\n\n💡 Hint: Increase --timeout or set it to 0 to wait indefinitely")]
    ToolTimedOut { command: String, seconds: u64 },

    #[error("Failed to parse app list from external tool\nDetails: {details}\n\n💡 Hint: Verify that the tool supports JSON output for the list command")]
    EnumerationParseError { details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },

    #[error("Invalid configuration: {message}\n\n💡 Hint: Check the command-line options and canvas-inventory.config.yml")]
    InvalidConfig { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::ApplicationError.as_i32(), 1);
        assert_eq!(ExitCode::InvalidArguments.as_i32(), 2);
    }

    #[test]
    fn test_exit_code_display() {
        assert_eq!(format!("{}", ExitCode::Success), "Success (0)");
        assert_eq!(
            format!("{}", ExitCode::ApplicationError),
            "Application Error (1)"
        );
        assert_eq!(
            format!("{}", ExitCode::InvalidArguments),
            "Invalid Arguments (2)"
        );
    }

    #[test]
    fn test_tool_not_found_display() {
        let error = InventoryError::ToolNotFound {
            tool: "pac".to_string(),
            details: "No such file or directory".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("External tool not found: pac"));
        assert!(display.contains("No such file or directory"));
        assert!(display.contains("💡 Hint:"));
    }

    #[test]
    fn test_tool_timed_out_display() {
        let error = InventoryError::ToolTimedOut {
            command: "pac canvas list".to_string(),
            seconds: 30,
        };
        let display = format!("{}", error);
        assert!(display.contains("timed out after 30s"));
        assert!(display.contains("pac canvas list"));
    }

    #[test]
    fn test_file_write_error_display() {
        let error = InventoryError::FileWriteError {
            path: PathBuf::from("/test/report.html"),
            details: "Permission denied".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to write to file"));
        assert!(display.contains("/test/report.html"));
        assert!(display.contains("Permission denied"));
        assert!(display.contains("💡 Hint:"));
    }

    #[test]
    fn test_security_error_display() {
        let error = InventoryError::SecurityError {
            path: PathBuf::from("/tmp/pkg/../../etc/passwd"),
            reason: "Archive entry escapes the destination folder".to_string(),
            hint: "The package may be corrupt or malicious".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Security violation"));
        assert!(display.contains("escapes the destination folder"));
        assert!(display.contains("corrupt or malicious"));
    }

    #[test]
    fn test_invalid_config_display() {
        let error = InventoryError::InvalidConfig {
            message: "environment_url must not be empty".to_string(),
        };
        assert!(error.to_string().contains("environment_url must not be empty"));
    }
}
