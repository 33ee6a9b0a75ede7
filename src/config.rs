//! Configuration file support for canvas-inventory.
//!
//! Provides YAML-based configuration through `canvas-inventory.config.yml`
//! files, and resolution of the effective run settings from command-line
//! options, the config file and built-in defaults (in that precedence).

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::application::dto::ReportFormat;
use crate::cli::Args;
use crate::shared::error::InventoryError;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "canvas-inventory.config.yml";

pub const DEFAULT_OUTPUT_DIR: &str = "./canvas-inventory-output";
pub const DEFAULT_TOOL_PATH: &str = "pac";
pub const DEFAULT_COMMAND_TIMEOUT_SECS: u64 = 600;

/// Sub-folder of the output folder that receives package files and their
/// unpacked sources
pub const PACKAGES_DIR: &str = "packages";

/// Which adapter expands downloaded package files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnpackerKind {
    /// `pac canvas unpack`, producing the source layout
    #[default]
    Pac,
    /// In-process zip extraction of the raw package
    Zip,
}

impl std::str::FromStr for UnpackerKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pac" => Ok(UnpackerKind::Pac),
            "zip" => Ok(UnpackerKind::Zip),
            _ => Err(format!(
                "Invalid unpacker: {}. Please specify 'pac' or 'zip'",
                s
            )),
        }
    }
}

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub environment_url: Option<String>,
    pub output_dir: Option<String>,
    pub tool_path: Option<String>,
    pub skip_auth: Option<bool>,
    pub unpacker: Option<String>,
    pub open_report: Option<bool>,
    pub command_timeout_secs: Option<u64>,
    pub formats: Option<Vec<String>>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = if content.trim().is_empty() {
        ConfigFile::default()
    } else {
        serde_yaml_ng::from_str(&content).with_context(|| {
            format!(
                "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
                path.display()
            )
        })?
    };

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

fn invalid(message: impl Into<String>) -> anyhow::Error {
    InventoryError::InvalidConfig {
        message: message.into(),
    }
    .into()
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(url) = &config.environment_url {
        if url.trim().is_empty() {
            return Err(invalid("environment_url must not be empty"));
        }
    }

    if let Some(unpacker) = &config.unpacker {
        unpacker.parse::<UnpackerKind>().map_err(invalid)?;
    }

    if let Some(formats) = &config.formats {
        if formats.is_empty() {
            return Err(invalid("formats must list at least one of csv, json, html"));
        }
        for (i, format) in formats.iter().enumerate() {
            format
                .parse::<ReportFormat>()
                .map_err(|e| invalid(format!("formats[{}]: {}", i, e)))?;
        }
    }

    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}

/// Effective settings of one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub environment: String,
    pub output_dir: PathBuf,
    pub tool_path: String,
    pub skip_auth: bool,
    pub unpacker: UnpackerKind,
    pub open_report: bool,
    pub command_timeout_secs: u64,
    pub formats: Vec<ReportFormat>,
}

impl Settings {
    /// Merges command-line options over the config file over defaults
    ///
    /// # Errors
    /// Returns `InvalidConfig` when no environment is given anywhere
    pub fn resolve(args: &Args, config: Option<&ConfigFile>) -> Result<Self> {
        let default_config = ConfigFile::default();
        let config = config.unwrap_or(&default_config);

        let environment = args
            .environment
            .clone()
            .or_else(|| config.environment_url.clone())
            .map(|e| e.trim().to_string())
            .filter(|e| !e.is_empty())
            .ok_or_else(|| {
                invalid(format!(
                    "No environment given. Pass --environment <URL> or set environment_url in {}",
                    CONFIG_FILENAME
                ))
            })?;

        let output_dir = args
            .output
            .clone()
            .or_else(|| config.output_dir.as_ref().map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));

        let tool_path = args
            .tool
            .clone()
            .or_else(|| config.tool_path.clone())
            .unwrap_or_else(|| DEFAULT_TOOL_PATH.to_string());

        let unpacker = match (args.unpacker, &config.unpacker) {
            (Some(kind), _) => kind,
            (None, Some(name)) => name.parse().map_err(invalid)?,
            (None, None) => UnpackerKind::default(),
        };

        let formats = if !args.formats.is_empty() {
            args.formats.clone()
        } else if let Some(names) = &config.formats {
            names
                .iter()
                .map(|n| n.parse::<ReportFormat>().map_err(invalid))
                .collect::<Result<Vec<_>>>()?
        } else {
            ReportFormat::all()
        };

        Ok(Self {
            environment,
            output_dir,
            tool_path,
            skip_auth: args.skip_auth || config.skip_auth.unwrap_or(false),
            unpacker,
            open_report: !args.no_open && config.open_report.unwrap_or(true),
            command_timeout_secs: args
                .timeout
                .or(config.command_timeout_secs)
                .unwrap_or(DEFAULT_COMMAND_TIMEOUT_SECS),
            formats: dedup_formats(formats),
        })
    }

    /// Folder receiving package files and unpacked sources
    pub fn packages_dir(&self) -> PathBuf {
        self.output_dir.join(PACKAGES_DIR)
    }
}

/// Drops repeated formats, keeping first occurrences in order
fn dedup_formats(formats: Vec<ReportFormat>) -> Vec<ReportFormat> {
    let mut unique = Vec::with_capacity(formats.len());
    for format in formats {
        if !unique.contains(&format) {
            unique.push(format);
        }
    }
    unique
}
