use super::command_runner::CommandRunner;
use crate::inventory::domain::{AppDescriptor, AppId};
use crate::ports::outbound::{AppEnumerator, PackageDownloader, PackageUnpacker};
use crate::shared::error::InventoryError;
use crate::shared::Result;
use async_trait::async_trait;
use serde_json::Value;
use std::ffi::OsStr;
use std::path::Path;

const ID_KEYS: [&str; 6] = ["appId", "AppId", "name", "Name", "id", "Id"];
const DISPLAY_NAME_KEYS: [&str; 3] = ["displayName", "DisplayName", "AppName"];
const ENVIRONMENT_KEYS: [&str; 3] = ["environmentName", "EnvironmentName", "environment"];
const CREATED_KEYS: [&str; 2] = ["createdTime", "CreatedTime"];
const MODIFIED_KEYS: [&str; 2] = ["lastModifiedTime", "LastModifiedTime"];
const OWNER_KEYS: [&str; 3] = ["owner", "Owner", "createdBy"];
const OWNER_EMAIL_KEYS: [&str; 4] = ["email", "Email", "userPrincipalName", "displayName"];

/// PacCliClient adapter for the Power Platform CLI
///
/// Implements enumeration, download and unpack by shelling out to `pac`.
/// Every command shares the runner's executable and deadline.
#[derive(Debug, Clone)]
pub struct PacCliClient {
    runner: CommandRunner,
}

impl PacCliClient {
    /// Creates a client
    ///
    /// # Arguments
    /// * `tool_path` - `pac` executable name or path
    /// * `timeout_secs` - Deadline per command; `0` waits indefinitely
    pub fn new(tool_path: impl Into<String>, timeout_secs: u64) -> Self {
        Self {
            runner: CommandRunner::new(tool_path, timeout_secs),
        }
    }

    /// Parses the JSON printed by `pac canvas list --json`
    ///
    /// Accepts a bare array or an object wrapping it in `value` or `apps`.
    /// Text before the JSON document (sign-in banners, update notices) is
    /// skipped. Entries that are not objects are ignored; absent fields
    /// stay `None`.
    pub fn parse_app_list(output: &str) -> Result<Vec<AppDescriptor>> {
        let value = Self::first_json_document(output)?;

        let items = match &value {
            Value::Array(items) => items,
            Value::Object(map) => match map.get("value").or_else(|| map.get("apps")) {
                Some(Value::Array(items)) => items,
                _ => {
                    return Err(InventoryError::EnumerationParseError {
                        details: "JSON object has no \"value\" or \"apps\" array".to_string(),
                    }
                    .into())
                }
            },
            _ => {
                return Err(InventoryError::EnumerationParseError {
                    details: "Expected a JSON array of apps".to_string(),
                }
                .into())
            }
        };

        Ok(items
            .iter()
            .filter(|item| item.is_object())
            .map(Self::descriptor_from_item)
            .collect())
    }

    fn first_json_document(output: &str) -> Result<Value> {
        let start = output
            .find(|c: char| c == '[' || c == '{')
            .ok_or_else(|| InventoryError::EnumerationParseError {
                details: "No JSON found in tool output".to_string(),
            })?;

        serde_json::Deserializer::from_str(&output[start..])
            .into_iter::<Value>()
            .next()
            .unwrap_or_else(|| Ok(Value::Null))
            .map_err(|e| {
                InventoryError::EnumerationParseError {
                    details: e.to_string(),
                }
                .into()
            })
    }

    fn descriptor_from_item(item: &Value) -> AppDescriptor {
        // Platform API shape nests most fields under "properties"
        let properties = item.get("properties").filter(|p| p.is_object());
        let field = |keys: &[&str]| {
            lookup_string(item, keys).or_else(|| properties.and_then(|p| lookup_string(p, keys)))
        };

        let owner = OWNER_KEYS
            .iter()
            .find_map(|key| item.get(*key).or_else(|| properties.and_then(|p| p.get(*key))))
            .and_then(|owner| match owner {
                Value::String(email) => Some(email.clone()),
                other => lookup_string(other, &OWNER_EMAIL_KEYS),
            });

        AppDescriptor {
            display_name: field(&DISPLAY_NAME_KEYS),
            app_id: lookup_string(item, &ID_KEYS),
            environment_name: field(&ENVIRONMENT_KEYS),
            created_time: field(&CREATED_KEYS),
            last_modified_time: field(&MODIFIED_KEYS),
            owner_email: owner,
        }
    }
}

/// First non-empty string (or number) value among `keys`
fn lookup_string(value: &Value, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| match value.get(*key)? {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

#[async_trait]
impl AppEnumerator for PacCliClient {
    async fn authenticate(&self, environment: &str) -> Result<()> {
        self.runner
            .run(["auth", "create", "--environment", environment])
            .await?;
        Ok(())
    }

    async fn list_apps(&self, environment: &str) -> Result<Vec<AppDescriptor>> {
        let output = self
            .runner
            .run(["canvas", "list", "--environment", environment, "--json"])
            .await?;
        Self::parse_app_list(&output)
    }
}

#[async_trait]
impl PackageDownloader for PacCliClient {
    async fn download(&self, environment: &str, app_id: &AppId, destination: &Path) -> Result<()> {
        let args: [&OsStr; 8] = [
            OsStr::new("canvas"),
            OsStr::new("download"),
            OsStr::new("--environment"),
            OsStr::new(environment),
            OsStr::new("--name"),
            OsStr::new(app_id.as_str()),
            OsStr::new("--file-name"),
            destination.as_os_str(),
        ];
        self.runner.run(args).await?;

        if !destination.is_file() {
            return Err(InventoryError::ToolFailed {
                command: format!("{} canvas download", self.runner.program()),
                details: format!("No package file was written to {}", destination.display()),
            }
            .into());
        }
        Ok(())
    }
}

#[async_trait]
impl PackageUnpacker for PacCliClient {
    async fn unpack(&self, package_file: &Path, destination: &Path) -> Result<()> {
        let args: [&OsStr; 6] = [
            OsStr::new("canvas"),
            OsStr::new("unpack"),
            OsStr::new("--msapp"),
            package_file.as_os_str(),
            OsStr::new("--sources"),
            destination.as_os_str(),
        ];
        self.runner.run(args).await?;

        if !destination.is_dir() {
            return Err(InventoryError::ToolFailed {
                command: format!("{} canvas unpack", self.runner.program()),
                details: format!("No source folder was created at {}", destination.display()),
            }
            .into());
        }
        Ok(())
    }
}
