use crate::inventory::domain::{ConnectionRef, DependencyRecord, TableRef};
use crate::ports::outbound::PackageContents;
use crate::shared::Result;
use anyhow::Context;
use serde_json::{Map, Value};

/// Data-source type tag that marks a Dataverse table reference
pub const TABLE_SOURCE_TYPE: &str = "NativeCDSDataSourceInfo";

/// Textual markers of a component-library reference in a component definition
const COMPONENT_LIBRARY_MARKERS: [&str; 2] = ["ComponentLibrary", "LibraryUniqueId"];

/// PackageScanner - turns the files of an unpacked package into references
///
/// All methods are pure; reading the files is the job of a
/// `PackageContentReader` adapter.
pub struct PackageScanner;

impl PackageScanner {
    /// Appends every reference found in `contents` to `record`.
    ///
    /// Malformed manifests or data-source files fail the whole scan so the
    /// caller can record a single failure for the app.
    pub fn scan(contents: &PackageContents, record: &mut DependencyRecord) -> Result<()> {
        if let Some(manifest) = &contents.connections_manifest {
            for connection in Self::parse_connections(manifest)? {
                record.add_connection(connection);
            }
        }

        for file in &contents.data_sources {
            let table = Self::parse_table(&file.content)
                .with_context(|| format!("Invalid data source file {}", file.relative_path))?;
            if let Some(table) = table {
                record.add_table(table);
            }
        }

        for file in &contents.component_files {
            if Self::contains_component_library_marker(&file.content) {
                record.add_component_library(file.relative_path.clone());
            }
        }

        Ok(())
    }

    /// Parses a connections manifest into one `ConnectionRef` per entry, in
    /// manifest order.
    ///
    /// The manifest is either an object keyed by connection id or an array
    /// of entries carrying their own `id`.
    pub fn parse_connections(manifest: &str) -> Result<Vec<ConnectionRef>> {
        let value: Value =
            serde_json::from_str(manifest).context("Invalid connections manifest")?;

        match value {
            Value::Object(entries) => Ok(entries
                .iter()
                .map(|(id, entry)| Self::connection_from_entry(id.clone(), entry))
                .collect()),
            Value::Array(entries) => Ok(entries
                .iter()
                .enumerate()
                .map(|(index, entry)| {
                    let id = string_field(entry, &["id", "name"])
                        .unwrap_or_else(|| format!("connection-{}", index + 1));
                    Self::connection_from_entry(id, entry)
                })
                .collect()),
            Value::Null => Ok(Vec::new()),
            other => anyhow::bail!(
                "Invalid connections manifest: expected an object or array, found {}",
                json_kind(&other)
            ),
        }
    }

    fn connection_from_entry(id: String, entry: &Value) -> ConnectionRef {
        let connection_type = entry
            .get("dataSources")
            .and_then(Value::as_array)
            .and_then(|sources| sources.first())
            .and_then(|first| match first {
                Value::String(tag) => Some(tag.clone()),
                other => string_field(other, &["type", "name"]),
            });

        let display_name = string_field(entry, &["displayName"]).or_else(|| {
            entry
                .get("connectionRef")
                .and_then(|r| string_field(r, &["displayName"]))
        });

        ConnectionRef::new(id, connection_type, display_name)
    }

    /// Parses one data-source description file.
    ///
    /// Returns `Some` when the file declares a table reference. A file may
    /// hold a single object or an array of entries; an array counts as one
    /// table reference taken from its first table-typed entry.
    pub fn parse_table(content: &str) -> Result<Option<TableRef>> {
        let value: Value = serde_json::from_str(content)?;

        let entry = match &value {
            Value::Object(map) => Some(map).filter(|m| Self::is_table_entry(m)),
            Value::Array(items) => items
                .iter()
                .filter_map(Value::as_object)
                .find(|m| Self::is_table_entry(m)),
            _ => None,
        };

        Ok(entry.map(|map| {
            let entry = Value::Object(map.clone());
            TableRef {
                name: string_field(&entry, &["Name", "name"]),
                table_name: string_field(&entry, &["TableName", "LogicalName", "tableName"]),
                entity_set_name: string_field(&entry, &["EntitySetName", "entitySetName"]),
                source_type: string_field(&entry, &["Type", "type"]),
            }
        }))
    }

    fn is_table_entry(entry: &Map<String, Value>) -> bool {
        ["Type", "type"]
            .iter()
            .filter_map(|key| entry.get(*key).and_then(Value::as_str))
            .any(|t| t.eq_ignore_ascii_case(TABLE_SOURCE_TYPE))
    }

    /// Whether a component definition mentions a component library
    pub fn contains_component_library_marker(content: &str) -> bool {
        COMPONENT_LIBRARY_MARKERS
            .iter()
            .any(|marker| content.contains(marker))
    }
}

/// First non-empty string among `keys`
fn string_field(value: &Value, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|key| value.get(*key).and_then(Value::as_str))
        .find(|s| !s.is_empty())
        .map(String::from)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
