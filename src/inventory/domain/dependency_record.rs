use super::AppDescriptor;
use serde::{Deserialize, Serialize};

/// A data table referenced by an app
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableRef {
    pub name: Option<String>,
    pub table_name: Option<String>,
    pub entity_set_name: Option<String>,
    #[serde(rename = "type")]
    pub source_type: Option<String>,
}

impl TableRef {
    /// Label used in list-style report columns
    pub fn label(&self) -> &str {
        self.name
            .as_deref()
            .or(self.table_name.as_deref())
            .unwrap_or("")
    }
}

/// A connection declared in an app's connections manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionRef {
    pub name: String,
    #[serde(rename = "type")]
    pub connection_type: Option<String>,
    pub display_name: Option<String>,
}

impl ConnectionRef {
    pub fn new(
        name: impl Into<String>,
        connection_type: Option<String>,
        display_name: Option<String>,
    ) -> Self {
        Self {
            name: name.into(),
            connection_type,
            display_name,
        }
    }

    /// Display name when present, otherwise the manifest identifier
    pub fn label(&self) -> &str {
        self.display_name
            .as_deref()
            .filter(|d| !d.is_empty())
            .unwrap_or(&self.name)
    }
}

/// DependencyRecord - everything found for one enumerated app
///
/// Identity and metadata are fixed at creation. The reference lists are
/// append-only and only grow while the owning app is being extracted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DependencyRecord {
    app_name: String,
    app_id: String,
    environment: String,
    created_time: String,
    last_modified_time: String,
    owner: String,
    tables: Vec<TableRef>,
    connections: Vec<ConnectionRef>,
    flows: Vec<String>,
    custom_connectors: Vec<String>,
    component_libraries: Vec<String>,
    environment_variables: Vec<String>,
    other_dependencies: Vec<String>,
}

impl DependencyRecord {
    /// Creates an empty record from an enumerated app.
    ///
    /// Missing fields become empty strings, except the name (falls back to
    /// the app id) and the environment (falls back to `default_environment`).
    pub fn from_descriptor(app: &AppDescriptor, default_environment: &str) -> Self {
        let environment = app
            .environment_name
            .clone()
            .filter(|e| !e.is_empty())
            .unwrap_or_else(|| default_environment.to_string());

        Self {
            app_name: app.effective_name().to_string(),
            app_id: app.app_id.clone().unwrap_or_default(),
            environment,
            created_time: app.created_time.clone().unwrap_or_default(),
            last_modified_time: app.last_modified_time.clone().unwrap_or_default(),
            owner: app.owner_email.clone().unwrap_or_default(),
            tables: Vec::new(),
            connections: Vec::new(),
            flows: Vec::new(),
            custom_connectors: Vec::new(),
            component_libraries: Vec::new(),
            environment_variables: Vec::new(),
            other_dependencies: Vec::new(),
        }
    }

    pub fn add_table(&mut self, table: TableRef) {
        self.tables.push(table);
    }

    pub fn add_connection(&mut self, connection: ConnectionRef) {
        self.connections.push(connection);
    }

    pub fn add_component_library(&mut self, reference: impl Into<String>) {
        self.component_libraries.push(reference.into());
    }

    /// Records a whole-app extraction failure
    pub fn record_failure(&mut self, message: impl std::fmt::Display) {
        self.other_dependencies
            .push(format!("Extraction failed: {}", message));
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    pub fn app_id(&self) -> &str {
        &self.app_id
    }

    pub fn environment(&self) -> &str {
        &self.environment
    }

    pub fn created_time(&self) -> &str {
        &self.created_time
    }

    pub fn last_modified_time(&self) -> &str {
        &self.last_modified_time
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn tables(&self) -> &[TableRef] {
        &self.tables
    }

    pub fn connections(&self) -> &[ConnectionRef] {
        &self.connections
    }

    pub fn flows(&self) -> &[String] {
        &self.flows
    }

    pub fn custom_connectors(&self) -> &[String] {
        &self.custom_connectors
    }

    pub fn component_libraries(&self) -> &[String] {
        &self.component_libraries
    }

    pub fn environment_variables(&self) -> &[String] {
        &self.environment_variables
    }

    pub fn other_dependencies(&self) -> &[String] {
        &self.other_dependencies
    }

    pub fn has_failures(&self) -> bool {
        !self.other_dependencies.is_empty()
    }
}
