use super::*;
use crate::inventory::domain::AppId;
use crate::ports::outbound::{PackageContents, SourceFile};
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

// Mock implementations for testing
#[derive(Default)]
struct MockEnumerator {
    apps: Vec<AppDescriptor>,
    fail_list: bool,
    auth_calls: Arc<Mutex<Vec<String>>>,
}

#[async_trait]
impl AppEnumerator for MockEnumerator {
    async fn authenticate(&self, environment: &str) -> Result<()> {
        self.auth_calls.lock().unwrap().push(environment.to_string());
        Ok(())
    }

    async fn list_apps(&self, _environment: &str) -> Result<Vec<AppDescriptor>> {
        if self.fail_list {
            anyhow::bail!("pac exited with status 1: not signed in");
        }
        Ok(self.apps.clone())
    }
}

#[derive(Default)]
struct MockDownloader {
    fail_for: HashSet<String>,
    destinations: Arc<Mutex<Vec<PathBuf>>>,
}

#[async_trait]
impl PackageDownloader for MockDownloader {
    async fn download(&self, _environment: &str, app_id: &AppId, destination: &Path) -> Result<()> {
        if self.fail_for.contains(app_id.as_str()) {
            anyhow::bail!("network unreachable while fetching {}", app_id);
        }
        self.destinations
            .lock()
            .unwrap()
            .push(destination.to_path_buf());
        Ok(())
    }
}

struct MockUnpacker;

struct TimedOutUnpacker;

#[async_trait]
impl PackageUnpacker for TimedOutUnpacker {
    async fn unpack(&self, _package_file: &Path, _destination: &Path) -> Result<()> {
        Err(crate::shared::error::InventoryError::ToolTimedOut {
            command: "pac canvas unpack".to_string(),
            seconds: 30,
        }
        .into())
    }
}

#[async_trait]
impl PackageUnpacker for MockUnpacker {
    async fn unpack(&self, _package_file: &Path, _destination: &Path) -> Result<()> {
        Ok(())
    }
}

/// Returns the contents registered for the unpack folder's name prefix
#[derive(Default)]
struct MockContentReader {
    by_prefix: HashMap<String, PackageContents>,
}

impl PackageContentReader for MockContentReader {
    fn read_contents(&self, unpack_dir: &Path) -> Result<PackageContents> {
        let dir_name = unpack_dir
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        Ok(self
            .by_prefix
            .iter()
            .find(|(prefix, _)| dir_name.starts_with(prefix.as_str()))
            .map(|(_, contents)| contents.clone())
            .unwrap_or_default())
    }
}

#[derive(Default, Clone)]
struct MockProgressReporter {
    messages: Arc<Mutex<Vec<String>>>,
}

impl ProgressReporter for MockProgressReporter {
    fn report(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
    fn report_progress(&self, _current: usize, _total: usize, _message: Option<&str>) {}
    fn report_error(&self, message: &str) {
        self.messages
            .lock()
            .unwrap()
            .push(format!("Error: {}", message));
    }
    fn report_completion(&self, message: &str) {
        self.messages
            .lock()
            .unwrap()
            .push(format!("Completed: {}", message));
    }
}

fn connections_manifest(count: usize) -> String {
    let entries: Vec<String> = (0..count)
        .map(|i| {
            format!(
                r#""conn-{i}": {{ "dataSources": ["Source{i}"], "displayName": "Connection {i}" }}"#
            )
        })
        .collect();
    format!("{{{}}}", entries.join(","))
}

fn table_file(name: &str) -> SourceFile {
    SourceFile {
        relative_path: format!("DataSources/{}.json", name),
        content: format!(
            r#"{{ "Name": "{name}", "Type": "NativeCDSDataSourceInfo", "TableName": "{lower}", "EntitySetName": "{lower}s" }}"#,
            lower = name.to_lowercase()
        ),
    }
}

fn contents(connections: usize, tables: &[&str]) -> PackageContents {
    PackageContents {
        connections_manifest: Some(connections_manifest(connections)),
        data_sources: tables.iter().map(|t| table_file(t)).collect(),
        component_files: vec![],
    }
}

fn apps() -> Vec<AppDescriptor> {
    vec![
        AppDescriptor::new("Expense Tracker", "app-1")
            .with_environment("Default-env")
            .with_owner("a@contoso.com"),
        AppDescriptor::new("Field Service", "app-2")
            .with_environment("Default-env")
            .with_owner("b@contoso.com"),
        AppDescriptor::new("Help Desk", "app-3")
            .with_environment("Default-env")
            .with_owner("c@contoso.com"),
    ]
}

fn request(temp_dir: &TempDir) -> InventoryRequest {
    InventoryRequest::new("https://org.crm.dynamics.com", temp_dir.path().join("packages"))
}

#[tokio::test]
async fn test_execute_populates_records() {
    let temp_dir = TempDir::new().unwrap();
    let mut reader = MockContentReader::default();
    reader
        .by_prefix
        .insert("Expense_Tracker".to_string(), contents(2, &["Accounts", "Contacts", "Leads"]));
    reader
        .by_prefix
        .insert("Field_Service".to_string(), contents(4, &[]));

    let use_case = InventoryAppsUseCase::new(
        MockEnumerator {
            apps: apps(),
            ..MockEnumerator::default()
        },
        MockDownloader::default(),
        MockUnpacker,
        reader,
        MockProgressReporter::default(),
    );

    let response = use_case.execute(request(&temp_dir)).await.unwrap();
    let records = &response.report.records;

    assert_eq!(records.len(), 3);
    assert_eq!(records[0].app_name(), "Expense Tracker");
    assert_eq!(records[0].connections().len(), 2);
    assert_eq!(records[0].tables().len(), 3);
    assert_eq!(records[0].tables()[1].table_name.as_deref(), Some("contact"));
    assert_eq!(records[1].connections().len(), 4);
    assert!(records[1].tables().is_empty());
    assert!(records[2].connections().is_empty());
    assert!(records.iter().all(|r| !r.has_failures()));
}

#[tokio::test]
async fn test_execute_connections_keep_manifest_order() {
    let temp_dir = TempDir::new().unwrap();
    let mut reader = MockContentReader::default();
    reader
        .by_prefix
        .insert("Expense_Tracker".to_string(), contents(5, &[]));

    let use_case = InventoryAppsUseCase::new(
        MockEnumerator {
            apps: apps(),
            ..MockEnumerator::default()
        },
        MockDownloader::default(),
        MockUnpacker,
        reader,
        MockProgressReporter::default(),
    );

    let response = use_case.execute(request(&temp_dir)).await.unwrap();
    let names: Vec<&str> = response.report.records[0]
        .connections()
        .iter()
        .map(|c| c.name.as_str())
        .collect();

    assert_eq!(names, vec!["conn-0", "conn-1", "conn-2", "conn-3", "conn-4"]);
}

#[tokio::test]
async fn test_execute_download_failure_keeps_record() {
    let temp_dir = TempDir::new().unwrap();
    let mut reader = MockContentReader::default();
    for prefix in ["Expense_Tracker", "Field_Service", "Help_Desk"] {
        reader.by_prefix.insert(prefix.to_string(), contents(1, &["Accounts"]));
    }
    let reporter = MockProgressReporter::default();

    let use_case = InventoryAppsUseCase::new(
        MockEnumerator {
            apps: apps(),
            ..MockEnumerator::default()
        },
        MockDownloader {
            fail_for: HashSet::from(["app-2".to_string()]),
            ..MockDownloader::default()
        },
        MockUnpacker,
        reader,
        reporter.clone(),
    );

    let response = use_case.execute(request(&temp_dir)).await.unwrap();
    let records = &response.report.records;

    assert_eq!(records.len(), 3);
    assert_eq!(records[1].app_name(), "Field Service");
    assert!(records[1].tables().is_empty());
    assert!(records[1].connections().is_empty());
    assert_eq!(records[1].other_dependencies().len(), 1);
    assert!(records[1].other_dependencies()[0].contains("Download failed"));
    assert!(records[1].other_dependencies()[0].contains("network unreachable"));

    assert_eq!(records[0].tables().len(), 1);
    assert_eq!(records[2].tables().len(), 1);
    assert!(!records[0].has_failures());
    assert!(!records[2].has_failures());

    let messages = reporter.messages.lock().unwrap();
    assert!(messages
        .iter()
        .any(|m| m.starts_with("Error:") && m.contains("Field Service")));
    assert!(messages.iter().any(|m| m.contains("1 failed")));
}

#[tokio::test]
async fn test_execute_scan_failure_leaves_no_partial_references() {
    let temp_dir = TempDir::new().unwrap();
    let mut broken = contents(3, &["Accounts"]);
    broken.data_sources.push(SourceFile {
        relative_path: "DataSources/Broken.json".to_string(),
        content: "{ truncated".to_string(),
    });
    let mut reader = MockContentReader::default();
    reader.by_prefix.insert("Help_Desk".to_string(), broken);

    let use_case = InventoryAppsUseCase::new(
        MockEnumerator {
            apps: apps(),
            ..MockEnumerator::default()
        },
        MockDownloader::default(),
        MockUnpacker,
        reader,
        MockProgressReporter::default(),
    );

    let response = use_case.execute(request(&temp_dir)).await.unwrap();
    let help_desk = &response.report.records[2];

    assert!(help_desk.connections().is_empty());
    assert!(help_desk.tables().is_empty());
    assert!(help_desk.other_dependencies()[0].contains("DataSources/Broken.json"));
}

#[tokio::test]
async fn test_execute_zero_apps() {
    let temp_dir = TempDir::new().unwrap();
    let req = request(&temp_dir);
    let work_dir = req.work_dir.clone();

    let use_case = InventoryAppsUseCase::new(
        MockEnumerator::default(),
        MockDownloader::default(),
        MockUnpacker,
        MockContentReader::default(),
        MockProgressReporter::default(),
    );

    let response = use_case.execute(req).await.unwrap();

    assert_eq!(response.report.app_count(), 0);
    assert_eq!(
        response.report.metadata.environment(),
        "https://org.crm.dynamics.com"
    );
    assert!(!work_dir.exists());
}

#[tokio::test]
async fn test_execute_enumeration_failure_is_fatal() {
    let temp_dir = TempDir::new().unwrap();
    let use_case = InventoryAppsUseCase::new(
        MockEnumerator {
            fail_list: true,
            ..MockEnumerator::default()
        },
        MockDownloader::default(),
        MockUnpacker,
        MockContentReader::default(),
        MockProgressReporter::default(),
    );

    let err = use_case.execute(request(&temp_dir)).await.unwrap_err();
    let message = format!("{:#}", err);
    assert!(message.contains("Failed to list canvas apps"));
    assert!(message.contains("not signed in"));
}

#[tokio::test]
async fn test_execute_skip_auth() {
    let temp_dir = TempDir::new().unwrap();
    let auth_calls = Arc::new(Mutex::new(Vec::new()));

    let use_case = InventoryAppsUseCase::new(
        MockEnumerator {
            auth_calls: auth_calls.clone(),
            ..MockEnumerator::default()
        },
        MockDownloader::default(),
        MockUnpacker,
        MockContentReader::default(),
        MockProgressReporter::default(),
    );
    use_case
        .execute(request(&temp_dir).with_skip_auth(true))
        .await
        .unwrap();
    assert!(auth_calls.lock().unwrap().is_empty());

    use_case.execute(request(&temp_dir)).await.unwrap();
    assert_eq!(
        auth_calls.lock().unwrap().as_slice(),
        &["https://org.crm.dynamics.com".to_string()]
    );
}

#[tokio::test]
async fn test_execute_missing_app_id_is_recorded() {
    let temp_dir = TempDir::new().unwrap();
    let nameless = AppDescriptor {
        display_name: Some("Orphan".to_string()),
        ..AppDescriptor::default()
    };

    let use_case = InventoryAppsUseCase::new(
        MockEnumerator {
            apps: vec![nameless],
            ..MockEnumerator::default()
        },
        MockDownloader::default(),
        MockUnpacker,
        MockContentReader::default(),
        MockProgressReporter::default(),
    );

    let response = use_case.execute(request(&temp_dir)).await.unwrap();
    let record = &response.report.records[0];

    assert_eq!(record.app_name(), "Orphan");
    assert_eq!(record.environment(), "https://org.crm.dynamics.com");
    assert!(record.other_dependencies()[0].contains("App id cannot be empty"));
}

#[tokio::test]
async fn test_execute_same_names_get_distinct_packages() {
    let temp_dir = TempDir::new().unwrap();
    let destinations = Arc::new(Mutex::new(Vec::new()));

    let use_case = InventoryAppsUseCase::new(
        MockEnumerator {
            apps: vec![
                AppDescriptor::new("Sales App", "app-1"),
                AppDescriptor::new("Sales-App", "app-2"),
            ],
            ..MockEnumerator::default()
        },
        MockDownloader {
            destinations: destinations.clone(),
            ..MockDownloader::default()
        },
        MockUnpacker,
        MockContentReader::default(),
        MockProgressReporter::default(),
    );

    let response = use_case.execute(request(&temp_dir)).await.unwrap();
    let run_stamp = response.report.metadata.run_stamp().to_string();
    let destinations = destinations.lock().unwrap();

    assert_eq!(destinations.len(), 2);
    assert_ne!(destinations[0], destinations[1]);
    assert!(destinations[0].ends_with(format!("Sales_App_{}.msapp", run_stamp)));
    assert!(destinations[1].ends_with(format!("Sales_App_{}_2.msapp", run_stamp)));
}

#[tokio::test]
async fn test_execute_failure_message_is_single_line() {
    let temp_dir = TempDir::new().unwrap();

    let use_case = InventoryAppsUseCase::new(
        MockEnumerator {
            apps: vec![AppDescriptor::new("Expense Tracker", "app-1")],
            ..MockEnumerator::default()
        },
        MockDownloader::default(),
        TimedOutUnpacker,
        MockContentReader::default(),
        MockProgressReporter::default(),
    );

    let response = use_case.execute(request(&temp_dir)).await.unwrap();
    let failure = &response.report.records[0].other_dependencies()[0];

    assert_eq!(
        failure,
        "Extraction failed: Unpack failed: External tool timed out after 30s: pac canvas unpack"
    );
    assert!(!failure.contains('\n'));
    assert!(!failure.contains("Hint"));
}

#[test]
fn test_single_line_message_keeps_details() {
    let error = anyhow::Error::new(crate::shared::error::InventoryError::ToolFailed {
        command: "pac canvas download".to_string(),
        details: "Error: not found (exit code 1)".to_string(),
    })
    .context("Download failed");

    assert_eq!(
        single_line_message(&error),
        "Download failed: External tool failed: pac canvas download Details: Error: not found (exit code 1)"
    );
}
