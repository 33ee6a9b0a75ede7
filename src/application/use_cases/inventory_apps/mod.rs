use crate::application::dto::{InventoryRequest, InventoryResponse};
use crate::inventory::domain::{AppDescriptor, DependencyRecord, InventoryReport};
use crate::inventory::services::{
    ArtifactNamer, DependencyAggregator, InventoryMetadataGenerator, PackageScanner,
};
use crate::ports::outbound::{
    AppEnumerator, PackageContentReader, PackageDownloader, PackageUnpacker, ProgressReporter,
};
use crate::shared::Result;
use anyhow::Context;
use std::path::Path;

/// InventoryAppsUseCase - enumerate, extract and aggregate
///
/// This use case runs the inventory pipeline using generic dependency
/// injection for every infrastructure collaborator.
///
/// # Type Parameters
/// * `E` - AppEnumerator implementation
/// * `D` - PackageDownloader implementation
/// * `U` - PackageUnpacker implementation
/// * `R` - PackageContentReader implementation
/// * `PR` - ProgressReporter implementation
pub struct InventoryAppsUseCase<E, D, U, R, PR> {
    enumerator: E,
    downloader: D,
    unpacker: U,
    content_reader: R,
    progress_reporter: PR,
}

impl<E, D, U, R, PR> InventoryAppsUseCase<E, D, U, R, PR>
where
    E: AppEnumerator,
    D: PackageDownloader,
    U: PackageUnpacker,
    R: PackageContentReader,
    PR: ProgressReporter,
{
    /// Creates a new InventoryAppsUseCase with injected dependencies
    pub fn new(
        enumerator: E,
        downloader: D,
        unpacker: U,
        content_reader: R,
        progress_reporter: PR,
    ) -> Self {
        Self {
            enumerator,
            downloader,
            unpacker,
            content_reader,
            progress_reporter,
        }
    }

    /// Executes the inventory
    ///
    /// Authentication and enumeration failures abort the run. Every
    /// enumerated app yields exactly one record; an app whose extraction
    /// fails is kept with the failure text in `otherDependencies`.
    pub async fn execute(&self, request: InventoryRequest) -> Result<InventoryResponse> {
        let metadata = InventoryMetadataGenerator::generate(&request.environment);

        // Step 1: Sign in and enumerate
        let apps = self.enumerate_apps(&request).await?;

        // Step 2: Extract each app into its record
        let mut namer = ArtifactNamer::new(metadata.run_stamp());
        let records = self.extract_all(&request, &apps, &mut namer).await?;

        let report = InventoryReport::new(metadata, records);
        self.report_summary(&report);

        Ok(InventoryResponse::new(report))
    }

    async fn enumerate_apps(&self, request: &InventoryRequest) -> Result<Vec<AppDescriptor>> {
        if !request.skip_auth {
            self.progress_reporter.report(&format!(
                "🔑 Authenticating to environment: {}",
                request.environment
            ));
            self.enumerator
                .authenticate(&request.environment)
                .await
                .context("Authentication failed")?;
        }

        self.progress_reporter.report("📋 Listing canvas apps...");
        let apps = self
            .enumerator
            .list_apps(&request.environment)
            .await
            .context("Failed to list canvas apps")?;

        self.progress_reporter
            .report(&format!("✅ Found {} canvas app(s)", apps.len()));

        Ok(apps)
    }

    async fn extract_all(
        &self,
        request: &InventoryRequest,
        apps: &[AppDescriptor],
        namer: &mut ArtifactNamer,
    ) -> Result<Vec<DependencyRecord>> {
        let mut aggregator = DependencyAggregator::with_capacity(apps.len());
        if apps.is_empty() {
            return Ok(aggregator.into_records());
        }

        std::fs::create_dir_all(&request.work_dir).with_context(|| {
            format!(
                "Failed to create package folder: {}",
                request.work_dir.display()
            )
        })?;

        self.progress_reporter
            .report("🔍 Downloading and scanning app packages...");

        let total = apps.len();
        for (idx, app) in apps.iter().enumerate() {
            self.progress_reporter
                .report_progress(idx, total, Some(app.effective_name()));

            let record = DependencyRecord::from_descriptor(app, &request.environment);
            let outcome = self
                .extract_app(app, &record, &request.environment, &request.work_dir, namer)
                .await;
            let record = match outcome {
                Ok(populated) => populated,
                Err(e) => {
                    self.progress_reporter.report_error(&format!(
                        "⚠️  Warning: Failed to extract \"{}\": {:#}",
                        record.app_name(),
                        e
                    ));
                    let mut failed = record;
                    failed.record_failure(single_line_message(&e));
                    failed
                }
            };
            aggregator.add(record);
        }
        self.progress_reporter
            .report_progress(total, total, Some("done"));

        Ok(aggregator.into_records())
    }

    /// Downloads, unpacks and scans one app.
    ///
    /// References are collected on a copy of `record`, so a failure part
    /// way through leaves no partial lists behind.
    async fn extract_app(
        &self,
        app: &AppDescriptor,
        record: &DependencyRecord,
        environment: &str,
        work_dir: &Path,
        namer: &mut ArtifactNamer,
    ) -> Result<DependencyRecord> {
        let app_id = app.validated_id()?;
        let paths = namer.paths_for(work_dir, app.effective_name());

        self.downloader
            .download(environment, &app_id, &paths.package_file)
            .await
            .context("Download failed")?;

        self.unpacker
            .unpack(&paths.package_file, &paths.unpack_dir)
            .await
            .context("Unpack failed")?;

        let contents = self
            .content_reader
            .read_contents(&paths.unpack_dir)
            .context("Reading unpacked package failed")?;

        let mut populated = record.clone();
        PackageScanner::scan(&contents, &mut populated)?;
        Ok(populated)
    }

    fn report_summary(&self, report: &InventoryReport) {
        let failed = report.failed_count();
        self.progress_reporter.report_completion(&format!(
            "✅ Inventory complete: {} app(s), {} table reference(s), {} connection(s), {} failed",
            report.app_count(),
            report.total_tables(),
            report.total_connections(),
            failed
        ));
    }
}

/// Flattens an error chain into one line for report cells
///
/// Hint lines are dropped; each cause keeps its remaining lines.
fn single_line_message(error: &anyhow::Error) -> String {
    error
        .chain()
        .map(|cause| {
            cause
                .to_string()
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with("💡"))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .filter(|message| !message.is_empty())
        .collect::<Vec<_>>()
        .join(": ")
}

#[cfg(test)]
mod tests;
