use crate::adapters::outbound::filesystem::FileSystemWriter;
use crate::application::dto::{ReportFormat, WrittenReport};
use crate::application::factories::FormatterFactory;
use crate::inventory::domain::InventoryReport;
use crate::ports::outbound::{OutputPresenter, ProgressReporter};
use crate::shared::Result;
use anyhow::Context;
use std::path::Path;

/// ExportReportsUseCase - writes the aggregated report in every requested format
///
/// Each format is rendered from the same final report, so the artifacts
/// always agree on app count and order. Any formatting or write failure
/// aborts the export.
pub struct ExportReportsUseCase<PR> {
    progress_reporter: PR,
}

impl<PR: ProgressReporter> ExportReportsUseCase<PR> {
    pub fn new(progress_reporter: PR) -> Self {
        Self { progress_reporter }
    }

    /// Writes `report` under `output_dir`, one file per format
    ///
    /// # Returns
    /// The written artifacts, in the order of `formats`
    pub fn execute(
        &self,
        report: &InventoryReport,
        output_dir: &Path,
        formats: &[ReportFormat],
    ) -> Result<Vec<WrittenReport>> {
        std::fs::create_dir_all(output_dir).with_context(|| {
            format!("Failed to create output folder: {}", output_dir.display())
        })?;

        let mut written = Vec::with_capacity(formats.len());
        for format in formats {
            self.progress_reporter
                .report(FormatterFactory::progress_message(*format));

            let content = FormatterFactory::create(*format)
                .format(report)
                .with_context(|| format!("Failed to generate {} report", format))?;

            let path = output_dir.join(format.file_name(report.metadata.run_stamp()));
            FileSystemWriter::new(path.clone()).present(&content)?;

            written.push(WrittenReport {
                format: *format,
                path,
            });
        }

        Ok(written)
    }
}
