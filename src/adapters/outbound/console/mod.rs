/// Console adapters for user-facing output
mod progress_reporter;
mod report_viewer;

pub use progress_reporter::StderrProgressReporter;
pub use report_viewer::SystemReportViewer;
