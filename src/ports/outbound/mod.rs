/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (platform CLI, file system, console, etc.).
pub mod app_enumerator;
pub mod output_presenter;
pub mod package_content_reader;
pub mod package_downloader;
pub mod package_unpacker;
pub mod progress_reporter;
pub mod report_formatter;
pub mod report_viewer;

pub use app_enumerator::AppEnumerator;
pub use output_presenter::OutputPresenter;
pub use package_content_reader::{PackageContentReader, PackageContents, SourceFile};
pub use package_downloader::PackageDownloader;
pub use package_unpacker::PackageUnpacker;
pub use progress_reporter::ProgressReporter;
pub use report_formatter::ReportFormatter;
pub use report_viewer::ReportViewer;
