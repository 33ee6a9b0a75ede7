/// Mock implementations for testing
mod mock_app_enumerator;
mod mock_package_downloader;
mod mock_package_unpacker;
mod mock_progress_reporter;

pub use mock_app_enumerator::MockAppEnumerator;
pub use mock_package_downloader::MockPackageDownloader;
pub use mock_package_unpacker::MockPackageUnpacker;
pub use mock_progress_reporter::MockProgressReporter;
