/// Filesystem adapters for file I/O operations
mod file_writer;
mod package_reader;

pub use file_writer::FileSystemWriter;
pub use package_reader::FileSystemPackageReader;
