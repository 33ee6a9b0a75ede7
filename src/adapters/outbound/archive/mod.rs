/// Archive adapters for in-process package extraction
mod zip_unpacker;

pub use zip_unpacker::{extract_archive, ZipPackageUnpacker};
