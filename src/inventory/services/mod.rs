mod artifact_namer;
mod dependency_aggregator;
mod metadata_generator;
mod package_scanner;

pub use artifact_namer::{ArtifactNamer, ArtifactPaths};
pub use dependency_aggregator::DependencyAggregator;
pub use metadata_generator::InventoryMetadataGenerator;
pub use package_scanner::{PackageScanner, TABLE_SOURCE_TYPE};
