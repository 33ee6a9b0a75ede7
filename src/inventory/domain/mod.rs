pub mod app_descriptor;
pub mod dependency_record;
pub mod inventory_metadata;
pub mod inventory_report;

pub use app_descriptor::{AppDescriptor, AppId};
pub use dependency_record::{ConnectionRef, DependencyRecord, TableRef};
pub use inventory_metadata::InventoryMetadata;
pub use inventory_report::InventoryReport;
