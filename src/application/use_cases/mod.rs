/// Use cases module containing application business logic orchestration
mod export_reports;
mod inventory_apps;

pub use export_reports::ExportReportsUseCase;
pub use inventory_apps::InventoryAppsUseCase;
