/// Data Transfer Objects for application layer
///
/// DTOs carry data between the application layer and adapters,
/// keeping the domain layer isolated.
mod inventory_request;
mod inventory_response;
mod report_format;

pub use inventory_request::InventoryRequest;
pub use inventory_response::{InventoryResponse, WrittenReport};
pub use report_format::ReportFormat;
