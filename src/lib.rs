//! canvas-inventory - dependency inventory for Power Apps canvas apps
//!
//! This library enumerates the canvas apps of an environment through the
//! Power Platform CLI, downloads and unpacks each app package, scans it for
//! table, connection and component-library references, and writes CSV, JSON
//! and HTML reports. It follows hexagonal architecture: the pipeline only
//! talks to the outside world through ports.
//!
//! # Architecture
//!
//! - **Domain Layer** (`inventory`): Records, descriptors and pure scanning logic
//! - **Application Layer** (`application`): Use cases, DTOs and factories
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Platform CLI, archive, filesystem and console
//! - **Shared** (`shared`): Error types, result alias and file-safety checks
//!
//! # Example
//!
//! ```no_run
//! use canvas_inventory::prelude::*;
//! use std::path::Path;
//!
//! # async fn run() -> Result<()> {
//! let pac = PacCliClient::new("pac", 600);
//! let use_case = InventoryAppsUseCase::new(
//!     pac.clone(),
//!     pac.clone(),
//!     pac,
//!     FileSystemPackageReader::new(),
//!     StderrProgressReporter::new(),
//! );
//!
//! let request = InventoryRequest::new("https://contoso.crm.dynamics.com", "out/packages");
//! let response = use_case.execute(request).await?;
//!
//! let written = ExportReportsUseCase::new(StderrProgressReporter::new()).execute(
//!     &response.report,
//!     Path::new("out"),
//!     &ReportFormat::all(),
//! )?;
//! println!("{} report(s) written", written.len());
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod inventory;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::archive::ZipPackageUnpacker;
    pub use crate::adapters::outbound::console::{StderrProgressReporter, SystemReportViewer};
    pub use crate::adapters::outbound::filesystem::{FileSystemPackageReader, FileSystemWriter};
    pub use crate::adapters::outbound::formatters::{CsvFormatter, HtmlFormatter, JsonFormatter};
    pub use crate::adapters::outbound::platform_cli::PacCliClient;
    pub use crate::application::dto::{
        InventoryRequest, InventoryResponse, ReportFormat, WrittenReport,
    };
    pub use crate::application::use_cases::{ExportReportsUseCase, InventoryAppsUseCase};
    pub use crate::inventory::domain::{
        AppDescriptor, AppId, ConnectionRef, DependencyRecord, InventoryMetadata,
        InventoryReport, TableRef,
    };
    pub use crate::inventory::services::{ArtifactNamer, PackageScanner};
    pub use crate::ports::outbound::{
        AppEnumerator, OutputPresenter, PackageContentReader, PackageContents, PackageDownloader,
        PackageUnpacker, ProgressReporter, ReportFormatter, ReportViewer, SourceFile,
    };
    pub use crate::shared::Result;
}
