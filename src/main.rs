use anyhow::Context;
use canvas_inventory::adapters::outbound::archive::ZipPackageUnpacker;
use canvas_inventory::adapters::outbound::console::{StderrProgressReporter, SystemReportViewer};
use canvas_inventory::adapters::outbound::filesystem::FileSystemPackageReader;
use canvas_inventory::adapters::outbound::platform_cli::PacCliClient;
use canvas_inventory::application::dto::{InventoryRequest, ReportFormat, WrittenReport};
use canvas_inventory::application::use_cases::{ExportReportsUseCase, InventoryAppsUseCase};
use canvas_inventory::cli::Args;
use canvas_inventory::config::{discover_config, load_config_from_path, Settings, UnpackerKind};
use canvas_inventory::ports::outbound::{PackageUnpacker, ReportViewer};
use canvas_inventory::shared::error::ExitCode;
use canvas_inventory::shared::Result;
use owo_colors::OwoColorize;
use std::path::Path;
use std::process;

fn main() {
    // clap exits with code 2 on invalid arguments
    let args = Args::parse_args();

    if let Err(e) = run(args) {
        eprintln!("\n{}\n", "❌ An error occurred:".red().bold());
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\n{} {}", "Caused by:".yellow(), err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

fn run(args: Args) -> Result<()> {
    let config = match &args.config {
        Some(path) => Some(load_config_from_path(path)?),
        None => discover_config(Path::new("."))?,
    };
    let settings = Settings::resolve(&args, config.as_ref())?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    let response = runtime.block_on(run_inventory(&settings))?;

    let export_use_case = ExportReportsUseCase::new(StderrProgressReporter::new());
    let written = export_use_case.execute(
        &response.report,
        &settings.output_dir,
        &settings.formats,
    )?;

    eprintln!(
        "\n📁 Reports written to {}",
        settings.output_dir.display().bold()
    );

    if settings.open_report {
        open_html_report(&written);
    }

    Ok(())
}

async fn run_inventory(
    settings: &Settings,
) -> Result<canvas_inventory::application::dto::InventoryResponse> {
    // Create adapters (Dependency Injection)
    let pac = PacCliClient::new(settings.tool_path.clone(), settings.command_timeout_secs);
    let unpacker: Box<dyn PackageUnpacker> = match settings.unpacker {
        UnpackerKind::Pac => Box::new(pac.clone()),
        UnpackerKind::Zip => Box::new(ZipPackageUnpacker::new()),
    };

    let use_case = InventoryAppsUseCase::new(
        pac.clone(),
        pac,
        unpacker,
        FileSystemPackageReader::new(),
        StderrProgressReporter::new(),
    );

    let request = InventoryRequest::new(settings.environment.clone(), settings.packages_dir())
        .with_skip_auth(settings.skip_auth);

    use_case.execute(request).await
}

/// A viewer failure only warns; the reports are already on disk
fn open_html_report(written: &[WrittenReport]) {
    let Some(html) = written.iter().find(|w| w.format == ReportFormat::Html) else {
        return;
    };

    if let Err(e) = SystemReportViewer::new().open(&html.path) {
        eprintln!(
            "{} Could not open the HTML report: {:#}",
            "⚠️  Warning:".yellow(),
            e
        );
    }
}
