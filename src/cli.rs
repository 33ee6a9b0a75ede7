use clap::Parser;
use std::path::PathBuf;

use crate::application::dto::ReportFormat;
use crate::config::UnpackerKind;

/// Inventory the canvas apps of a Power Platform environment and report
/// their data dependencies
#[derive(Parser, Debug)]
#[command(name = "canvas-inventory")]
#[command(version)]
#[command(
    about = "Inventory canvas apps and report their tables, connections and component libraries",
    long_about = None
)]
pub struct Args {
    /// Environment URL or id (required unless set in the config file)
    #[arg(short, long, value_name = "URL")]
    pub environment: Option<String>,

    /// Output folder for reports and downloaded packages
    /// [default: ./canvas-inventory-output]
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Config file (defaults to ./canvas-inventory.config.yml when present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Power Platform CLI executable [default: pac]
    #[arg(long, value_name = "PATH")]
    pub tool: Option<String>,

    /// Package unpacker: pac or zip [default: pac]
    #[arg(long, value_name = "KIND")]
    pub unpacker: Option<UnpackerKind>,

    /// Reuse the CLI's current sign-in instead of creating a new one
    #[arg(long)]
    pub skip_auth: bool,

    /// Do not open the HTML report when the run finishes
    #[arg(long)]
    pub no_open: bool,

    /// Deadline per external command in seconds, 0 to wait indefinitely
    /// [default: 600]
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Reports to write, comma separated: csv, json, html [default: all]
    #[arg(long, value_name = "FORMATS", value_delimiter = ',')]
    pub formats: Vec<ReportFormat>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
