/// Report formats produced at the end of a run
///
/// This enum belongs in the application layer because both the CLI
/// (inbound side) and the formatters (outbound adapters) need it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportFormat {
    /// Tabular export, one row per app
    Csv,
    /// Structured export with every nested list
    Json,
    /// Static HTML document
    Html,
}

/// Common prefix of every artifact file name
const ARTIFACT_PREFIX: &str = "CanvasApps_Dependencies";

impl ReportFormat {
    /// All formats, in the order they are written
    pub fn all() -> Vec<ReportFormat> {
        vec![ReportFormat::Csv, ReportFormat::Json, ReportFormat::Html]
    }

    /// Artifact file name for this format, suffixed with the run stamp
    pub fn file_name(&self, run_stamp: &str) -> String {
        match self {
            ReportFormat::Csv => format!("{}_{}.csv", ARTIFACT_PREFIX, run_stamp),
            ReportFormat::Json => format!("{}_Detailed_{}.json", ARTIFACT_PREFIX, run_stamp),
            ReportFormat::Html => format!("{}_Report_{}.html", ARTIFACT_PREFIX, run_stamp),
        }
    }
}

impl std::str::FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "csv" => Ok(ReportFormat::Csv),
            "json" => Ok(ReportFormat::Json),
            "html" | "htm" => Ok(ReportFormat::Html),
            _ => Err(format!(
                "Invalid format: {}. Please specify 'csv', 'json' or 'html'",
                s
            )),
        }
    }
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportFormat::Csv => write!(f, "csv"),
            ReportFormat::Json => write!(f, "json"),
            ReportFormat::Html => write!(f, "html"),
        }
    }
}
