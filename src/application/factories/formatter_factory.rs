use crate::adapters::outbound::formatters::{CsvFormatter, HtmlFormatter, JsonFormatter};
use crate::application::dto::ReportFormat;
use crate::ports::outbound::ReportFormatter;

/// Factory for creating report formatters
///
/// This factory encapsulates the creation logic for the formatter
/// implementations. It belongs in the application layer as it selects
/// infrastructure adapters based on application needs.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified report format
    ///
    /// # Examples
    /// ```
    /// use canvas_inventory::application::dto::ReportFormat;
    /// use canvas_inventory::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(ReportFormat::Csv);
    /// ```
    pub fn create(format: ReportFormat) -> Box<dyn ReportFormatter> {
        match format {
            ReportFormat::Csv => Box::new(CsvFormatter::new()),
            ReportFormat::Json => Box::new(JsonFormatter::new()),
            ReportFormat::Html => Box::new(HtmlFormatter::new()),
        }
    }

    /// Returns the progress message for the specified report format
    ///
    /// # Examples
    /// ```
    /// use canvas_inventory::application::dto::ReportFormat;
    /// use canvas_inventory::application::factories::FormatterFactory;
    ///
    /// let message = FormatterFactory::progress_message(ReportFormat::Html);
    /// assert_eq!(message, "📝 Generating HTML report...");
    /// ```
    pub fn progress_message(format: ReportFormat) -> &'static str {
        match format {
            ReportFormat::Csv => "📝 Generating CSV export...",
            ReportFormat::Json => "📝 Generating detailed JSON export...",
            ReportFormat::Html => "📝 Generating HTML report...",
        }
    }
}
