/// Formatter adapters for the report export formats
mod csv_formatter;
mod html_formatter;
mod json_formatter;

pub use csv_formatter::CsvFormatter;
pub use html_formatter::HtmlFormatter;
pub use json_formatter::JsonFormatter;
