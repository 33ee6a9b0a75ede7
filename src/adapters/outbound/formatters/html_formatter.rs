use crate::inventory::domain::{DependencyRecord, InventoryMetadata, InventoryReport};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

/// Inline stylesheet; the report is a single self-contained file
const STYLE: &str = r#"
    body { font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif; margin: 20px; background-color: #f5f5f5; color: #333; }
    h1 { color: #0078d4; border-bottom: 3px solid #0078d4; padding-bottom: 10px; }
    .summary { background-color: #fff; padding: 15px 20px; border-radius: 5px; margin-bottom: 20px; box-shadow: 0 2px 4px rgba(0,0,0,0.1); }
    .app-section { background-color: #fff; padding: 20px; margin-bottom: 20px; border-radius: 5px; box-shadow: 0 2px 4px rgba(0,0,0,0.1); }
    .app-section h2 { color: #0078d4; margin-top: 0; }
    .app-section.failed { border-left: 5px solid #d13438; }
    .meta { color: #666; font-size: 0.9em; }
    .meta td { padding: 2px 12px 2px 0; }
    .tag { display: inline-block; padding: 4px 10px; margin: 3px; border-radius: 12px; font-size: 0.85em; }
    .table-tag { background-color: #dff6dd; color: #107c10; }
    .connection-tag { background-color: #deecf9; color: #0078d4; }
    .library-tag { background-color: #fff4ce; color: #797673; }
    .none { color: #999; font-style: italic; }
    .error { color: #d13438; }
"#;

/// HtmlFormatter adapter for the document export
///
/// Renders a summary block followed by one section per app with
/// tag-styled table and connection lists.
pub struct HtmlFormatter;

impl HtmlFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes text for use in element content and attribute values
    fn escape_html(text: &str) -> String {
        let mut escaped = String::with_capacity(text.len());
        for c in text.chars() {
            match c {
                '&' => escaped.push_str("&amp;"),
                '<' => escaped.push_str("&lt;"),
                '>' => escaped.push_str("&gt;"),
                '"' => escaped.push_str("&quot;"),
                '\'' => escaped.push_str("&#39;"),
                _ => escaped.push(c),
            }
        }
        escaped
    }

    fn or_dash(value: &str) -> String {
        if value.is_empty() {
            "-".to_string()
        } else {
            Self::escape_html(value)
        }
    }
}

/// Helper methods for rendering sections
impl HtmlFormatter {
    fn render_head(&self, output: &mut String) {
        output.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        output.push_str("<meta charset=\"UTF-8\">\n");
        output.push_str("<title>Canvas Apps Dependency Report</title>\n");
        output.push_str("<style>");
        output.push_str(STYLE);
        output.push_str("</style>\n</head>\n<body>\n");
        output.push_str("<h1>Canvas Apps Dependency Report</h1>\n");
    }

    fn render_summary(&self, output: &mut String, report: &InventoryReport) {
        let metadata: &InventoryMetadata = &report.metadata;
        output.push_str("<div class=\"summary\">\n");
        output.push_str(&format!(
            "<p><strong>Total Apps:</strong> {}</p>\n",
            report.app_count()
        ));
        output.push_str(&format!(
            "<p><strong>Environment:</strong> {}</p>\n",
            Self::escape_html(metadata.environment())
        ));
        output.push_str(&format!(
            "<p><strong>Generated:</strong> {}</p>\n",
            Self::escape_html(metadata.generated_at())
        ));
        if report.failed_count() > 0 {
            output.push_str(&format!(
                "<p class=\"error\"><strong>Extraction failures:</strong> {}</p>\n",
                report.failed_count()
            ));
        }
        output.push_str("</div>\n");
    }

    fn render_tags<'a>(
        &self,
        output: &mut String,
        heading: &str,
        class: &str,
        labels: impl ExactSizeIterator<Item = &'a str>,
    ) {
        output.push_str(&format!("<h3>{} ({})</h3>\n<div>", heading, labels.len()));
        let mut empty = true;
        for label in labels {
            empty = false;
            output.push_str(&format!(
                "<span class=\"tag {}\">{}</span>",
                class,
                Self::escape_html(label)
            ));
        }
        if empty {
            output.push_str("<span class=\"none\">None</span>");
        }
        output.push_str("</div>\n");
    }

    fn render_app(&self, output: &mut String, record: &DependencyRecord) {
        let class = if record.has_failures() {
            "app-section failed"
        } else {
            "app-section"
        };
        output.push_str(&format!("<div class=\"{}\">\n", class));
        output.push_str(&format!(
            "<h2>{}</h2>\n",
            Self::or_dash(record.app_name())
        ));

        output.push_str("<table class=\"meta\">\n");
        for (label, value) in [
            ("App ID", record.app_id()),
            ("Environment", record.environment()),
            ("Owner", record.owner()),
            ("Created", record.created_time()),
            ("Last Modified", record.last_modified_time()),
        ] {
            output.push_str(&format!(
                "<tr><td><strong>{}</strong></td><td>{}</td></tr>\n",
                label,
                Self::or_dash(value)
            ));
        }
        output.push_str("</table>\n");

        self.render_tags(
            output,
            "Tables",
            "table-tag",
            record.tables().iter().map(|t| t.label()),
        );
        self.render_tags(
            output,
            "Connections",
            "connection-tag",
            record.connections().iter().map(|c| c.label()),
        );
        if !record.component_libraries().is_empty() {
            self.render_tags(
                output,
                "Component Library References",
                "library-tag",
                record.component_libraries().iter().map(String::as_str),
            );
        }

        for failure in record.other_dependencies() {
            output.push_str(&format!(
                "<p class=\"error\">{}</p>\n",
                Self::escape_html(failure)
            ));
        }

        output.push_str("</div>\n");
    }

    fn render_footer(&self, output: &mut String, metadata: &InventoryMetadata) {
        output.push_str(&format!(
            "<p class=\"meta\">Generated by {} {} ({})</p>\n",
            Self::escape_html(metadata.tool_name()),
            Self::escape_html(metadata.tool_version()),
            Self::escape_html(metadata.run_id())
        ));
        output.push_str("</body>\n</html>\n");
    }
}

impl Default for HtmlFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for HtmlFormatter {
    fn format(&self, report: &InventoryReport) -> Result<String> {
        let mut output = String::new();

        self.render_head(&mut output);
        self.render_summary(&mut output, report);
        for record in &report.records {
            self.render_app(&mut output, record);
        }
        self.render_footer(&mut output, &report.metadata);

        Ok(output)
    }
}
