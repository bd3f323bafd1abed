//! Output Rendering
//!
//! Renders the run summary. Logs go to stderr; this is the only stdout
//! output.

use crate::application::MarkReport;

/// Output format for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Nothing on stdout; the summary is already logged
    #[default]
    Quiet,
    /// One JSON object for scripting
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Quiet
        }
    }
}

/// Render `report` in `format`, or `None` when nothing should be printed.
pub fn render_report(
    report: &MarkReport,
    format: OutputFormat,
) -> serde_json::Result<Option<String>> {
    match format {
        OutputFormat::Quiet => Ok(None),
        OutputFormat::Json => serde_json::to_string(report).map(Some),
    }
}
