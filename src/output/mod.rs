//! Output formatters for lint diagnostics.

mod text;

pub use text::*;

use crate::linter::LintResult;
use serde::Serialize;

/// Output format for lint results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Rich terminal output with colors and code snippets
    #[default]
    Text,
    /// JSON output for tooling integration
    Json,
}

/// Format lint results according to the specified format
pub fn format_results(
    results: &[LintResult],
    sources: &[(String, String)],
    format: OutputFormat,
) -> String {
    match format {
        OutputFormat::Text => format_text(results, sources),
        OutputFormat::Json => format_json(results, sources),
    }
}

/// JSON output structure for a single file
#[derive(Debug, Serialize)]
pub struct JsonFileResult {
    pub file: String,
    pub messages: Vec<JsonMessage>,
    #[serde(rename = "errorCount")]
    pub error_count: usize,
    #[serde(rename = "warningCount")]
    pub warning_count: usize,
}

/// JSON output structure for a single message
#[derive(Debug, Serialize)]
pub struct JsonMessage {
    #[serde(rename = "ruleId")]
    pub rule_id: &'static str,
    #[serde(rename = "messageId")]
    pub message_id: &'static str,
    pub severity: u8,
    pub message: String,
    pub line: u32,
    pub column: u32,
    #[serde(rename = "endLine")]
    pub end_line: u32,
    #[serde(rename = "endColumn")]
    pub end_column: u32,
    pub fixable: bool,
}

/// 1-based line and column of a byte offset
fn line_column(source: &str, offset: u32) -> (u32, u32) {
    let offset = (offset as usize).min(source.len());
    let before = &source[..offset];
    let line = before.bytes().filter(|b| *b == b'\n').count() as u32 + 1;
    let column = match before.rfind('\n') {
        Some(nl) => (offset - nl) as u32,
        None => offset as u32 + 1,
    };
    (line, column)
}

/// Format results as JSON
fn format_json(results: &[LintResult], sources: &[(String, String)]) -> String {
    let json_results: Vec<JsonFileResult> = results
        .iter()
        .map(|r| {
            let source = sources
                .iter()
                .find(|(f, _)| f == &r.filename)
                .map(|(_, s)| s.as_str())
                .unwrap_or("");
            JsonFileResult {
                file: r.filename.clone(),
                messages: r
                    .diagnostics
                    .iter()
                    .map(|d| {
                        let (line, column) = line_column(source, d.start);
                        let (end_line, end_column) = line_column(source, d.end);
                        JsonMessage {
                            rule_id: d.rule_name,
                            message_id: d.message_id.as_str(),
                            severity: match d.severity {
                                crate::diagnostic::Severity::Error => 2,
                                crate::diagnostic::Severity::Warning => 1,
                            },
                            message: d.message.to_string(),
                            line,
                            column,
                            end_line,
                            end_column,
                            fixable: d.has_fix(),
                        }
                    })
                    .collect(),
                error_count: r.error_count,
                warning_count: r.warning_count,
            }
        })
        .collect();

    serde_json::to_string_pretty(&json_results).unwrap_or_else(|_| "[]".to_string())
}
