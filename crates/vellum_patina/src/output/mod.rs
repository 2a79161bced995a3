//! Output formatters for lint diagnostics.

mod text;

pub use text::*;

use serde::Serialize;
use vellum_carton::{FxHashMap, LineIndex};

use crate::diagnostic::Severity;
use crate::linter::LintResult;

/// Output format for lint results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Rich terminal output with code snippets
    #[default]
    Text,
    /// eslint-style JSON for tooling integration
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
#[serde(rename_all = "camelCase")]
pub struct JsonFileResult {
    pub file_path: String,
    pub messages: Vec<JsonMessage>,
    pub error_count: usize,
    pub warning_count: usize,
}

/// JSON output structure for a single message.
///
/// Lines and columns are 1-based; columns count bytes.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonMessage {
    pub rule_id: &'static str,
    /// 2 for errors, 1 for warnings
    pub severity: u8,
    pub message: String,
    pub line: u32,
    pub column: u32,
    pub end_line: u32,
    pub end_column: u32,
}

fn json_file_result(result: &LintResult, source: &str) -> JsonFileResult {
    let index = LineIndex::new(source);
    let messages = result
        .diagnostics
        .iter()
        .map(|d| {
            let (line, column) = index.line_col(d.start);
            let (end_line, end_column) = index.line_col(d.end);
            JsonMessage {
                rule_id: d.rule_name,
                severity: match d.severity {
                    Severity::Error => 2,
                    Severity::Warning => 1,
                },
                message: d.message.to_string(),
                line,
                column,
                end_line,
                end_column,
            }
        })
        .collect();

    JsonFileResult {
        file_path: result.filename.clone(),
        messages,
        error_count: result.error_count,
        warning_count: result.warning_count,
    }
}

/// Format results as JSON
fn format_json(results: &[LintResult], sources: &[(String, String)]) -> String {
    let source_map: FxHashMap<&str, &str> = sources
        .iter()
        .map(|(f, s)| (f.as_str(), s.as_str()))
        .collect();

    let json_results: Vec<JsonFileResult> = results
        .iter()
        .map(|r| {
            let source = source_map.get(r.filename.as_str()).copied().unwrap_or("");
            json_file_result(r, source)
        })
        .collect();

    serde_json::to_string_pretty(&json_results).unwrap_or_else(|_| "[]".to_string())
}
