//! Rich terminal output using oxc_diagnostics.

use std::sync::Arc;

use oxc_diagnostics::{GraphicalReportHandler, GraphicalTheme, NamedSource};
use vellum_carton::FxHashMap;

use crate::linter::LintResult;

/// Format lint results as rich terminal output.
///
/// Every diagnostic is rendered with its source snippet, followed by the
/// name of the rule that reported it.
pub fn format_text(results: &[LintResult], sources: &[(String, String)]) -> String {
    let handler = GraphicalReportHandler::new_themed(GraphicalTheme::unicode());
    let source_map: FxHashMap<&str, &str> = sources
        .iter()
        .map(|(f, s)| (f.as_str(), s.as_str()))
        .collect();

    let mut output = String::new();
    for result in results.iter().filter(|r| r.has_diagnostics()) {
        let source = source_map
            .get(result.filename.as_str())
            .copied()
            .unwrap_or("");
        let named_source = Arc::new(NamedSource::new(&result.filename, source.to_string()));

        for diagnostic in &result.diagnostics {
            let rule_name = diagnostic.rule_name;
            let report = diagnostic
                .clone()
                .into_oxc_diagnostic()
                .with_source_code(Arc::clone(&named_source));

            let mut buf = String::new();
            if handler.render_report(&mut buf, report.as_ref()).is_ok() {
                output.push_str(&buf);
                output.push_str("  rule: ");
                output.push_str(rule_name);
                output.push_str("\n\n");
            }
        }
    }

    output
}

fn plural(count: usize, word: &str) -> String {
    if count == 1 {
        format!("{count} {word}")
    } else {
        format!("{count} {word}s")
    }
}

/// Format a summary line
pub fn format_summary(error_count: usize, warning_count: usize, file_count: usize) -> String {
    let mut parts = Vec::with_capacity(2);
    if error_count > 0 {
        parts.push(plural(error_count, "error"));
    }
    if warning_count > 0 {
        parts.push(plural(warning_count, "warning"));
    }

    if parts.is_empty() {
        format!("No problems found in {}", plural(file_count, "file"))
    } else {
        format!("{} in {}", parts.join(", "), plural(file_count, "file"))
    }
}
