//! Main linter entry point.

use oxc_allocator::Allocator;

use crate::config::{ConfigError, LintConfig};
use crate::context::LintContext;
use crate::diagnostic::{LintDiagnostic, LintSummary};
use crate::rule::{Rule, RuleRegistry};
use crate::source::parse_source_with_allocator;
use crate::visitor::LintVisitor;

/// Lint result for a single file
#[derive(Debug, Clone)]
pub struct LintResult {
    /// Filename that was linted
    pub filename: String,
    /// Collected diagnostics
    pub diagnostics: Vec<LintDiagnostic>,
    /// Number of errors
    pub error_count: usize,
    /// Number of warnings
    pub warning_count: usize,
    /// Syntax errors reported by the parser
    pub parse_error_count: usize,
}

impl LintResult {
    /// Check if there are any errors
    #[inline]
    pub fn has_errors(&self) -> bool {
        self.error_count > 0
    }

    /// Check if there are any diagnostics
    #[inline]
    pub fn has_diagnostics(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

/// Main linter struct.
///
/// Parsing uses an OXC arena that [`Linter::lint_files`] reuses across
/// files.
pub struct Linter {
    registry: RuleRegistry,
}

impl Linter {
    /// Create a new linter with recommended rules
    #[inline]
    pub fn new() -> Self {
        Self {
            registry: RuleRegistry::with_recommended(),
        }
    }

    /// Create a linter with a custom rule registry
    #[inline]
    pub fn with_registry(registry: RuleRegistry) -> Self {
        Self { registry }
    }

    /// Create a linter from configuration.
    ///
    /// An empty configuration means the recommended rules.
    pub fn from_config(config: &LintConfig) -> Result<Self, ConfigError> {
        if config.is_empty() {
            return Ok(Self::new());
        }
        Ok(Self::with_registry(RuleRegistry::from_config(config)?))
    }

    /// Lint a TypeScript source
    #[inline]
    pub fn lint_source(&self, source: &str, filename: &str) -> LintResult {
        let allocator = Allocator::default();
        self.lint_source_with_allocator(&allocator, source, filename)
    }

    /// Lint a source with a provided allocator (for reuse)
    pub fn lint_source_with_allocator(
        &self,
        allocator: &Allocator,
        source: &str,
        filename: &str,
    ) -> LintResult {
        let parsed = parse_source_with_allocator(allocator, source, filename);
        tracing::debug!(
            filename,
            classes = parsed.class_count(),
            parse_errors = parsed.error_count,
            "linting file"
        );

        let mut ctx = LintContext::new(source, filename);
        LintVisitor::new(&mut ctx, self.registry.entries()).visit_classes(&parsed.classes);

        let error_count = ctx.error_count();
        let warning_count = ctx.warning_count();
        let diagnostics = ctx.into_diagnostics();

        LintResult {
            filename: filename.to_string(),
            diagnostics,
            error_count,
            warning_count,
            parse_error_count: parsed.error_count,
        }
    }

    /// Lint multiple files and aggregate results
    pub fn lint_files(&self, files: &[(String, String)]) -> (Vec<LintResult>, LintSummary) {
        let mut results = Vec::with_capacity(files.len());
        let mut summary = LintSummary::default();

        // Reuse the arena across files
        let mut allocator = Allocator::default();

        for (filename, source) in files {
            let result = self.lint_source_with_allocator(&allocator, source, filename);
            summary.error_count += result.error_count;
            summary.warning_count += result.warning_count;
            results.push(result);

            allocator.reset();
        }

        summary.file_count = files.len();
        (results, summary)
    }

    /// Iterate over the registered rules
    #[inline]
    pub fn rules(&self) -> impl Iterator<Item = &dyn Rule> {
        self.registry.entries().iter().map(|e| e.rule.as_ref())
    }
}

impl Default for Linter {
    fn default() -> Self {
        Self::new()
    }
}
