//! Lint context for rule execution.
//!
//! The context is the append-only diagnostics sink rules report into. The
//! visitor sets the current rule and its effective severity before each
//! rule call, so rules only supply messages and positions.

use crate::diagnostic::{LintDiagnostic, Severity};
use crate::source::{MemberDecl, SourceSpan};
use vellum_carton::CompactString;

/// Lint context provides utilities for rules during execution.
pub struct LintContext<'a> {
    /// Source code being linted
    pub source: &'a str,
    /// Filename for diagnostics
    pub filename: &'a str,
    /// Collected diagnostics (pre-allocated capacity)
    diagnostics: Vec<LintDiagnostic>,
    /// Current rule name (set by visitor before calling rule methods)
    pub current_rule: &'static str,
    /// Severity configured for the current rule
    pub current_severity: Severity,
    /// Cached error count for fast access
    error_count: usize,
    /// Cached warning count for fast access
    warning_count: usize,
}

impl<'a> LintContext<'a> {
    /// Initial capacity for diagnostics vector
    const INITIAL_DIAGNOSTICS_CAPACITY: usize = 16;

    /// Create a new lint context
    #[inline]
    pub fn new(source: &'a str, filename: &'a str) -> Self {
        Self {
            source,
            filename,
            diagnostics: Vec::with_capacity(Self::INITIAL_DIAGNOSTICS_CAPACITY),
            current_rule: "",
            current_severity: Severity::Warning,
            error_count: 0,
            warning_count: 0,
        }
    }

    /// Report a lint diagnostic
    #[inline]
    pub fn report(&mut self, diagnostic: LintDiagnostic) {
        match diagnostic.severity {
            Severity::Error => self.error_count += 1,
            Severity::Warning => self.warning_count += 1,
        }
        self.diagnostics.push(diagnostic);
    }

    /// Build a diagnostic for the current rule at its configured severity
    #[inline]
    pub fn diagnostic(&self, message: impl Into<CompactString>, span: SourceSpan) -> LintDiagnostic {
        LintDiagnostic::new(
            self.current_rule,
            self.current_severity,
            message,
            span.start,
            span.end,
        )
    }

    /// Report at a single span
    #[inline]
    pub fn report_at(&mut self, message: impl Into<CompactString>, span: SourceSpan) {
        let diagnostic = self.diagnostic(message, span);
        self.report(diagnostic);
    }

    /// Report at a single span with help message
    #[inline]
    pub fn report_at_with_help(
        &mut self,
        message: impl Into<CompactString>,
        span: SourceSpan,
        help: impl Into<CompactString>,
    ) {
        let diagnostic = self.diagnostic(message, span).with_help(help);
        self.report(diagnostic);
    }

    /// Report one diagnostic covering a group of members.
    ///
    /// A single member is reported at its own span; several members are
    /// reported as one range from the first member's start to the last
    /// member's end. An empty group reports nothing.
    pub fn report_members_with_help(
        &mut self,
        message: impl Into<CompactString>,
        members: &[&MemberDecl],
        help: impl Into<CompactString>,
    ) {
        if let Some(span) = members_range(members) {
            self.report_at_with_help(message, span, help);
        }
    }

    /// Get collected diagnostics
    #[inline]
    pub fn into_diagnostics(self) -> Vec<LintDiagnostic> {
        self.diagnostics
    }

    /// Get reference to collected diagnostics
    #[inline]
    pub fn diagnostics(&self) -> &[LintDiagnostic] {
        &self.diagnostics
    }

    /// Get the error count (cached, O(1))
    #[inline]
    pub fn error_count(&self) -> usize {
        self.error_count
    }

    /// Get the warning count (cached, O(1))
    #[inline]
    pub fn warning_count(&self) -> usize {
        self.warning_count
    }
}

/// Span from the first member's start to the last member's end
#[inline]
fn members_range(members: &[&MemberDecl]) -> Option<SourceSpan> {
    match members {
        [] => None,
        [only] => Some(only.span),
        [first, .., last] => Some(SourceSpan::new(first.span.start, last.span.end)),
    }
}
