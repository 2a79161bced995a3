//! # vellum_patina
//!
//! Patina - The quality checker for Vellum.
//! Linter for Stencil web components written in TypeScript.
//!
//! ## Name Origin
//!
//! **Patina** (/ˈpætɪnə/) is the layer that forms on copper and bronze over
//! time and shows how an object has been handled. `vellum_patina` looks at
//! how component classes have been put together and reports where they drift
//! from the conventions a project agreed on.
//!
//! ## Usage
//!
//! ```rust
//! use vellum_patina::{format_results, Linter, OutputFormat};
//!
//! let source = r#"
//! @Component({ tag: 'my-counter' })
//! export class MyCounter {
//!   render() { return null; }
//!   @Prop() count = 0;
//! }
//! "#;
//!
//! let result = Linter::new().lint_source(source, "my-counter.tsx");
//! assert_eq!(result.warning_count, 1);
//!
//! let sources = [("my-counter.tsx".to_string(), source.to_string())];
//! let output = format_results(&[result], &sources, OutputFormat::Json);
//! assert!(output.contains("stencil/component-member-order"));
//! ```
//!
//! ## Rules
//!
//! - `stencil/component-member-order` - Ensures that Component members are
//!   ordered consistently (grouping, canonical order, `@Watch()` placement,
//!   alphabetical names)

pub mod config;
mod context;
mod diagnostic;
mod linter;
pub mod output;
mod rule;
pub mod rules;
pub mod source;
mod visitor;

pub use config::{ConfigError, LintConfig, RuleLevel, RuleSetting};
pub use context::LintContext;
pub use diagnostic::{Label, LintDiagnostic, LintSummary, Severity};
pub use linter::{LintResult, Linter};
pub use output::{format_results, format_summary, OutputFormat};
pub use rule::{Rule, RuleCategory, RuleEntry, RuleMeta, RuleRegistry};
pub use rules::stencil::{ComponentMemberOrder, ComponentMemberOrderOptions, Role};

/// Lint a TypeScript source with default rules
///
/// This is a convenience function for simple use cases.
/// For more control, use `Linter::new()` directly.
pub fn lint(source: &str, filename: &str) -> LintResult {
    Linter::new().lint_source(source, filename)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lint_function() {
        let result = lint(
            "@Component({ tag: 'a-b' })\nclass AB {\n  @Method() async open() {}\n  @Prop() a: string;\n}",
            "a-b.tsx",
        );
        assert_eq!(result.warning_count, 1);
        assert!(!result.has_errors());
    }

    #[test]
    fn test_lint_ordered_component() {
        let result = lint(
            "@Component({ tag: 'a-b' })\nclass AB {\n  @Prop() a: string;\n  @Method() async open() {}\n}",
            "a-b.tsx",
        );
        assert!(!result.has_diagnostics());
    }
}
