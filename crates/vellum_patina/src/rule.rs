//! Rule trait and registry for lint rules.

use crate::config::{ConfigError, LintConfig};
use crate::context::LintContext;
use crate::diagnostic::Severity;
use crate::rules::stencil::ComponentMemberOrder;
use crate::source::ClassDecl;

/// Rule category for organization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleCategory {
    /// Code that is most likely wrong
    Correctness,
    /// Consistency and readability of component code
    Maintainability,
    /// Purely stylistic preferences
    Style,
}

/// Rule metadata
pub struct RuleMeta {
    /// Rule name (e.g., "stencil/component-member-order")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Rule category
    pub category: RuleCategory,
    /// Whether rule is auto-fixable
    pub fixable: bool,
    /// Default severity
    pub default_severity: Severity,
}

/// Rule trait for implementing lint rules
///
/// Rules implement visitor-like methods that are called during traversal.
/// Each method receives a mutable reference to LintContext for reporting diagnostics.
pub trait Rule: Send + Sync {
    /// Get rule metadata
    fn meta(&self) -> &'static RuleMeta;

    /// Called for every class declaration or expression, outer classes first
    #[allow(unused_variables)]
    fn check_class<'a>(&self, ctx: &mut LintContext<'a>, class: &ClassDecl) {}
}

/// A registered rule with the severity it reports at
pub struct RuleEntry {
    pub rule: Box<dyn Rule>,
    pub severity: Severity,
}

/// Registry holding all enabled lint rules
pub struct RuleRegistry {
    entries: Vec<RuleEntry>,
}

impl RuleRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Register a rule at its default severity
    pub fn register(&mut self, rule: Box<dyn Rule>) {
        let severity = rule.meta().default_severity;
        self.register_with_severity(rule, severity);
    }

    /// Register a rule at an explicit severity
    pub fn register_with_severity(&mut self, rule: Box<dyn Rule>, severity: Severity) {
        self.entries.push(RuleEntry { rule, severity });
    }

    /// Get all registered rules
    pub fn entries(&self) -> &[RuleEntry] {
        &self.entries
    }

    /// Check if a rule with `name` is registered
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|e| e.rule.meta().name == name)
    }

    /// Create registry with the recommended rule set
    ///
    /// `stencil/component-member-order` runs with the documented
    /// recommended member order.
    pub fn with_recommended() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(ComponentMemberOrder::recommended()));
        registry
    }

    /// Build a registry from configuration.
    ///
    /// Rules absent from the configuration are not registered. Unknown rule
    /// names and malformed rule options are errors.
    pub fn from_config(config: &LintConfig) -> Result<Self, ConfigError> {
        let mut registry = Self::new();

        for (name, setting) in config.rules.iter() {
            let Some(severity) = setting.severity() else {
                tracing::debug!(rule = %name, "rule disabled by configuration");
                continue;
            };

            let rule: Box<dyn Rule> = match name.as_str() {
                ComponentMemberOrder::NAME => Box::new(
                    ComponentMemberOrder::from_setting(setting).map_err(|source| {
                        ConfigError::InvalidOptions {
                            rule: name.clone(),
                            source,
                        }
                    })?,
                ),
                _ => return Err(ConfigError::UnknownRule(name.clone())),
            };

            registry.register_with_severity(rule, severity);
        }

        Ok(registry)
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::with_recommended()
    }
}
