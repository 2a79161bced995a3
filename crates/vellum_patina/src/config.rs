//! Lint configuration.
//!
//! Rules are configured by name, eslint style:
//!
//! ```json
//! {
//!   "rules": {
//!     "stencil/component-member-order": [
//!       "warn",
//!       { "order": ["own-prop", "prop", "state"], "alphabetical": true }
//!     ]
//!   }
//! }
//! ```
//!
//! A setting is a bare level (`"off"`, `"warn"`, `"error"`), a
//! `[level, options]` pair, or a `{ "level": ..., "options": ... }` object.
//! Option payloads stay untyped here; each rule deserializes its own.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::diagnostic::Severity;

/// Errors raised while loading or applying configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {origin}: {source}")]
    Parse {
        origin: String,
        source: serde_json::Error,
    },
    #[error("unknown rule `{0}`")]
    UnknownRule(String),
    #[error("invalid options for `{rule}`: {source}")]
    InvalidOptions {
        rule: String,
        source: serde_json::Error,
    },
}

/// Rule level as written in configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleLevel {
    Off,
    #[serde(alias = "warning")]
    Warn,
    Error,
}

impl RuleLevel {
    /// Severity diagnostics are reported at, `None` when the rule is off
    #[inline]
    pub fn severity(self) -> Option<Severity> {
        match self {
            Self::Off => None,
            Self::Warn => Some(Severity::Warning),
            Self::Error => Some(Severity::Error),
        }
    }
}

/// Configuration of a single rule
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum RuleSetting {
    /// `"warn"`
    Level(RuleLevel),
    /// `["warn", { ... }]`
    WithOptions(RuleLevel, Value),
    /// `{ "level": "warn", "options": { ... } }`
    Detailed {
        level: RuleLevel,
        #[serde(default)]
        options: Option<Value>,
    },
}

impl RuleSetting {
    #[inline]
    pub fn level(&self) -> RuleLevel {
        match self {
            Self::Level(level) | Self::WithOptions(level, _) | Self::Detailed { level, .. } => {
                *level
            }
        }
    }

    #[inline]
    pub fn severity(&self) -> Option<Severity> {
        self.level().severity()
    }

    /// Rule-specific options payload, if one was given
    #[inline]
    pub fn options(&self) -> Option<&Value> {
        match self {
            Self::Level(_) => None,
            Self::WithOptions(_, options) => Some(options),
            Self::Detailed { options, .. } => options.as_ref(),
        }
    }
}

/// Lint configuration: which rules run, at which level, with which options
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LintConfig {
    #[serde(default)]
    pub rules: BTreeMap<String, RuleSetting>,
}

impl LintConfig {
    /// Parse configuration from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|source| ConfigError::Parse {
            origin: "configuration".to_string(),
            source,
        })
    }

    /// Load configuration from a JSON file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            origin: path.display().to_string(),
            source,
        })
    }

    /// Whether no rule is configured
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
