//! Configuration file loading for vellum.
//!
//! Reads `vellum.config.json` from the current working directory, or from
//! the path given with `--config`. Also provides the JSON Schema for editor
//! autocompletion.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use vellum_patina::{ConfigError, LintConfig};

/// Default configuration file name
pub const CONFIG_FILE_NAME: &str = "vellum.config.json";

/// Top-level vellum configuration.
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct VellumConfig {
    /// JSON Schema reference (for editor autocompletion).
    #[serde(rename = "$schema", default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Lint rule configuration. Empty means the recommended rules.
    #[serde(default)]
    pub lint: LintConfig,
}

/// Load the configuration.
///
/// With no explicit path, a missing `vellum.config.json` in the working
/// directory means defaults. A file that cannot be read or parsed is
/// reported as a warning and defaults are used instead.
pub fn load_config(path: Option<&Path>) -> VellumConfig {
    let config_path = match path {
        Some(path) => path.to_path_buf(),
        None => {
            let default_path = std::env::current_dir()
                .unwrap_or_default()
                .join(CONFIG_FILE_NAME);
            if !default_path.exists() {
                tracing::debug!("no {CONFIG_FILE_NAME} found, using defaults");
                return VellumConfig::default();
            }
            default_path
        }
    };

    match read_config(&config_path) {
        Ok(config) => {
            tracing::debug!(path = %config_path.display(), "loaded configuration");
            config
        }
        Err(err) => {
            tracing::warn!("{err}; using defaults");
            VellumConfig::default()
        }
    }
}

fn read_config(path: &Path) -> Result<VellumConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
        origin: path.display().to_string(),
        source,
    })
}

/// JSON Schema for `vellum.config.json`.
pub const VELLUM_CONFIG_SCHEMA: &str = r##"{
  "$schema": "http://json-schema.org/draft-07/schema#",
  "title": "Vellum Configuration",
  "description": "Configuration file for vellum - member order linter for Stencil components",
  "type": "object",
  "properties": {
    "$schema": {
      "type": "string",
      "description": "JSON Schema reference for editor autocompletion"
    },
    "lint": {
      "type": "object",
      "description": "Lint configuration",
      "properties": {
        "rules": {
          "type": "object",
          "description": "Rule settings by rule name",
          "properties": {
            "stencil/component-member-order": {
              "description": "Ensures that Component members are ordered consistently",
              "oneOf": [
                { "$ref": "#/definitions/level" },
                {
                  "type": "array",
                  "items": [
                    { "$ref": "#/definitions/level" },
                    { "$ref": "#/definitions/componentMemberOrderOptions" }
                  ],
                  "minItems": 2,
                  "maxItems": 2
                },
                {
                  "type": "object",
                  "properties": {
                    "level": { "$ref": "#/definitions/level" },
                    "options": { "$ref": "#/definitions/componentMemberOrderOptions" }
                  },
                  "required": ["level"],
                  "additionalProperties": false
                }
              ]
            }
          },
          "additionalProperties": false
        }
      },
      "additionalProperties": false
    }
  },
  "additionalProperties": false,
  "definitions": {
    "level": {
      "type": "string",
      "enum": ["off", "warn", "warning", "error"]
    },
    "role": {
      "type": "string",
      "enum": [
        "element",
        "event",
        "internal-prop",
        "lifecycle",
        "listen",
        "method",
        "own-method",
        "own-prop",
        "prop",
        "state",
        "stencil-method",
        "watch",
        "watched-prop",
        "watched-state"
      ]
    },
    "componentMemberOrderOptions": {
      "type": "object",
      "properties": {
        "order": {
          "description": "Expected order of member roles, or false to disable ordering",
          "oneOf": [
            {
              "type": "array",
              "items": { "$ref": "#/definitions/role" },
              "minItems": 2,
              "maxItems": 12
            },
            { "const": false }
          ]
        },
        "watch-follows-prop": {
          "type": "boolean",
          "description": "Require @Watch() methods directly above the Prop/State they watch"
        },
        "alphabetical": {
          "type": "boolean",
          "description": "Require members of the same role to be sorted by name"
        }
      },
      "additionalProperties": false
    }
  }
}"##;
