//! Configuration types for a11y-check.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

use crate::types::{IssueKind, Severity};

/// Top-level configuration for a11y-check.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Preset to use ("full" or "essential").
    #[serde(default)]
    pub preset: Option<String>,

    /// Severity threshold for a failing exit status (default: "error").
    #[serde(default)]
    pub fail_on: Option<Severity>,

    /// Per-check configurations, keyed by check name.
    #[serde(default)]
    pub checks: HashMap<String, CheckConfig>,

    /// Per-issue-kind configurations, keyed by kind name.
    #[serde(default)]
    pub issues: HashMap<String, IssueConfig>,
}

impl Config {
    /// Creates a new default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid or names an unknown issue kind.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects `[issues.*]` tables for kinds that do not exist.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownIssueKind`] for the first unknown name.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut names: Vec<&String> = self.issues.keys().collect();
        names.sort();
        match names
            .into_iter()
            .find(|name| IssueKind::from_name(name).is_none())
        {
            Some(name) => Err(ConfigError::UnknownIssueKind { name: name.clone() }),
            None => Ok(()),
        }
    }

    /// Checks if a check is enabled.
    #[must_use]
    pub fn is_check_enabled(&self, check_name: &str) -> bool {
        self.checks
            .get(check_name)
            .map_or(true, |c| c.enabled.unwrap_or(true))
    }

    /// Options of one check, if configured.
    #[must_use]
    pub fn check_config(&self, check_name: &str) -> Option<&CheckConfig> {
        self.checks.get(check_name)
    }

    /// Explicit show/hide setting for an issue kind.
    #[must_use]
    pub fn issue_enabled(&self, kind: IssueKind) -> Option<bool> {
        self.issues.get(kind.name()).and_then(|c| c.enabled)
    }

    /// Severity override for an issue kind.
    #[must_use]
    pub fn issue_severity(&self, kind: IssueKind) -> Option<Severity> {
        self.issues.get(kind.name()).and_then(|c| c.severity)
    }

    /// Severity at or above which a run counts as failed.
    #[must_use]
    pub fn fail_on(&self) -> Severity {
        self.fail_on.unwrap_or(Severity::Error)
    }
}

/// Per-check configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CheckConfig {
    /// Whether this check runs at all.
    #[serde(default)]
    pub enabled: Option<bool>,

    /// Check-specific options as key-value pairs.
    #[serde(flatten)]
    pub options: HashMap<String, toml::Value>,
}

impl CheckConfig {
    /// Gets a boolean option with a default value.
    #[must_use]
    pub fn get_bool(&self, key: &str, default: bool) -> bool {
        self.options
            .get(key)
            .and_then(toml::Value::as_bool)
            .unwrap_or(default)
    }

    /// Gets an integer option with a default value.
    #[must_use]
    pub fn get_int(&self, key: &str, default: i64) -> i64 {
        self.options
            .get(key)
            .and_then(toml::Value::as_integer)
            .unwrap_or(default)
    }

    /// Gets a float option with a default value; integers are accepted too.
    #[must_use]
    pub fn get_float(&self, key: &str, default: f64) -> f64 {
        self.options
            .get(key)
            .and_then(|v| {
                #[allow(clippy::cast_precision_loss)]
                v.as_float().or_else(|| v.as_integer().map(|i| i as f64))
            })
            .unwrap_or(default)
    }

    /// Gets a string array option.
    #[must_use]
    pub fn get_str_array(&self, key: &str) -> Vec<String> {
        self.options
            .get(key)
            .and_then(|v| v.as_array())
            .map(|arr| {
                arr.iter()
                    .filter_map(|v| v.as_str().map(String::from))
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Per-issue-kind configuration.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct IssueConfig {
    /// Whether issues of this kind are shown; hidden issues are still recorded.
    #[serde(default)]
    pub enabled: Option<bool>,

    /// Severity override.
    #[serde(default)]
    pub severity: Option<Severity>,
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error reading config file.
    #[error("Failed to read config file {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Parse error in config file.
    #[error("Failed to parse config: {message}")]
    Parse {
        /// Parse error message.
        message: String,
    },

    /// An `[issues.*]` table names a kind that does not exist.
    #[error("Unknown issue kind `{name}`")]
    UnknownIssueKind {
        /// The unrecognized name.
        name: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.checks.is_empty());
        assert_eq!(config.fail_on(), Severity::Error);
        assert!(config.is_check_enabled("hyperlink"));
    }

    #[test]
    fn test_parse_config() {
        let toml = r#"
preset = "essential"
fail_on = "warning"

[checks.hyperlink]
enabled = true
short_text_length = 3

[checks.direct-formatting]
enabled = false

[issues.text-spaces]
enabled = false

[issues.heading-order]
severity = "error"
"#;

        let config = Config::parse(toml).expect("Failed to parse");
        assert_eq!(config.preset.as_deref(), Some("essential"));
        assert_eq!(config.fail_on(), Severity::Warning);
        assert!(config.is_check_enabled("hyperlink"));
        assert!(!config.is_check_enabled("direct-formatting"));

        let check = config.check_config("hyperlink").unwrap();
        assert_eq!(check.get_int("short_text_length", 5), 3);
        assert!((check.get_float("short_text_length", 0.0) - 3.0).abs() < f64::EPSILON);

        assert_eq!(config.issue_enabled(IssueKind::TextSpaces), Some(false));
        assert_eq!(config.issue_enabled(IssueKind::TextTabs), None);
        assert_eq!(
            config.issue_severity(IssueKind::HeadingOrder),
            Some(Severity::Error)
        );
    }

    #[test]
    fn test_unknown_issue_kind_is_rejected() {
        let err = Config::parse("[issues.text-space]\nenabled = false\n").unwrap_err();
        assert!(matches!(err, ConfigError::UnknownIssueKind { name } if name == "text-space"));
    }
}
