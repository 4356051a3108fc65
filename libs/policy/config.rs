//! Sectioned key/value configuration
//!
//! The engine is configured through named sections of string key/value
//! pairs: a `PredictorRegistry` section lists the active predictor names,
//! and each predictor has its own section with its class and parameters.
//! Sections can be built programmatically or parsed from a minimal INI-like
//! text (`[Section]` headers, `key = value` lines, `#`/`;` comments).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Error types for configuration access and parsing
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A referenced section does not exist
    MissingSection(String),

    /// A referenced key does not exist in its section
    MissingKey { section: String, key: String },

    /// A value could not be interpreted as the requested type
    InvalidValue {
        section: String,
        key: String,
        value: String,
        expected: &'static str,
    },

    /// A line of configuration text could not be parsed
    Parse { line: usize, content: String },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::MissingSection(section) => {
                write!(f, "Missing configuration section [{}]", section)
            }
            ConfigError::MissingKey { section, key } => {
                write!(f, "Missing key \"{}\" in section [{}]", key, section)
            }
            ConfigError::InvalidValue {
                section,
                key,
                value,
                expected,
            } => {
                write!(
                    f,
                    "Invalid value \"{}\" for [{}] {} (expected {})",
                    value, section, key, expected
                )
            }
            ConfigError::Parse { line, content } => {
                write!(f, "Cannot parse configuration line {}: \"{}\"", line, content)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Ordered map of configuration sections
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    sections: BTreeMap<String, BTreeMap<String, String>>,
}

impl Config {
    /// Create an empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a key in a section, creating the section if needed
    pub fn set(
        &mut self,
        section: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) {
        self.sections
            .entry(section.into())
            .or_default()
            .insert(key.into(), value.into());
    }

    /// Parse configuration from INI-like text
    pub fn from_ini_str(text: &str) -> Result<Self, ConfigError> {
        let mut config = Self::new();
        let mut current_section: Option<String> = None;

        for (index, raw_line) in text.lines().enumerate() {
            let line = raw_line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
                continue;
            }

            if let Some(name) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
                current_section = Some(name.trim().to_string());
                config.sections.entry(name.trim().to_string()).or_default();
                continue;
            }

            let Some((key, value)) = line.split_once('=') else {
                return Err(ConfigError::Parse {
                    line: index + 1,
                    content: raw_line.to_string(),
                });
            };
            let Some(section) = &current_section else {
                return Err(ConfigError::Parse {
                    line: index + 1,
                    content: raw_line.to_string(),
                });
            };
            config.set(section.clone(), key.trim(), value.trim());
        }

        Ok(config)
    }

    /// Whether a section exists
    pub fn has_section(&self, section: &str) -> bool {
        self.sections.contains_key(section)
    }

    /// Get a raw string value
    pub fn get(&self, section: &str, key: &str) -> Result<&str, ConfigError> {
        let values = self
            .sections
            .get(section)
            .ok_or_else(|| ConfigError::MissingSection(section.to_string()))?;
        values
            .get(key)
            .map(String::as_str)
            .ok_or_else(|| ConfigError::MissingKey {
                section: section.to_string(),
                key: key.to_string(),
            })
    }

    /// Get a boolean-like value (`true`/`false`, `yes`/`no`, `on`/`off`, `1`/`0`)
    pub fn get_bool(&self, section: &str, key: &str) -> Result<bool, ConfigError> {
        let value = self.get(section, key)?;
        match value.to_ascii_lowercase().as_str() {
            "true" | "yes" | "on" | "1" => Ok(true),
            "false" | "no" | "off" | "0" => Ok(false),
            _ => Err(ConfigError::InvalidValue {
                section: section.to_string(),
                key: key.to_string(),
                value: value.to_string(),
                expected: "boolean",
            }),
        }
    }

    /// Get an unsigned integer value
    pub fn get_usize(&self, section: &str, key: &str) -> Result<usize, ConfigError> {
        let value = self.get(section, key)?;
        value.parse().map_err(|_| ConfigError::InvalidValue {
            section: section.to_string(),
            key: key.to_string(),
            value: value.to_string(),
            expected: "unsigned integer",
        })
    }

    /// Get a whitespace-separated list of floating point values
    pub fn get_f64_list(&self, section: &str, key: &str) -> Result<Vec<f64>, ConfigError> {
        let value = self.get(section, key)?;
        value
            .split_whitespace()
            .map(|part| {
                part.parse().map_err(|_| ConfigError::InvalidValue {
                    section: section.to_string(),
                    key: key.to_string(),
                    value: value.to_string(),
                    expected: "whitespace-separated floats",
                })
            })
            .collect()
    }
}
