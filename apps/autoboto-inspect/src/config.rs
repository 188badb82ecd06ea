//! Inspector configuration.

use std::env;
use std::fmt;
use std::str::FromStr;

use autoboto_core::{AutobotoError, AutobotoResult};
use clap::ValueEnum;

/// How command results are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned plain-text columns.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => f.write_str("text"),
            Self::Json => f.write_str("json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = AutobotoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(AutobotoError::Config(format!(
                "unsupported output format `{other}` (expected `text` or `json`)"
            ))),
        }
    }
}

/// Inspector settings read from the environment.
#[derive(Debug, Clone)]
pub struct InspectConfig {
    /// Default output format when `--format` is not given.
    pub format: OutputFormat,
    /// Log level filter used when `RUST_LOG` is unset.
    pub log_level: String,
}

impl InspectConfig {
    /// Create configuration from environment variables.
    pub fn from_env() -> AutobotoResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> AutobotoResult<Self> {
        let format = match lookup("AUTOBOTO_OUTPUT") {
            Some(raw) if !raw.trim().is_empty() => raw.parse()?,
            _ => OutputFormat::default(),
        };
        let log_level = lookup("LOG_LEVEL").unwrap_or_else(|| "warn".to_owned());
        Ok(Self { format, log_level })
    }
}

impl Default for InspectConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            log_level: "warn".to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_should_default_to_text_and_warn() {
        let config = InspectConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.format, OutputFormat::Text);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_should_read_output_format_case_insensitively() {
        let env = lookup(&[("AUTOBOTO_OUTPUT", "JSON"), ("LOG_LEVEL", "debug")]);
        let config = InspectConfig::from_lookup(env).unwrap();
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_should_treat_blank_output_format_as_default() {
        let config = InspectConfig::from_lookup(lookup(&[("AUTOBOTO_OUTPUT", "  ")])).unwrap();
        assert_eq!(config.format, OutputFormat::Text);
    }

    #[test]
    fn test_should_reject_unknown_output_format() {
        let err = InspectConfig::from_lookup(lookup(&[("AUTOBOTO_OUTPUT", "yaml")])).unwrap_err();
        assert!(matches!(err, AutobotoError::Config(ref msg) if msg.contains("yaml")));
    }
}
