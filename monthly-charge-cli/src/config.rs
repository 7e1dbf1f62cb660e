//! Optional TOML settings for the command-line front end.
//!
//! Every key is optional; command-line flags take precedence over the file.
//!
//! ```toml
//! breakdown = true
//! log_format = "json"
//! log_filter = "monthly_charge=debug"
//! ```

use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

use crate::observability::LogFormat;

/// Settings read from a TOML file passed with `--config`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Print the itemized breakdown instead of the total.
    pub breakdown: bool,
    /// Log output format, used when `--log-format` is not given.
    pub log_format: Option<LogFormat>,
    /// Tracing filter directives, used when `RUST_LOG` is unset.
    pub log_filter: Option<String>,
}

impl CliConfig {
    /// Parses settings from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error for malformed TOML or unknown keys.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        toml::from_str(content).context("parsing CLI configuration")
    }

    /// Reads settings from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not parse.
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading configuration {}", path.display()))?;
        Self::from_toml(&content)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = CliConfig::from_toml("").unwrap();
        assert_eq!(config, CliConfig::default());
        assert!(!config.breakdown);
    }

    #[test]
    fn test_full_config() {
        let config = CliConfig::from_toml(
            "breakdown = true\nlog_format = \"json\"\nlog_filter = \"monthly_charge=debug\"\n",
        )
        .unwrap();

        assert!(config.breakdown);
        assert_eq!(config.log_format, Some(LogFormat::Json));
        assert_eq!(config.log_filter.as_deref(), Some("monthly_charge=debug"));
    }

    #[test]
    fn test_rounding_correction_is_not_configurable() {
        let err = CliConfig::from_toml("correct_rounding_creep = false\n").unwrap_err();
        assert!(format!("{err:#}").contains("correct_rounding_creep"));
    }

    #[test]
    fn test_unknown_log_format_rejected() {
        assert!(CliConfig::from_toml("log_format = \"xml\"\n").is_err());
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"log_format = \"pretty\"\n").unwrap();

        let config = CliConfig::from_file(file.path()).unwrap();
        assert_eq!(config.log_format, Some(LogFormat::Pretty));
    }

    #[test]
    fn test_missing_file_has_context() {
        let dir = tempfile::tempdir().unwrap();
        let err = CliConfig::from_file(&dir.path().join("absent.toml")).unwrap_err();
        assert!(err.to_string().contains("reading configuration"));
    }
}
