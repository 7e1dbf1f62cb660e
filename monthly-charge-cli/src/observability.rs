//! Logging setup for the command-line front end.
//!
//! Logs go to stderr so stdout carries only the charge result.

use std::{io, str::FromStr};

use serde::Deserialize;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Default filter when `RUST_LOG` is unset.
const DEFAULT_FILTER: &str = "warn,monthly_charge=info";

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable output for terminals.
    #[default]
    Pretty,
    /// One JSON object per event, for log aggregation.
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" | "" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown log format: {other}")),
        }
    }
}

impl LogFormat {
    /// Reads the format from `LOG_FORMAT`, falling back to pretty output
    /// when it is unset or unrecognized.
    #[must_use]
    pub fn from_env() -> Self {
        std::env::var("LOG_FORMAT").ok().and_then(|raw| raw.parse().ok()).unwrap_or_default()
    }
}

/// Picks the filter directives: `RUST_LOG` first, then the configured
/// filter, then [`DEFAULT_FILTER`].
fn build_filter(configured: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(configured.unwrap_or(DEFAULT_FILTER)))
}

/// Installs the global tracing subscriber.
///
/// Filtering follows `RUST_LOG`, then `filter`, defaulting to `info` for the
/// calculator and `warn` for everything else.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_observability(format: LogFormat, filter: Option<&str>) -> anyhow::Result<()> {
    let filter = build_filter(filter);
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Pretty => registry
            .with(fmt::layer().with_target(true).with_writer(io::stderr))
            .try_init()?,
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_span_list(false)
                    .with_target(true)
                    .with_writer(io::stderr),
            )
            .try_init()?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format_parse() {
        assert_eq!("json".parse::<LogFormat>(), Ok(LogFormat::Json));
        assert_eq!("JSON".parse::<LogFormat>(), Ok(LogFormat::Json));
        assert_eq!("pretty".parse::<LogFormat>(), Ok(LogFormat::Pretty));
        assert_eq!("".parse::<LogFormat>(), Ok(LogFormat::Pretty));
    }

    #[test]
    fn test_log_format_parse_unknown() {
        let err = "xml".parse::<LogFormat>().unwrap_err();
        assert!(err.contains("xml"));
    }

    #[test]
    fn test_log_format_default_is_pretty() {
        assert_eq!(LogFormat::default(), LogFormat::Pretty);
    }

    #[test]
    fn test_configured_filter_used_without_rust_log() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        assert_eq!(build_filter(Some("monthly_charge=debug")).to_string(), "monthly_charge=debug");
        assert!(build_filter(None).to_string().contains("monthly_charge=info"));
    }
}
