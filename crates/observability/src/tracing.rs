//! Tracing/logging initialization.
//!
//! Configured from the environment: `RUST_LOG` for filtering,
//! `BANKLEDGER_LOG_FORMAT` (`json` or `pretty`) for the output format.

use core::str::FromStr;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Environment variable selecting the log output format.
pub const LOG_FORMAT_ENV: &str = "BANKLEDGER_LOG_FORMAT";

const DEFAULT_FILTER: &str = "info";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown log format '{0}' (expected 'json' or 'pretty')")]
    UnknownLogFormat(String),

    #[error("invalid log filter '{filter}': {reason}")]
    InvalidFilter { filter: String, reason: String },
}

/// Output format of the fmt subscriber.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "pretty" | "text" => Ok(LogFormat::Pretty),
            other => Err(ConfigError::UnknownLogFormat(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingConfig {
    /// `EnvFilter` directives, e.g. `info` or `bankledger_accounting=debug`.
    pub filter: String,
    pub format: LogFormat,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_FILTER.to_string(),
            format: LogFormat::default(),
        }
    }
}

impl TracingConfig {
    /// Reads `RUST_LOG` and `BANKLEDGER_LOG_FORMAT`.
    ///
    /// Each variable is validated on its own: a rejected value is replaced by
    /// its default and reported in the returned list, without touching the
    /// other setting.
    pub fn from_env() -> (Self, Vec<ConfigError>) {
        Self::from_vars(
            std::env::var(EnvFilter::DEFAULT_ENV).ok(),
            std::env::var(LOG_FORMAT_ENV).ok(),
        )
    }

    pub fn from_vars(filter: Option<String>, format: Option<String>) -> (Self, Vec<ConfigError>) {
        let mut problems = Vec::new();

        let filter = match filter.filter(|f| !f.trim().is_empty()) {
            Some(raw) => match parse_filter(&raw) {
                Ok(_) => raw,
                Err(err) => {
                    problems.push(err);
                    DEFAULT_FILTER.to_string()
                }
            },
            None => DEFAULT_FILTER.to_string(),
        };

        let format = match format.map(|raw| raw.parse::<LogFormat>()) {
            Some(Ok(format)) => format,
            Some(Err(err)) => {
                problems.push(err);
                LogFormat::default()
            }
            None => LogFormat::default(),
        };

        (Self { filter, format }, problems)
    }
}

fn parse_filter(filter: &str) -> Result<EnvFilter, ConfigError> {
    EnvFilter::try_new(filter).map_err(|e| ConfigError::InvalidFilter {
        filter: filter.to_string(),
        reason: e.to_string(),
    })
}

/// Initialize tracing/logging for the process.
///
/// Safe to call multiple times (subsequent calls are no-ops). An unparsable
/// filter is returned as an error and nothing is installed.
pub fn init(config: &TracingConfig) -> Result<(), ConfigError> {
    let filter = parse_filter(&config.filter)?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false);

    // An already installed subscriber wins.
    let _ = match config.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
    };
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(filter: Option<&str>, format: Option<&str>) -> (TracingConfig, Vec<ConfigError>) {
        TracingConfig::from_vars(filter.map(str::to_string), format.map(str::to_string))
    }

    #[test]
    fn defaults_to_info_json() {
        let (config, problems) = vars(None, None);
        assert!(problems.is_empty());
        assert_eq!(config, TracingConfig::default());
        assert_eq!(config.filter, "info");
        assert_eq!(config.format, LogFormat::Json);
    }

    #[test]
    fn reads_filter_and_format() {
        let (config, problems) = vars(Some("bankledger_accounting=debug"), Some("Pretty"));
        assert!(problems.is_empty());
        assert_eq!(config.filter, "bankledger_accounting=debug");
        assert_eq!(config.format, LogFormat::Pretty);
    }

    #[test]
    fn blank_filter_falls_back_to_default() {
        let (config, problems) = vars(Some("  "), None);
        assert!(problems.is_empty());
        assert_eq!(config.filter, "info");
    }

    #[test]
    fn unknown_format_keeps_valid_filter() {
        let (config, problems) = vars(Some("bankledger_accounting=debug"), Some("xml"));
        assert_eq!(config.filter, "bankledger_accounting=debug");
        assert_eq!(config.format, LogFormat::Json);
        assert_eq!(problems, vec![ConfigError::UnknownLogFormat("xml".to_string())]);
    }

    #[test]
    fn invalid_filter_is_reported_and_keeps_format() {
        let (config, problems) = vars(Some("bankledger_accounting=notalevel"), Some("pretty"));
        assert_eq!(config.filter, "info");
        assert_eq!(config.format, LogFormat::Pretty);
        assert_eq!(problems.len(), 1);
        assert!(matches!(
            &problems[0],
            ConfigError::InvalidFilter { filter, .. } if filter == "bankledger_accounting=notalevel"
        ));
    }

    #[test]
    fn init_rejects_invalid_filter() {
        let config = TracingConfig {
            filter: "bankledger_accounting=notalevel".to_string(),
            format: LogFormat::Json,
        };
        assert!(matches!(init(&config), Err(ConfigError::InvalidFilter { .. })));
    }

    #[test]
    fn init_is_idempotent() {
        assert_eq!(init(&TracingConfig::default()), Ok(()));
        assert_eq!(
            init(&TracingConfig {
                filter: "debug".to_string(),
                format: LogFormat::Pretty,
            }),
            Ok(())
        );
    }
}
