//! Tracing and logging setup shared by binaries and tests embedding the ledger.

/// Tracing configuration (filters, output format).
pub mod tracing;

pub use self::tracing::{ConfigError, LogFormat, TracingConfig};

/// Initialize process-wide tracing from the environment.
///
/// This is safe to call multiple times; subsequent calls become no-ops. An
/// unusable `RUST_LOG` or `BANKLEDGER_LOG_FORMAT` falls back to its own
/// default only; the other variable is still honoured. Each rejected value is
/// logged as a warning once the subscriber is installed.
pub fn init() {
    let (config, problems) = TracingConfig::from_env();
    if let Err(err) = self::tracing::init(&config) {
        ::tracing::warn!(error = %err, "tracing not initialized");
    }
    for problem in problems {
        ::tracing::warn!(error = %problem, "ignoring invalid logging configuration");
    }
}

/// Initialize process-wide tracing with an explicit configuration.
///
/// Fails with [`ConfigError::InvalidFilter`] if `config.filter` does not parse.
pub fn init_with(config: &TracingConfig) -> Result<(), ConfigError> {
    self::tracing::init(config)
}
