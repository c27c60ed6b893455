//! Logging initialisation.
//!
//! Installs a `tracing-subscriber` registry with an `EnvFilter` and a
//! pretty or JSON formatting layer. `RUST_LOG` takes precedence over the
//! configured level.

#[cfg(feature = "telemetry")]
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::EcoleResult;
use serde::{Deserialize, Serialize};

/// Telemetry configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryConfig {
    /// Default log level when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Output format: `pretty` or `json`.
    #[serde(default = "default_log_format")]
    pub log_format: String,

    /// Whether to write log lines at all.
    #[serde(default = "default_console_output")]
    pub console_output: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_console_output() -> bool {
    true
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: default_log_format(),
            console_output: default_console_output(),
        }
    }
}

impl TelemetryConfig {
    /// Returns the filter directive used when `RUST_LOG` is unset.
    #[must_use]
    pub fn filter_directive(&self) -> String {
        format!("{level},ecole={level},sqlx=warn", level = self.log_level)
    }

    /// Returns true when JSON output is requested.
    #[must_use]
    pub fn is_json(&self) -> bool {
        self.log_format.eq_ignore_ascii_case("json")
    }
}

/// Initialize the global tracing subscriber.
///
/// Fails with [`crate::EcoleError::Internal`] when a global subscriber is
/// already installed.
#[cfg(feature = "telemetry")]
pub fn init_telemetry(config: &TelemetryConfig) -> EcoleResult<()> {
    if !config.console_output {
        return Ok(());
    }

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.filter_directive()));

    let result = if config.is_json() {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json().with_target(true))
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .try_init()
    };

    result.map_err(|e| crate::EcoleError::Internal(format!("Failed to install subscriber: {}", e)))?;

    tracing::info!(
        log_level = %config.log_level,
        log_format = %config.log_format,
        "Telemetry initialized"
    );

    Ok(())
}

/// Placeholder for when the telemetry feature is disabled.
#[cfg(not(feature = "telemetry"))]
pub fn init_telemetry(_config: &TelemetryConfig) -> EcoleResult<()> {
    Ok(())
}
