//! Logging initialization and configuration
//!
//! Installs a `tracing-subscriber` registry with an [`EnvFilter`] and a
//! console formatter, either human-readable or JSON lines.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Configuration for logging
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TelemetryConfig {
    /// Log level filter (e.g., "warn", "route_planner=debug,integration_ors=trace")
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    /// Emit JSON lines instead of human-readable output
    #[serde(default)]
    pub json: bool,
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter(),
            json: false,
        }
    }
}

impl TelemetryConfig {
    /// Build the filter, preferring `RUST_LOG` over the configured one
    ///
    /// # Errors
    ///
    /// Returns an error if the configured filter does not parse.
    pub fn env_filter(&self) -> Result<EnvFilter, TelemetryError> {
        EnvFilter::try_from_default_env().or_else(|_| {
            EnvFilter::try_new(&self.log_filter)
                .map_err(|e| TelemetryError::InvalidFilter(e.to_string()))
        })
    }
}

/// Errors from logging setup
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// The log filter directive is malformed
    #[error("Invalid log filter: {0}")]
    InvalidFilter(String),

    /// A global subscriber was already installed
    #[error("Failed to initialize telemetry: {0}")]
    Init(String),
}

/// Initialize logging with the given configuration
///
/// Logs go to stderr so that command output on stdout stays machine-readable.
///
/// # Errors
///
/// Returns an error if the filter is invalid or a subscriber is already set.
pub fn init_telemetry(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let env_filter = config.env_filter()?;
    let registry = tracing_subscriber::registry().with(env_filter);

    let result = if config.json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .try_init()
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };
    result.map_err(|e| TelemetryError::Init(e.to_string()))?;

    info!(filter = %config.log_filter, json = config.json, "Telemetry initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = TelemetryConfig::default();
        assert_eq!(config.log_filter, "warn");
        assert!(!config.json);
    }

    #[test]
    fn deserialize_with_defaults() {
        let config: TelemetryConfig = serde_json::from_str(r#"{"json": true}"#).unwrap();
        assert!(config.json);
        assert_eq!(config.log_filter, "warn");
    }

    #[test]
    fn error_display() {
        let err = TelemetryError::InvalidFilter("bad directive".to_string());
        assert!(err.to_string().contains("bad directive"));
    }

    #[test]
    fn init_twice_fails() {
        let config = TelemetryConfig {
            log_filter: "info".to_string(),
            json: false,
        };
        // The first call may lose to another test's subscriber; the second never wins.
        let _ = init_telemetry(&config);
        assert!(matches!(
            init_telemetry(&config),
            Err(TelemetryError::Init(_))
        ));
    }
}
