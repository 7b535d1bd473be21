//! Application configuration
//!
//! Split into focused sub-modules:
//! - `map`: initial view and base tile layer
//! - `geolocation`: fixed device position
//!
//! The OpenRouteService section reuses [`OrsConfig`] and the telemetry
//! section reuses [`TelemetryConfig`].

mod geolocation;
mod map;

use std::path::Path;

use integration_ors::OrsConfig;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::telemetry::TelemetryConfig;

pub use geolocation::GeoLocationConfig;
pub use map::{MAX_ZOOM, MapConfig};

/// Stem of the configuration file looked up in the working directory
pub const CONFIG_FILE_STEM: &str = "route-planner";

/// Prefix of configuration environment variables
pub const ENV_PREFIX: &str = "ROUTE_PLANNER";

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// OpenRouteService configuration
    #[serde(default)]
    pub ors: OrsConfig,

    /// Map surface configuration
    #[serde(default)]
    pub map: MapConfig,

    /// Fixed device position; geolocation is unsupported without one
    #[serde(default)]
    pub geolocation: Option<GeoLocationConfig>,

    /// Logging configuration
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Load configuration from defaults, a file and the environment
    ///
    /// Without `path`, `route-planner.{toml,json,yaml}` in the working
    /// directory is used if present. Environment variables override both,
    /// e.g. `ROUTE_PLANNER_ORS__API_KEY`.
    pub fn load(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        Self::load_with_environment(path, Self::environment())
    }

    fn environment() -> config::Environment {
        config::Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
    }

    fn load_with_environment(
        path: Option<&Path>,
        environment: config::Environment,
    ) -> Result<Self, config::ConfigError> {
        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name(CONFIG_FILE_STEM).required(false),
        };

        let builder = config::Config::builder()
            // Start with defaults
            .set_default("ors.base_url", "https://api.openrouteservice.org")?
            .set_default("ors.timeout_secs", 10)?
            .set_default("map.zoom", i64::from(domain::map::DEFAULT_ZOOM))?
            // Load from file
            .add_source(file)
            // Override with environment variables
            .add_source(environment);

        let config: Self = builder.build()?.try_deserialize()?;
        debug!(base_url = %config.ors.base_url, "Configuration loaded");
        Ok(config)
    }

    /// Validate all sections
    ///
    /// # Errors
    ///
    /// Returns the first problem found, prefixed with its section.
    pub fn validate(&self) -> Result<(), String> {
        self.ors.validate().map_err(|e| format!("ors: {e}"))?;
        self.map.validate()?;
        if let Some(position) = &self.geolocation {
            position
                .to_coordinate()
                .map_err(|e| format!("geolocation: {e}"))?;
        }
        Ok(())
    }

    /// Render as TOML with the API key masked
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_redacted_toml(&self) -> Result<String, toml::ser::Error> {
        let mut redacted = self.clone();
        if !redacted.ors.api_key.is_empty() {
            redacted.ors.api_key = "********".to_string();
        }
        toml::to_string_pretty(&redacted)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn env(vars: &[(&str, &str)]) -> config::Environment {
        let source: config::Map<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        AppConfig::environment().source(Some(source))
    }

    fn toml_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn defaults_without_sources() {
        let config = AppConfig::load_with_environment(None, env(&[])).unwrap();
        assert_eq!(config.ors.base_url, "https://api.openrouteservice.org");
        assert_eq!(config.ors.timeout_secs, 10);
        assert!(config.ors.api_key.is_empty());
        assert_eq!(config.map.zoom, 13);
        assert!(config.geolocation.is_none());
        assert!(!config.telemetry.json);
    }

    #[test]
    fn missing_api_key_fails_validation() {
        let config = AppConfig::default();
        let err = config.validate().unwrap_err();
        assert_eq!(err, "ors: api_key must not be empty");
    }

    #[test]
    fn file_values_are_loaded() {
        let file = toml_file(
            r#"
            [ors]
            api_key = "from-file"
            timeout_secs = 3

            [map]
            zoom = 9
            center = { lat = 19.076, lng = 72.8777 }

            [geolocation]
            latitude = 18.5204
            longitude = 73.8567

            [telemetry]
            log_filter = "debug"
            json = true
            "#,
        );

        let config = AppConfig::load_with_environment(Some(file.path()), env(&[])).unwrap();
        assert_eq!(config.ors.api_key, "from-file");
        assert_eq!(config.ors.timeout_secs, 3);
        assert_eq!(config.map.zoom, 9);
        assert_eq!(config.map.center, domain::LatLng::new(19.076, 72.8777));
        assert_eq!(
            config.geolocation.unwrap().to_coordinate().unwrap(),
            domain::Coordinate::pune()
        );
        assert_eq!(config.telemetry.log_filter, "debug");
        assert!(config.telemetry.json);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn environment_overrides_file() {
        let file = toml_file("[ors]\napi_key = \"from-file\"\n");

        let config = AppConfig::load_with_environment(
            Some(file.path()),
            env(&[
                ("ROUTE_PLANNER_ORS__API_KEY", "from-env"),
                ("ROUTE_PLANNER_ORS__BASE_URL", "http://localhost:8082/ors"),
            ]),
        )
        .unwrap();
        assert_eq!(config.ors.api_key, "from-env");
        assert_eq!(config.ors.base_url, "http://localhost:8082/ors");
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let result = AppConfig::load_with_environment(
            Some(Path::new("/nonexistent/route-planner.toml")),
            env(&[]),
        );
        assert!(result.is_err());
    }

    #[test]
    fn invalid_geolocation_fails_validation() {
        let config = AppConfig {
            ors: OrsConfig::for_testing(),
            geolocation: Some(GeoLocationConfig {
                latitude: 91.0,
                longitude: 0.0,
            }),
            ..AppConfig::default()
        };
        assert!(config.validate().unwrap_err().starts_with("geolocation:"));
    }

    #[test]
    fn redacted_toml_masks_api_key() {
        let config = AppConfig {
            ors: OrsConfig {
                api_key: "super-secret".to_string(),
                ..OrsConfig::default()
            },
            ..AppConfig::default()
        };
        let rendered = config.to_redacted_toml().unwrap();
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("********"));
        assert!(rendered.contains("[map]"));
    }
}
