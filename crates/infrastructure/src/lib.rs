//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer over the
//! OpenRouteService client, provides the headless map surface and the
//! configured geolocation source, and owns configuration loading and
//! telemetry setup.

pub mod adapters;
pub mod config;
pub mod telemetry;

pub use adapters::*;
pub use config::{AppConfig, GeoLocationConfig, MapConfig};
pub use telemetry::{TelemetryConfig, TelemetryError, init_telemetry};
