//! Geolocation adapter - Implements GeolocationPort from configuration

use application::error::ApplicationError;
use application::ports::GeolocationPort;
use async_trait::async_trait;
use domain::Coordinate;
use tracing::debug;

use crate::config::GeoLocationConfig;

/// Device position read from configuration
///
/// Hosts without a configured position report geolocation as unsupported.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfiguredGeolocation {
    position: Option<GeoLocationConfig>,
}

impl ConfiguredGeolocation {
    /// Create from an optional configured position
    #[must_use]
    pub const fn new(position: Option<GeoLocationConfig>) -> Self {
        Self { position }
    }
}

#[async_trait]
impl GeolocationPort for ConfiguredGeolocation {
    async fn current_position(&self) -> Result<Coordinate, ApplicationError> {
        let position = self
            .position
            .ok_or(ApplicationError::GeolocationUnsupported)?;

        let coordinate = position
            .to_coordinate()
            .map_err(|e| ApplicationError::Geolocation(e.to_string()))?;
        debug!(%coordinate, "Using configured position");
        Ok(coordinate)
    }
}
