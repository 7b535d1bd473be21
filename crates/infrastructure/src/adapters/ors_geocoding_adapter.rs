//! Geocoding adapter - Implements GeocodingPort using integration_ors

use std::sync::Arc;

use application::error::ApplicationError;
use application::ports::GeocodingPort;
use async_trait::async_trait;
use domain::{Coordinate, Geometry};
use integration_ors::{OrsClient, OrsError};
use tracing::{debug, instrument};

use super::transport_error;

/// Adapter for place search over OpenRouteService
pub struct OrsGeocodingAdapter {
    client: Arc<dyn OrsClient>,
}

impl std::fmt::Debug for OrsGeocodingAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrsGeocodingAdapter")
            .field("client", &"OrsClient")
            .finish()
    }
}

impl OrsGeocodingAdapter {
    /// Create a new adapter over a shared client
    pub fn new(client: Arc<dyn OrsClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl GeocodingPort for OrsGeocodingAdapter {
    #[instrument(skip(self))]
    async fn forward(&self, place: &str) -> Result<Coordinate, ApplicationError> {
        let response = self.client.geocode_search(place).await.map_err(|e| match e {
            OrsError::NotFound(_) => ApplicationError::place_not_found(place),
            other => transport_error(other),
        })?;

        let feature = response
            .into_first()
            .ok_or_else(|| ApplicationError::place_not_found(place))?;

        match feature.geometry {
            Geometry::Point { coordinates } => {
                let coordinate = Coordinate::from_position(coordinates)?;
                debug!(%place, %coordinate, "Geocoded place");
                Ok(coordinate)
            },
            other => Err(ApplicationError::Transport(format!(
                "Geocoding returned a {} instead of a Point",
                other.type_name()
            ))),
        }
    }

    #[instrument(skip(self))]
    async fn reverse(&self, coordinate: Coordinate) -> Result<String, ApplicationError> {
        let response = self
            .client
            .geocode_reverse(coordinate.latitude(), coordinate.longitude())
            .await
            .map_err(transport_error)?;

        let properties = response
            .into_first()
            .map(|feature| feature.properties)
            .ok_or_else(|| ApplicationError::place_name_not_found(&coordinate))?;

        properties
            .label
            .or(properties.name)
            .ok_or_else(|| ApplicationError::place_name_not_found(&coordinate))
    }
}
