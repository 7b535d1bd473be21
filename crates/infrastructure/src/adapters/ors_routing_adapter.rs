//! Routing adapter - Implements RoutingPort using integration_ors

use std::sync::Arc;

use application::error::ApplicationError;
use application::ports::RoutingPort;
use async_trait::async_trait;
use domain::{Coordinate, Geometry, LatLng, RouteResult, TravelProfile};
use integration_ors::{DirectionsRequest, OrsClient};
use tracing::{debug, instrument};

use super::transport_error;

/// Adapter for point-to-point directions over OpenRouteService
pub struct OrsRoutingAdapter {
    client: Arc<dyn OrsClient>,
}

impl std::fmt::Debug for OrsRoutingAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrsRoutingAdapter")
            .field("client", &"OrsClient")
            .finish()
    }
}

impl OrsRoutingAdapter {
    /// Create a new adapter over a shared client
    pub fn new(client: Arc<dyn OrsClient>) -> Self {
        Self { client }
    }

    /// Convert a service-order line into a map-order path
    fn to_path(geometry: Geometry) -> Result<Vec<LatLng>, ApplicationError> {
        let coordinates = match geometry {
            Geometry::LineString { coordinates } => coordinates,
            other => {
                return Err(ApplicationError::Transport(format!(
                    "Route geometry is a {} instead of a LineString",
                    other.type_name()
                )));
            },
        };

        coordinates
            .into_iter()
            .map(|position| {
                Coordinate::from_position(position)
                    .map(Coordinate::to_lat_lng)
                    .map_err(ApplicationError::from)
            })
            .collect()
    }
}

#[async_trait]
impl RoutingPort for OrsRoutingAdapter {
    #[instrument(skip(self))]
    async fn route(
        &self,
        origin: Coordinate,
        destination: Coordinate,
        profile: &TravelProfile,
    ) -> Result<RouteResult, ApplicationError> {
        let request = DirectionsRequest::new(origin.to_position(), destination.to_position());

        let response = self
            .client
            .directions(profile.as_str(), &request)
            .await
            .map_err(transport_error)?;

        let feature = response.into_first().ok_or(ApplicationError::NoRoute)?;

        let segment = feature
            .properties
            .first_segment()
            .copied()
            .ok_or_else(|| {
                ApplicationError::Transport("Route feature has no segments".to_string())
            })?;

        let path = Self::to_path(feature.geometry)?;
        debug!(points = path.len(), distance = segment.distance, "Route converted");

        Ok(RouteResult {
            path,
            distance_meters: segment.distance,
            duration_seconds: segment.duration,
        })
    }
}
