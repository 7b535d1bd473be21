//! Isochrone adapter - Implements IsochronePort using integration_ors

use std::sync::Arc;

use application::error::ApplicationError;
use application::ports::IsochronePort;
use async_trait::async_trait;
use domain::{Coordinate, IsochroneResult, RangeKind, TravelProfile};
use integration_ors::{IsochronesRequest, OrsClient};
use tracing::{debug, instrument};

use super::transport_error;

/// Adapter for reachability polygons over OpenRouteService
///
/// Polygons are passed through in service order; the map surface reads
/// GeoJSON natively.
pub struct OrsIsochroneAdapter {
    client: Arc<dyn OrsClient>,
}

impl std::fmt::Debug for OrsIsochroneAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrsIsochroneAdapter")
            .field("client", &"OrsClient")
            .finish()
    }
}

impl OrsIsochroneAdapter {
    /// Create a new adapter over a shared client
    pub fn new(client: Arc<dyn OrsClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl IsochronePort for OrsIsochroneAdapter {
    #[instrument(skip(self))]
    async fn isochrone(
        &self,
        origin: Coordinate,
        profile: &TravelProfile,
        range: f64,
        range_kind: RangeKind,
    ) -> Result<IsochroneResult, ApplicationError> {
        let request = IsochronesRequest::new(origin.to_position(), range, range_kind);

        let response = self
            .client
            .isochrones(profile.as_str(), &request)
            .await
            .map_err(transport_error)?;

        if response.is_empty() {
            return Err(ApplicationError::NoIsochrone);
        }

        debug!(polygons = response.features.len(), "Isochrone received");
        Ok(IsochroneResult {
            features: response.features,
        })
    }
}
