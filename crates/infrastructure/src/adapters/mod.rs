//! Infrastructure adapters
//!
//! Adapters connect application ports to concrete implementations.

mod configured_geolocation;
mod headless_map_surface;
mod ors_geocoding_adapter;
mod ors_isochrone_adapter;
mod ors_routing_adapter;

use std::sync::Arc;

use application::error::ApplicationError;
use integration_ors::{OpenRouteServiceClient, OrsClient, OrsConfig, OrsError};

pub use configured_geolocation::ConfiguredGeolocation;
pub use headless_map_surface::{HeadlessMapSurface, LayerFeatureProperties};
pub use ors_geocoding_adapter::OrsGeocodingAdapter;
pub use ors_isochrone_adapter::OrsIsochroneAdapter;
pub use ors_routing_adapter::OrsRoutingAdapter;

/// Build one OpenRouteService client to share between the adapters
///
/// # Errors
///
/// Returns an error if the configuration is invalid or the HTTP client
/// fails to initialize.
pub fn ors_client(config: &OrsConfig) -> Result<Arc<dyn OrsClient>, ApplicationError> {
    let client = OpenRouteServiceClient::new(config).map_err(|e| match e {
        OrsError::ConfigurationError(message) => ApplicationError::Configuration(message),
        other => ApplicationError::Transport(other.to_string()),
    })?;
    Ok(Arc::new(client))
}

/// Collapse a client error into a transport failure carrying its message
fn transport_error(error: OrsError) -> ApplicationError {
    ApplicationError::Transport(error.to_string())
}
