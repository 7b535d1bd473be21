//! Application-level errors
//!
//! Every failure a planner action can hit is one of these. The controller
//! turns them into the single user-visible error string, so the `Display`
//! text of each variant is what the user reads after the context prefix.

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Geocoding returned no feature
    #[error("{0}")]
    NotFound(String),

    /// Directions returned no feature
    #[error("No routes found in the response.")]
    NoRoute,

    /// Isochrones returned no feature
    #[error("No isochrones found in the response.")]
    NoIsochrone,

    /// Network, HTTP or response-shape failure of the external service
    #[error("{0}")]
    Transport(String),

    /// The host has no way to determine the device position
    #[error("Geolocation is not supported on this host.")]
    GeolocationUnsupported,

    /// The host failed to determine the device position
    #[error("{0}")]
    Geolocation(String),

    /// Form input rejected before any request was made
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl ApplicationError {
    /// Geocoding miss for a place name
    pub fn place_not_found(place: &str) -> Self {
        Self::NotFound(format!("No coordinates found for location: {place}"))
    }

    /// Reverse geocoding miss for a position
    pub fn place_name_not_found(coordinate: &domain::Coordinate) -> Self {
        Self::NotFound(format!("No place name found for coordinates: {coordinate}"))
    }

    /// Whether the external service answered but had nothing to offer
    pub const fn is_empty_result(&self) -> bool {
        matches!(self, Self::NotFound(_) | Self::NoRoute | Self::NoIsochrone)
    }
}
