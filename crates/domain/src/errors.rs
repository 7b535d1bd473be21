//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    /// Coordinates outside the WGS84 range
    #[error(
        "Invalid coordinates: latitude {latitude} must be -90 to 90, longitude {longitude} must be -180 to 180"
    )]
    InvalidCoordinates {
        /// Rejected latitude
        latitude: f64,
        /// Rejected longitude
        longitude: f64,
    },

    /// Travel profile name that cannot be sent to the routing service
    #[error("Invalid travel profile: {0}")]
    InvalidProfile(String),

    /// Unknown range kind
    #[error("Invalid range kind: {0}. Use 'distance' or 'time'")]
    InvalidRangeKind(String),

    /// Validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

impl DomainError {
    /// Create an invalid coordinates error
    #[must_use]
    pub const fn invalid_coordinates(latitude: f64, longitude: f64) -> Self {
        Self::InvalidCoordinates {
            latitude,
            longitude,
        }
    }
}
