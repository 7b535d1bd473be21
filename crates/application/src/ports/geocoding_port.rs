//! Geocoding port
//!
//! Translates free-text place names to coordinates and back.

use async_trait::async_trait;
use domain::Coordinate;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for forward and reverse geocoding
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GeocodingPort: Send + Sync {
    /// Resolve a place name to the coordinate of the service's best match
    ///
    /// Fails with `ApplicationError::NotFound` when nothing matches.
    async fn forward(&self, place: &str) -> Result<Coordinate, ApplicationError>;

    /// Resolve a coordinate to the label of the nearest place
    ///
    /// Fails with `ApplicationError::NotFound` when nothing is near.
    async fn reverse(&self, coordinate: Coordinate) -> Result<String, ApplicationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_object_safe(_: &dyn GeocodingPort) {}

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn GeocodingPort>();
    }
}
