//! Device position port

use async_trait::async_trait;
use domain::Coordinate;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for the host's current-position query
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GeolocationPort: Send + Sync {
    /// Current device position
    ///
    /// Fails with `ApplicationError::GeolocationUnsupported` when the host
    /// cannot determine a position at all, or `ApplicationError::Geolocation`
    /// when the query itself failed.
    async fn current_position(&self) -> Result<Coordinate, ApplicationError>;
}

/// Geolocation for hosts without any position source
#[derive(Debug, Default, Clone, Copy)]
pub struct UnsupportedGeolocation;

#[async_trait]
impl GeolocationPort for UnsupportedGeolocation {
    async fn current_position(&self) -> Result<Coordinate, ApplicationError> {
        Err(ApplicationError::GeolocationUnsupported)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unsupported_geolocation_always_fails() {
        let result = UnsupportedGeolocation.current_position().await;
        assert!(matches!(
            result,
            Err(ApplicationError::GeolocationUnsupported)
        ));
    }
}
