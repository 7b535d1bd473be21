//! Routing port

use async_trait::async_trait;
use domain::{Coordinate, RouteResult, TravelProfile};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for point-to-point directions
#[cfg_attr(test, automock)]
#[async_trait]
pub trait RoutingPort: Send + Sync {
    /// Compute a route from `origin` to `destination`
    ///
    /// The returned path is already in map order. Fails with
    /// `ApplicationError::NoRoute` when the service finds no route.
    async fn route(
        &self,
        origin: Coordinate,
        destination: Coordinate,
        profile: &TravelProfile,
    ) -> Result<RouteResult, ApplicationError>;
}
