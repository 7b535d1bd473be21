//! Isochrone port

use async_trait::async_trait;
use domain::{Coordinate, IsochroneResult, RangeKind, TravelProfile};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for reachability polygons
#[cfg_attr(test, automock)]
#[async_trait]
pub trait IsochronePort: Send + Sync {
    /// Compute the area reachable from `origin` within `range`
    ///
    /// Fails with `ApplicationError::NoIsochrone` when the service returns
    /// no polygon.
    async fn isochrone(
        &self,
        origin: Coordinate,
        profile: &TravelProfile,
        range: f64,
        range_kind: RangeKind,
    ) -> Result<IsochroneResult, ApplicationError>;
}
