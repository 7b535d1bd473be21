//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod geocoding_port;
mod geolocation_port;
mod isochrone_port;
mod map_surface_port;
mod routing_port;

#[cfg(test)]
pub use geocoding_port::MockGeocodingPort;
pub use geocoding_port::GeocodingPort;
#[cfg(test)]
pub use geolocation_port::MockGeolocationPort;
pub use geolocation_port::{GeolocationPort, UnsupportedGeolocation};
#[cfg(test)]
pub use isochrone_port::MockIsochronePort;
pub use isochrone_port::IsochronePort;
#[cfg(test)]
pub use map_surface_port::MockMapSurfacePort;
pub use map_surface_port::MapSurfacePort;
#[cfg(test)]
pub use routing_port::MockRoutingPort;
pub use routing_port::RoutingPort;
