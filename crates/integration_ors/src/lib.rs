//! OpenRouteService integration for route-planner
//!
//! Provides forward and reverse geocoding, directions and isochrones via the
//! [OpenRouteService](https://openrouteservice.org) HTTP API.
//!
//! # Architecture
//!
//! The crate follows a client-trait pattern.
//! [`OrsClient`] defines the wire-level interface, implemented by
//! [`OpenRouteServiceClient`]. Responses are typed GeoJSON feature collections;
//! converting them into planner results is left to the adapters.
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_ors::{DirectionsRequest, OpenRouteServiceClient, OrsClient, OrsConfig};
//!
//! let config = OrsConfig { api_key: "...".into(), ..OrsConfig::default() };
//! let client = OpenRouteServiceClient::new(&config)?;
//!
//! let request = DirectionsRequest::new(
//!     [73.8567, 18.5204], // Pune
//!     [72.8777, 19.0760], // Mumbai
//! );
//! let routes = client.directions("driving-car", &request).await?;
//! ```

mod client;
mod config;
mod error;
mod models;

pub use client::{OpenRouteServiceClient, OrsClient};
pub use config::OrsConfig;
pub use error::OrsError;
pub use models::{
    DEFAULT_RADIUS_METERS, DirectionsProperties, DirectionsRequest, DirectionsResponse,
    GeocodeProperties, GeocodeResponse, ISOCHRONE_SMOOTHING, ISOCHRONE_UNITS, IsochroneOptions,
    IsochronesRequest, IsochronesResponse, RouteSegment,
};
