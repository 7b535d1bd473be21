//! Domain layer for the route planner
//!
//! Contains the value objects, typed GeoJSON, map layer model and the
//! planner state. This layer performs no I/O.

pub mod entities;
pub mod errors;
pub mod geojson;
pub mod map;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use geojson::{Feature, FeatureCollection, Geometry, Position};
pub use map::{LayerGeometry, LayerKind, LayerStyle, MapLayer, MapView, TileLayer};
pub use value_objects::*;
