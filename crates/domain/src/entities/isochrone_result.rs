//! Isochrone result entity

use serde::{Deserialize, Serialize};

use crate::geojson::{Feature, Geometry, Position, deserialize_optional_position};

/// Properties the service attaches to each isochrone polygon
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IsochroneProperties {
    /// Index of the origin location the polygon belongs to
    #[serde(default)]
    pub group_index: u32,
    /// Range value the polygon was computed for
    pub value: f64,
    /// Snapped origin in service order
    #[serde(
        default,
        deserialize_with = "deserialize_optional_position",
        skip_serializing_if = "Option::is_none"
    )]
    pub center: Option<Position>,
    /// Reachable area, present when requested
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area: Option<f64>,
}

/// Reachability polygons for one origin, range and profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IsochroneResult {
    /// Polygon features in service order
    pub features: Vec<Feature<IsochroneProperties>>,
}

impl IsochroneResult {
    /// Geometries for rendering
    #[must_use]
    pub fn geometries(&self) -> Vec<Geometry> {
        self.features.iter().map(|f| f.geometry.clone()).collect()
    }

    /// Sum of the reported areas, `None` if no polygon reports one
    #[must_use]
    pub fn total_area(&self) -> Option<f64> {
        self.features
            .iter()
            .filter_map(|f| f.properties.area)
            .reduce(|a, b| a + b)
    }
}
