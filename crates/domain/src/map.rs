//! Map layer model
//!
//! Describes what a map surface renders: a base tile layer, a view and at
//! most one geometry layer per [`LayerKind`].

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::geojson::Geometry;
use crate::value_objects::{LatLng, LatLngBounds};

/// Default view center (Pune)
pub const DEFAULT_CENTER: LatLng = LatLng::new(18.5204, 73.8567);

/// Default view zoom level
pub const DEFAULT_ZOOM: u8 = 13;

/// OpenStreetMap tile URL template
pub const OSM_TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";

/// OpenStreetMap attribution
pub const OSM_ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";

/// Which overlay a layer belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayerKind {
    /// Route polyline
    Route,
    /// Isochrone polygons
    Isochrone,
}

impl LayerKind {
    /// Layer name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Route => "route",
            Self::Isochrone => "isochrone",
        }
    }
}

impl fmt::Display for LayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stroke/fill style of a layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerStyle {
    /// CSS color name or hex value
    pub color: String,
}

impl LayerStyle {
    /// Style used for routes
    #[must_use]
    pub fn route() -> Self {
        Self {
            color: "blue".to_string(),
        }
    }

    /// Style used for isochrones
    #[must_use]
    pub fn isochrone() -> Self {
        Self {
            color: "red".to_string(),
        }
    }
}

/// Geometry carried by a layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LayerGeometry {
    /// A path already in map order
    Polyline(Vec<LatLng>),
    /// GeoJSON geometries in service order, rendered as-is
    GeoJson(Vec<Geometry>),
}

impl LayerGeometry {
    /// Bounds of the geometry in map order, `None` when empty
    #[must_use]
    pub fn bounds(&self) -> Option<LatLngBounds> {
        match self {
            Self::Polyline(path) => LatLngBounds::from_points(path.iter().copied()),
            Self::GeoJson(geometries) => LatLngBounds::from_points(
                geometries
                    .iter()
                    .flat_map(Geometry::positions)
                    .map(|[lng, lat]| LatLng::new(lat, lng)),
            ),
        }
    }
}

/// A styled geometry layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapLayer {
    /// What is drawn
    pub geometry: LayerGeometry,
    /// How it is drawn
    pub style: LayerStyle,
}

impl MapLayer {
    /// Polyline layer from a map-order path
    #[must_use]
    pub const fn polyline(path: Vec<LatLng>, style: LayerStyle) -> Self {
        Self {
            geometry: LayerGeometry::Polyline(path),
            style,
        }
    }

    /// GeoJSON layer from service-order geometries
    #[must_use]
    pub const fn geojson(geometries: Vec<Geometry>, style: LayerStyle) -> Self {
        Self {
            geometry: LayerGeometry::GeoJson(geometries),
            style,
        }
    }

    /// Bounds of the layer
    #[must_use]
    pub fn bounds(&self) -> Option<LatLngBounds> {
        self.geometry.bounds()
    }
}

/// Base tile layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileLayer {
    /// URL template with `{s}`, `{z}`, `{x}`, `{y}` placeholders
    pub url_template: String,
    /// HTML attribution shown on the map
    pub attribution: String,
}

impl Default for TileLayer {
    fn default() -> Self {
        Self {
            url_template: OSM_TILE_URL.to_string(),
            attribution: OSM_ATTRIBUTION.to_string(),
        }
    }
}

/// Visible area of the map
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapView {
    /// View center
    pub center: LatLng,
    /// Zoom level
    pub zoom: u8,
    /// Bounds the view was last fitted to
    pub fitted_bounds: Option<LatLngBounds>,
}

impl MapView {
    /// View centered on a point
    #[must_use]
    pub const fn new(center: LatLng, zoom: u8) -> Self {
        Self {
            center,
            zoom,
            fitted_bounds: None,
        }
    }

    /// Fit the view to bounds
    pub fn fit_bounds(&mut self, bounds: LatLngBounds) {
        self.center = bounds.center();
        self.fitted_bounds = Some(bounds);
    }
}

impl Default for MapView {
    fn default() -> Self {
        Self::new(DEFAULT_CENTER, DEFAULT_ZOOM)
    }
}
