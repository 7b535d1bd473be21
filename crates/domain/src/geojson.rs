//! Typed GeoJSON
//!
//! Only the subset the routing service returns is modelled. Features are
//! generic over their `properties` type so that every response shape is
//! checked at deserialization instead of being carried around as an untyped
//! JSON value.
//!
//! Positions are planar. A trailing altitude (or any further member) is
//! accepted on input and dropped.

use serde::{Deserialize, Deserializer, Serialize};

/// A GeoJSON position in `[longitude, latitude]` order
pub type Position = [f64; 2];

/// Wire position with two or more members
#[derive(Deserialize)]
#[serde(try_from = "Vec<f64>")]
struct WirePosition(Position);

impl TryFrom<Vec<f64>> for WirePosition {
    type Error = String;

    fn try_from(members: Vec<f64>) -> Result<Self, Self::Error> {
        match members.as_slice() {
            [lng, lat, ..] => Ok(Self([*lng, *lat])),
            _ => Err(format!(
                "position needs at least 2 members, got {}",
                members.len()
            )),
        }
    }
}

/// Deserialize an optional position, dropping any altitude
pub(crate) fn deserialize_optional_position<'de, D>(deserializer: D) -> Result<Option<Position>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<WirePosition>::deserialize(deserializer)?.map(|p| p.0))
}

/// Wire form of [`Geometry`]
#[derive(Deserialize)]
#[serde(tag = "type")]
enum WireGeometry {
    Point { coordinates: WirePosition },
    LineString { coordinates: Vec<WirePosition> },
    Polygon { coordinates: Vec<Vec<WirePosition>> },
    MultiPolygon { coordinates: Vec<Vec<Vec<WirePosition>>> },
}

fn planar(ring: Vec<WirePosition>) -> Vec<Position> {
    ring.into_iter().map(|p| p.0).collect()
}

impl From<WireGeometry> for Geometry {
    fn from(wire: WireGeometry) -> Self {
        match wire {
            WireGeometry::Point { coordinates } => Self::Point {
                coordinates: coordinates.0,
            },
            WireGeometry::LineString { coordinates } => Self::LineString {
                coordinates: planar(coordinates),
            },
            WireGeometry::Polygon { coordinates } => Self::Polygon {
                coordinates: coordinates.into_iter().map(planar).collect(),
            },
            WireGeometry::MultiPolygon { coordinates } => Self::MultiPolygon {
                coordinates: coordinates
                    .into_iter()
                    .map(|polygon| polygon.into_iter().map(planar).collect())
                    .collect(),
            },
        }
    }
}

/// The `"type": "Feature"` tag
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeatureTag {
    /// The only valid value
    #[default]
    Feature,
}

/// The `"type": "FeatureCollection"` tag
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeatureCollectionTag {
    /// The only valid value
    #[default]
    FeatureCollection,
}

/// GeoJSON geometry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", from = "WireGeometry")]
pub enum Geometry {
    /// Single position
    Point {
        /// The position
        coordinates: Position,
    },
    /// Ordered path
    LineString {
        /// Path positions
        coordinates: Vec<Position>,
    },
    /// Polygon with an exterior ring and optional holes
    Polygon {
        /// Linear rings, exterior first
        coordinates: Vec<Vec<Position>>,
    },
    /// Several polygons
    MultiPolygon {
        /// Polygons
        coordinates: Vec<Vec<Vec<Position>>>,
    },
}

impl Geometry {
    /// GeoJSON type name
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Point { .. } => "Point",
            Self::LineString { .. } => "LineString",
            Self::Polygon { .. } => "Polygon",
            Self::MultiPolygon { .. } => "MultiPolygon",
        }
    }

    /// Every position of the geometry, in document order
    #[must_use]
    pub fn positions(&self) -> Vec<Position> {
        match self {
            Self::Point { coordinates } => vec![*coordinates],
            Self::LineString { coordinates } => coordinates.clone(),
            Self::Polygon { coordinates } => coordinates.iter().flatten().copied().collect(),
            Self::MultiPolygon { coordinates } => coordinates
                .iter()
                .flatten()
                .flatten()
                .copied()
                .collect(),
        }
    }

    /// Whether the geometry has no positions at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Point { .. } => false,
            Self::LineString { coordinates } => coordinates.is_empty(),
            Self::Polygon { coordinates } => coordinates.iter().all(Vec::is_empty),
            Self::MultiPolygon { coordinates } => {
                coordinates.iter().flatten().all(Vec::is_empty)
            },
        }
    }
}

/// GeoJSON feature with typed properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature<P> {
    /// Always `"Feature"`
    #[serde(rename = "type", default)]
    pub kind: FeatureTag,
    /// Optional bounding box as sent by the service
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bbox: Option<Vec<f64>>,
    /// Geometry of the feature
    pub geometry: Geometry,
    /// Typed properties
    pub properties: P,
}

impl<P> Feature<P> {
    /// Create a feature
    pub const fn new(geometry: Geometry, properties: P) -> Self {
        Self {
            kind: FeatureTag::Feature,
            bbox: None,
            geometry,
            properties,
        }
    }
}

/// GeoJSON feature collection with typed properties
///
/// A missing `features` member deserializes as an empty list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureCollection<P> {
    /// Always `"FeatureCollection"`
    #[serde(rename = "type", default)]
    pub kind: FeatureCollectionTag,
    /// Optional bounding box as sent by the service
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bbox: Option<Vec<f64>>,
    /// Features in service ranking order
    #[serde(default = "Vec::new")]
    pub features: Vec<Feature<P>>,
}

impl<P> FeatureCollection<P> {
    /// Create a collection from features
    pub const fn new(features: Vec<Feature<P>>) -> Self {
        Self {
            kind: FeatureCollectionTag::FeatureCollection,
            bbox: None,
            features,
        }
    }

    /// Whether there are no features
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Take the first (highest ranked) feature
    #[must_use]
    pub fn into_first(self) -> Option<Feature<P>> {
        self.features.into_iter().next()
    }
}
