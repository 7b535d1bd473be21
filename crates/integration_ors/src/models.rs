//! OpenRouteService wire models
//!
//! Request bodies are serialized exactly as the API expects them. Responses
//! are GeoJSON feature collections with typed properties.

use domain::{FeatureCollection, IsochroneProperties, Position, RangeKind};
use serde::{Deserialize, Serialize};

/// Snapping radius for directions waypoints, in meters
pub const DEFAULT_RADIUS_METERS: u32 = 1000;

/// Units of isochrone ranges; the API is always asked for kilometers
pub const ISOCHRONE_UNITS: &str = "km";

/// Polygon smoothing factor for isochrones
pub const ISOCHRONE_SMOOTHING: f64 = 0.9;

/// Properties of a geocoding feature
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeocodeProperties {
    /// Human-readable place label
    #[serde(default)]
    pub label: Option<String>,
    /// Short place name
    #[serde(default)]
    pub name: Option<String>,
}

/// Geocoding response
pub type GeocodeResponse = FeatureCollection<GeocodeProperties>;

/// A leg of a route between two consecutive waypoints
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RouteSegment {
    /// Meters
    #[serde(default)]
    pub distance: f64,
    /// Seconds
    #[serde(default)]
    pub duration: f64,
}

/// Properties of a directions feature
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DirectionsProperties {
    /// One segment per waypoint pair
    #[serde(default)]
    pub segments: Vec<RouteSegment>,
}

impl DirectionsProperties {
    /// The first segment, the only one a two-waypoint request produces
    #[must_use]
    pub fn first_segment(&self) -> Option<&RouteSegment> {
        self.segments.first()
    }
}

/// Directions response
pub type DirectionsResponse = FeatureCollection<DirectionsProperties>;

/// Isochrones response
pub type IsochronesResponse = FeatureCollection<IsochroneProperties>;

/// Body of `POST /v2/directions/{profile}/geojson`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DirectionsRequest {
    /// Waypoints in `[lon, lat]` order
    pub coordinates: Vec<Position>,
    /// Snapping radius per waypoint
    pub radiuses: Vec<u32>,
}

impl DirectionsRequest {
    /// Request from `origin` to `destination`
    #[must_use]
    pub fn new(origin: Position, destination: Position) -> Self {
        Self {
            coordinates: vec![origin, destination],
            radiuses: vec![DEFAULT_RADIUS_METERS, DEFAULT_RADIUS_METERS],
        }
    }
}

/// Extra isochrone options
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IsochroneOptions {
    /// Road features the isochrone may not use
    pub avoid_features: Vec<String>,
}

impl Default for IsochroneOptions {
    fn default() -> Self {
        Self {
            avoid_features: vec!["highways".to_string()],
        }
    }
}

/// Body of `POST /v2/isochrones/{profile}`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IsochronesRequest {
    /// Origins in `[lon, lat]` order
    pub locations: Vec<Position>,
    /// Range values
    pub range: Vec<f64>,
    /// Unit of distance ranges
    pub units: &'static str,
    /// Whether `range` is a distance or a time
    pub range_type: RangeKind,
    /// Extra properties to compute
    pub attributes: Vec<&'static str>,
    /// Polygon smoothing factor
    pub smoothing: f64,
    /// Routing options
    pub options: IsochroneOptions,
}

impl IsochronesRequest {
    /// Request for a single location and range
    #[must_use]
    pub fn new(location: Position, range: f64, range_type: RangeKind) -> Self {
        Self {
            locations: vec![location],
            range: vec![range],
            units: ISOCHRONE_UNITS,
            range_type,
            attributes: vec!["area"],
            smoothing: ISOCHRONE_SMOOTHING,
            options: IsochroneOptions::default(),
        }
    }
}

/// Error body returned by the API
///
/// Directions and isochrones use `{"error": {"code": .., "message": ..}}`,
/// gateway errors use `{"error": "..."}` and geocoding uses
/// `{"geocoding": {"errors": [..]}}`.
#[derive(Debug, Deserialize)]
pub(crate) struct RawErrorBody {
    #[serde(default)]
    error: Option<RawErrorDetail>,
    #[serde(default)]
    geocoding: Option<RawGeocodingInfo>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawErrorDetail {
    Message(String),
    Structured { message: String },
}

#[derive(Debug, Deserialize)]
struct RawGeocodingInfo {
    #[serde(default)]
    errors: Vec<String>,
}

impl RawErrorBody {
    /// The most specific message in the body
    pub(crate) fn into_message(self) -> Option<String> {
        match self.error {
            Some(RawErrorDetail::Message(message) | RawErrorDetail::Structured { message }) => {
                Some(message)
            },
            None => self
                .geocoding
                .and_then(|g| g.errors.into_iter().next()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn directions_request_body() {
        let request = DirectionsRequest::new([73.8567, 18.5204], [72.8777, 19.076]);
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "coordinates": [[73.8567, 18.5204], [72.8777, 19.076]],
                "radiuses": [1000, 1000]
            })
        );
    }

    #[test]
    fn isochrones_request_body() {
        let request = IsochronesRequest::new([73.8567, 18.5204], 600.0, RangeKind::Time);
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "locations": [[73.8567, 18.5204]],
                "range": [600.0],
                "units": "km",
                "range_type": "time",
                "attributes": ["area"],
                "smoothing": 0.9,
                "options": {"avoid_features": ["highways"]}
            })
        );
    }

    #[test]
    fn parse_directions_feature() {
        let body = json!({
            "type": "FeatureCollection",
            "bbox": [72.8777, 18.5204, 73.8567, 19.076],
            "features": [{
                "type": "Feature",
                "bbox": [72.8777, 18.5204, 73.8567, 19.076],
                "properties": {
                    "segments": [{"distance": 148512.3, "duration": 10235.9, "steps": []}],
                    "summary": {"distance": 148512.3, "duration": 10235.9},
                    "way_points": [0, 2]
                },
                "geometry": {
                    "type": "LineString",
                    "coordinates": [[73.8567, 18.5204], [73.4, 18.75], [72.8777, 19.076]]
                }
            }],
            "metadata": {"service": "routing"}
        });
        let response: DirectionsResponse = serde_json::from_value(body).unwrap();
        assert_eq!(response.features.len(), 1);
        let props = &response.features[0].properties;
        assert_eq!(props.first_segment().unwrap().distance, 148_512.3);
    }

    #[test]
    fn parse_directions_with_elevation() {
        let body = json!({
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "properties": {"segments": [{"distance": 1200.0, "duration": 300.0, "ascent": 12.5}]},
                "geometry": {
                    "type": "LineString",
                    "coordinates": [[73.8567, 18.5204, 560.0], [73.86, 18.53, 572.5]]
                }
            }]
        });
        let response: DirectionsResponse = serde_json::from_value(body).unwrap();
        assert_eq!(
            response.features[0].geometry.positions(),
            vec![[73.8567, 18.5204], [73.86, 18.53]]
        );
    }

    #[test]
    fn parse_directions_without_segments() {
        let body = json!({
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "properties": {},
                "geometry": {"type": "LineString", "coordinates": []}
            }]
        });
        let response: DirectionsResponse = serde_json::from_value(body).unwrap();
        assert!(response.features[0].properties.first_segment().is_none());
    }

    #[test]
    fn parse_geocode_feature() {
        let body = json!({
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "geometry": {"type": "Point", "coordinates": [73.8567, 18.5204]},
                "properties": {"label": "Pune, MH, India", "layer": "locality", "confidence": 1}
            }]
        });
        let response: GeocodeResponse = serde_json::from_value(body).unwrap();
        let props = &response.features[0].properties;
        assert_eq!(props.label.as_deref(), Some("Pune, MH, India"));
        assert!(props.name.is_none());
    }

    #[test]
    fn error_body_messages() {
        let structured: RawErrorBody = serde_json::from_value(
            json!({"error": {"code": 2010, "message": "Could not find routable point"}}),
        )
        .unwrap();
        assert_eq!(
            structured.into_message().as_deref(),
            Some("Could not find routable point")
        );

        let plain: RawErrorBody =
            serde_json::from_value(json!({"error": "Daily quota reached or API key unauthorized"}))
                .unwrap();
        assert_eq!(
            plain.into_message().as_deref(),
            Some("Daily quota reached or API key unauthorized")
        );

        let geocoding: RawErrorBody = serde_json::from_value(
            json!({"geocoding": {"errors": ["'text' parameter is required"]}}),
        )
        .unwrap();
        assert_eq!(
            geocoding.into_message().as_deref(),
            Some("'text' parameter is required")
        );

        let empty: RawErrorBody = serde_json::from_value(json!({})).unwrap();
        assert!(empty.into_message().is_none());
    }
}
