//! Headless map surface - Implements MapSurfacePort without a renderer
//!
//! Tracks the base tile layer, the view and at most one layer per
//! [`LayerKind`]. The live layers can be exported as GeoJSON for any
//! external viewer.

use std::collections::HashMap;
use std::sync::Arc;

use application::ports::MapSurfacePort;
use domain::{
    Feature, FeatureCollection, Geometry, LatLngBounds, LayerGeometry, LayerKind, MapLayer,
    MapView, TileLayer,
};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::MapConfig;

/// Layers in drawing order
const LAYER_ORDER: [LayerKind; 2] = [LayerKind::Route, LayerKind::Isochrone];

/// Properties of an exported layer feature
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerFeatureProperties {
    /// Layer the feature belongs to
    pub layer: LayerKind,
    /// Stroke/fill color of the layer
    pub color: String,
}

/// In-memory map widget
#[derive(Debug)]
pub struct HeadlessMapSurface {
    base_layer: TileLayer,
    view: RwLock<MapView>,
    layers: RwLock<HashMap<LayerKind, MapLayer>>,
}

impl HeadlessMapSurface {
    /// Create the surface with its initial view and base tile layer
    #[must_use]
    pub fn init(config: &MapConfig) -> Arc<Self> {
        debug!(center = ?config.center, zoom = config.zoom, "Map initialized");
        Arc::new(Self {
            base_layer: config.tile_layer(),
            view: RwLock::new(config.view()),
            layers: RwLock::new(HashMap::new()),
        })
    }

    /// The base tile layer
    #[must_use]
    pub const fn base_layer(&self) -> &TileLayer {
        &self.base_layer
    }

    /// Bounds of the layer of `kind`, if present and non-empty
    #[must_use]
    pub fn layer_bounds(&self, kind: LayerKind) -> Option<LatLngBounds> {
        self.layers.read().get(&kind).and_then(MapLayer::bounds)
    }

    /// Number of geometry layers
    #[must_use]
    pub fn layer_count(&self) -> usize {
        self.layers.read().len()
    }

    /// Export the live layers as GeoJSON in `[lon, lat]` order
    #[must_use]
    pub fn to_feature_collection(&self) -> FeatureCollection<LayerFeatureProperties> {
        let layers = self.layers.read();
        let mut features = Vec::new();
        let mut bounds: Option<LatLngBounds> = None;

        for kind in LAYER_ORDER {
            let Some(layer) = layers.get(&kind) else {
                continue;
            };
            if let Some(layer_bounds) = layer.bounds() {
                bounds = Some(match bounds {
                    Some(mut b) => {
                        b.extend(layer_bounds.south_west);
                        b.extend(layer_bounds.north_east);
                        b
                    },
                    None => layer_bounds,
                });
            }

            let properties = LayerFeatureProperties {
                layer: kind,
                color: layer.style.color.clone(),
            };
            match &layer.geometry {
                LayerGeometry::Polyline(path) => features.push(Feature::new(
                    Geometry::LineString {
                        coordinates: path.iter().map(|p| [p.lng, p.lat]).collect(),
                    },
                    properties,
                )),
                LayerGeometry::GeoJson(geometries) => features.extend(
                    geometries
                        .iter()
                        .map(|g| Feature::new(g.clone(), properties.clone())),
                ),
            }
        }
        drop(layers);

        let mut collection = FeatureCollection::new(features);
        collection.bbox = bounds.map(|b| {
            vec![
                b.south_west.lng,
                b.south_west.lat,
                b.north_east.lng,
                b.north_east.lat,
            ]
        });
        collection
    }
}

impl MapSurfacePort for HeadlessMapSurface {
    fn add_or_replace(&self, kind: LayerKind, layer: MapLayer) {
        let bounds = layer.bounds();
        let replaced = self.layers.write().insert(kind, layer).is_some();

        if let Some(bounds) = bounds {
            self.view.write().fit_bounds(bounds);
        }
        debug!(%kind, replaced, fitted = bounds.is_some(), "Layer drawn");
    }

    fn remove(&self, kind: LayerKind) {
        if self.layers.write().remove(&kind).is_some() {
            debug!(%kind, "Layer removed");
        }
    }

    fn has_layer(&self, kind: LayerKind) -> bool {
        self.layers.read().contains_key(&kind)
    }

    fn layer(&self, kind: LayerKind) -> Option<MapLayer> {
        self.layers.read().get(&kind).cloned()
    }

    fn view(&self) -> MapView {
        *self.view.read()
    }
}

#[cfg(test)]
mod tests {
    use domain::{LatLng, LayerStyle};
    use serde_json::json;

    use super::*;

    fn route_layer() -> MapLayer {
        MapLayer::polyline(
            vec![LatLng::new(18.5204, 73.8567), LatLng::new(19.076, 72.8777)],
            LayerStyle::route(),
        )
    }

    fn isochrone_layer() -> MapLayer {
        MapLayer::geojson(
            vec![Geometry::Polygon {
                coordinates: vec![vec![
                    [73.80, 18.50],
                    [73.90, 18.50],
                    [73.90, 18.60],
                    [73.80, 18.50],
                ]],
            }],
            LayerStyle::isochrone(),
        )
    }

    #[test]
    fn init_uses_configured_view_and_tiles() {
        let map = HeadlessMapSurface::init(&MapConfig::default());
        let view = map.view();
        assert_eq!(view.center, LatLng::new(18.5204, 73.8567));
        assert_eq!(view.zoom, 13);
        assert_eq!(map.base_layer(), &TileLayer::default());
        assert_eq!(map.layer_count(), 0);
    }

    #[test]
    fn add_or_replace_keeps_one_layer_per_kind_and_fits() {
        let map = HeadlessMapSurface::init(&MapConfig::default());
        map.add_or_replace(LayerKind::Route, route_layer());
        map.add_or_replace(LayerKind::Route, route_layer());

        assert_eq!(map.layer_count(), 1);
        let bounds = map.layer_bounds(LayerKind::Route).unwrap();
        assert_eq!(bounds.south_west, LatLng::new(18.5204, 72.8777));
        assert_eq!(bounds.north_east, LatLng::new(19.076, 73.8567));
        assert_eq!(map.view().fitted_bounds, Some(bounds));
    }

    #[test]
    fn empty_layer_does_not_move_view() {
        let map = HeadlessMapSurface::init(&MapConfig::default());
        map.add_or_replace(
            LayerKind::Route,
            MapLayer::polyline(Vec::new(), LayerStyle::route()),
        );
        assert!(map.has_layer(LayerKind::Route));
        assert_eq!(map.view(), MapView::default());
    }

    #[test]
    fn remove_is_idempotent() {
        let map = HeadlessMapSurface::init(&MapConfig::default());
        map.add_or_replace(LayerKind::Isochrone, isochrone_layer());
        map.remove(LayerKind::Isochrone);
        map.remove(LayerKind::Isochrone);
        assert!(!map.has_layer(LayerKind::Isochrone));
        assert!(map.layer(LayerKind::Isochrone).is_none());
    }

    #[test]
    fn export_writes_service_order_with_layer_properties() {
        let map = HeadlessMapSurface::init(&MapConfig::default());
        map.add_or_replace(LayerKind::Isochrone, isochrone_layer());
        map.add_or_replace(LayerKind::Route, route_layer());

        let exported = serde_json::to_value(map.to_feature_collection()).unwrap();
        assert_eq!(exported["type"], "FeatureCollection");
        assert_eq!(exported["features"][0]["properties"], json!({"layer": "route", "color": "blue"}));
        assert_eq!(
            exported["features"][0]["geometry"]["coordinates"],
            json!([[73.8567, 18.5204], [72.8777, 19.076]])
        );
        assert_eq!(exported["features"][1]["properties"]["layer"], "isochrone");
        assert_eq!(exported["features"][1]["geometry"]["type"], "Polygon");
        assert_eq!(exported["bbox"], json!([72.8777, 18.5, 73.9, 19.076]));
    }

    #[test]
    fn export_of_empty_map() {
        let map = HeadlessMapSurface::init(&MapConfig::default());
        let exported = map.to_feature_collection();
        assert!(exported.is_empty());
        assert!(exported.bbox.is_none());
    }
}
