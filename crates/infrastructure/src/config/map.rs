//! Map surface configuration

use domain::map::{DEFAULT_CENTER, DEFAULT_ZOOM, OSM_ATTRIBUTION, OSM_TILE_URL};
use domain::{LatLng, MapView, TileLayer};
use serde::{Deserialize, Serialize};

/// Highest zoom level OpenStreetMap tiles are rendered at
pub const MAX_ZOOM: u8 = 19;

/// Initial view and base tile layer of the map surface
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapConfig {
    /// Initial view center
    #[serde(default = "default_center")]
    pub center: LatLng,

    /// Initial zoom level
    #[serde(default = "default_zoom")]
    pub zoom: u8,

    /// Tile URL template
    #[serde(default = "default_tile_url")]
    pub tile_url: String,

    /// Tile attribution
    #[serde(default = "default_attribution")]
    pub attribution: String,
}

const fn default_center() -> LatLng {
    DEFAULT_CENTER
}

const fn default_zoom() -> u8 {
    DEFAULT_ZOOM
}

fn default_tile_url() -> String {
    OSM_TILE_URL.to_string()
}

fn default_attribution() -> String {
    OSM_ATTRIBUTION.to_string()
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            center: default_center(),
            zoom: default_zoom(),
            tile_url: default_tile_url(),
            attribution: default_attribution(),
        }
    }
}

impl MapConfig {
    /// Initial view
    #[must_use]
    pub const fn view(&self) -> MapView {
        MapView::new(self.center, self.zoom)
    }

    /// Base tile layer
    #[must_use]
    pub fn tile_layer(&self) -> TileLayer {
        TileLayer {
            url_template: self.tile_url.clone(),
            attribution: self.attribution.clone(),
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if !(-90.0..=90.0).contains(&self.center.lat) || !(-180.0..=180.0).contains(&self.center.lng)
        {
            return Err(format!(
                "map.center ({}, {}) is not a valid coordinate",
                self.center.lat, self.center.lng
            ));
        }

        if self.zoom > MAX_ZOOM {
            return Err(format!("map.zoom must be {MAX_ZOOM} or less"));
        }

        if self.tile_url.is_empty() {
            return Err("map.tile_url must not be empty".to_string());
        }

        Ok(())
    }
}
