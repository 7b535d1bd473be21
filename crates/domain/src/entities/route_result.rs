//! Route result entity

use serde::{Deserialize, Serialize};

use crate::value_objects::{LatLng, LatLngBounds};

/// A computed route between two points
///
/// Only the first itinerary and its first segment are represented.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteResult {
    /// Path in map order
    pub path: Vec<LatLng>,
    /// Length of the first segment in meters
    pub distance_meters: f64,
    /// Travel time of the first segment in seconds
    pub duration_seconds: f64,
}

impl RouteResult {
    /// Bounds of the path
    #[must_use]
    pub fn bounds(&self) -> Option<LatLngBounds> {
        LatLngBounds::from_points(self.path.iter().copied())
    }

    /// Distance in kilometers
    #[must_use]
    pub fn distance_km(&self) -> f64 {
        self.distance_meters / 1000.0
    }

    /// Duration in whole minutes, rounded
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn duration_minutes(&self) -> u64 {
        (self.duration_seconds / 60.0).round().max(0.0) as u64
    }

    /// Compact one-line summary
    #[must_use]
    pub fn format_summary(&self) -> String {
        format!(
            "{:.1} km, {} min ({} points)",
            self.distance_km(),
            self.duration_minutes(),
            self.path.len()
        )
    }
}
