//! Map-order points and bounds

use serde::{Deserialize, Serialize};

/// A point in map order (latitude first)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    /// Latitude in degrees
    pub lat: f64,
    /// Longitude in degrees
    pub lng: f64,
}

impl LatLng {
    /// Create a new map point
    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// The `[lat, lng]` pair handed to the map widget
    #[must_use]
    pub const fn to_pair(self) -> [f64; 2] {
        [self.lat, self.lng]
    }
}

/// Axis-aligned bounding box in map order
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLngBounds {
    /// Minimum latitude / minimum longitude corner
    pub south_west: LatLng,
    /// Maximum latitude / maximum longitude corner
    pub north_east: LatLng,
}

impl LatLngBounds {
    /// Bounds covering a single point
    #[must_use]
    pub const fn from_point(point: LatLng) -> Self {
        Self {
            south_west: point,
            north_east: point,
        }
    }

    /// Smallest bounds containing every point, `None` for an empty input
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = LatLng>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        Some(iter.fold(Self::from_point(first), |mut bounds, p| {
            bounds.extend(p);
            bounds
        }))
    }

    /// Grow the bounds to include a point
    pub fn extend(&mut self, point: LatLng) {
        self.south_west.lat = self.south_west.lat.min(point.lat);
        self.south_west.lng = self.south_west.lng.min(point.lng);
        self.north_east.lat = self.north_east.lat.max(point.lat);
        self.north_east.lng = self.north_east.lng.max(point.lng);
    }

    /// Center of the box
    #[must_use]
    pub fn center(&self) -> LatLng {
        LatLng::new(
            (self.south_west.lat + self.north_east.lat) / 2.0,
            (self.south_west.lng + self.north_east.lng) / 2.0,
        )
    }
}
