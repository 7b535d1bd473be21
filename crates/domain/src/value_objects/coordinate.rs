//! Geographic coordinate value object
//!
//! The routing service speaks `[longitude, latitude]` while the map surface
//! speaks `[latitude, longitude]`. A [`Coordinate`] is always stored in the
//! service order; [`Coordinate::to_lat_lng`] is the single place where the
//! axes are swapped for the map.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::LatLng;
use crate::errors::DomainError;
use crate::geojson::Position;

/// A WGS84 coordinate in routing-service order (longitude first)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Longitude in degrees (-180 to 180)
    longitude: f64,
    /// Latitude in degrees (-90 to 90)
    latitude: f64,
}

impl Coordinate {
    /// Create a new coordinate with validation
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCoordinates` if latitude is not in
    /// [-90, 90] or longitude is not in [-180, 180]
    pub fn new(longitude: f64, latitude: f64) -> Result<Self, DomainError> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(DomainError::invalid_coordinates(latitude, longitude));
        }
        Ok(Self {
            longitude,
            latitude,
        })
    }

    /// Create a coordinate without validation (for trusted sources)
    #[must_use]
    pub const fn new_unchecked(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
        }
    }

    /// Create a coordinate from a GeoJSON `[lon, lat]` position
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCoordinates` for out-of-range positions
    pub fn from_position(position: Position) -> Result<Self, DomainError> {
        let [longitude, latitude] = position;
        Self::new(longitude, latitude)
    }

    /// Get the longitude
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Get the latitude
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// The `[lon, lat]` position sent to the routing service
    #[must_use]
    pub const fn to_position(self) -> Position {
        [self.longitude, self.latitude]
    }

    /// Swap into map order
    #[must_use]
    pub const fn to_lat_lng(self) -> LatLng {
        LatLng::new(self.latitude, self.longitude)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}

/// Common locations
impl Coordinate {
    /// Pune, India
    #[must_use]
    pub const fn pune() -> Self {
        Self::new_unchecked(73.8567, 18.5204)
    }

    /// Mumbai, India
    #[must_use]
    pub const fn mumbai() -> Self {
        Self::new_unchecked(72.8777, 19.076)
    }
}
