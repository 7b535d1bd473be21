//! Device position configuration

use domain::{Coordinate, DomainError};
use serde::{Deserialize, Serialize};

/// Fixed device position (latitude/longitude pair)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocationConfig {
    /// Latitude (-90.0 to 90.0)
    pub latitude: f64,
    /// Longitude (-180.0 to 180.0)
    pub longitude: f64,
}

impl GeoLocationConfig {
    /// Convert to a domain coordinate
    ///
    /// # Errors
    ///
    /// Returns an error if the position is out of range.
    pub fn to_coordinate(&self) -> Result<Coordinate, DomainError> {
        Coordinate::new(self.longitude, self.latitude)
    }
}
