//! Travel profile value object

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::DomainError;

/// A named mode of transport understood by the routing service
///
/// The name is passed through opaquely. Only names that could not form a
/// URL path segment are rejected; unknown but well-formed names are allowed
/// so new service profiles work without a release.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TravelProfile(String);

impl TravelProfile {
    /// Car
    pub const DRIVING_CAR: &'static str = "driving-car";
    /// Heavy goods vehicle
    pub const DRIVING_HGV: &'static str = "driving-hgv";
    /// Regular bicycle
    pub const CYCLING_REGULAR: &'static str = "cycling-regular";
    /// Road bike
    pub const CYCLING_ROAD: &'static str = "cycling-road";
    /// Mountain bike
    pub const CYCLING_MOUNTAIN: &'static str = "cycling-mountain";
    /// E-bike
    pub const CYCLING_ELECTRIC: &'static str = "cycling-electric";
    /// Pedestrian
    pub const FOOT_WALKING: &'static str = "foot-walking";
    /// Hiking
    pub const FOOT_HIKING: &'static str = "foot-hiking";
    /// Wheelchair
    pub const WHEELCHAIR: &'static str = "wheelchair";

    /// All profiles offered by the public service
    pub const KNOWN: [&'static str; 9] = [
        Self::DRIVING_CAR,
        Self::DRIVING_HGV,
        Self::CYCLING_REGULAR,
        Self::CYCLING_ROAD,
        Self::CYCLING_MOUNTAIN,
        Self::CYCLING_ELECTRIC,
        Self::FOOT_WALKING,
        Self::FOOT_HIKING,
        Self::WHEELCHAIR,
    ];

    /// Parse a profile name
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidProfile` if the name is empty or
    /// contains characters other than ASCII alphanumerics, `-` and `_`.
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty()
            || !trimmed
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(DomainError::InvalidProfile(name));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// The profile name as sent to the service
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is one of the publicly documented profiles
    #[must_use]
    pub fn is_known(&self) -> bool {
        Self::KNOWN.contains(&self.0.as_str())
    }
}

impl Default for TravelProfile {
    fn default() -> Self {
        Self(Self::DRIVING_CAR.to_string())
    }
}

impl fmt::Display for TravelProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for TravelProfile {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for TravelProfile {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TravelProfile> for String {
    fn from(profile: TravelProfile) -> Self {
        profile.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_driving_car() {
        assert_eq!(TravelProfile::default().as_str(), "driving-car");
    }

    #[test]
    fn known_profiles_parse() {
        for name in TravelProfile::KNOWN {
            let profile: TravelProfile = name.parse().unwrap();
            assert!(profile.is_known());
            assert_eq!(profile.to_string(), name);
        }
    }

    #[test]
    fn unknown_profile_passes_through() {
        let profile = TravelProfile::new("driving-truck").unwrap();
        assert!(!profile.is_known());
        assert_eq!(profile.as_str(), "driving-truck");
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        let profile = TravelProfile::new("  foot-walking ").unwrap();
        assert_eq!(profile.as_str(), "foot-walking");
    }

    #[test]
    fn rejects_empty_and_path_characters() {
        assert!(TravelProfile::new("").is_err());
        assert!(TravelProfile::new("   ").is_err());
        assert!(TravelProfile::new("driving/car").is_err());
        assert!(TravelProfile::new("driving car").is_err());
        assert!(TravelProfile::new("../admin").is_err());
    }

    #[test]
    fn serde_is_a_plain_string() {
        let json = serde_json::to_string(&TravelProfile::default()).unwrap();
        assert_eq!(json, "\"driving-car\"");

        let parsed: TravelProfile = serde_json::from_str("\"cycling-road\"").unwrap();
        assert_eq!(parsed.as_str(), "cycling-road");

        assert!(serde_json::from_str::<TravelProfile>("\"a/b\"").is_err());
    }
}
