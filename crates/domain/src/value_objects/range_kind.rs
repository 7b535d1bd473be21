//! Isochrone range kind value object

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::DomainError;

/// How an isochrone range value is interpreted by the service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RangeKind {
    /// Range is a travel distance
    #[default]
    Distance,
    /// Range is a travel time in seconds
    Time,
}

impl RangeKind {
    /// Wire name of the range kind
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Distance => "distance",
            Self::Time => "time",
        }
    }
}

impl fmt::Display for RangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RangeKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "distance" => Ok(Self::Distance),
            "time" => Ok(Self::Time),
            _ => Err(DomainError::InvalidRangeKind(s.to_string())),
        }
    }
}
