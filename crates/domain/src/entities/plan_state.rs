//! Planner form state

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{IsochroneResult, RouteResult};
use crate::errors::DomainError;
use crate::value_objects::{RangeKind, TravelProfile};

/// Isochrone range used until the user changes it
pub const DEFAULT_RANGE: f64 = 600.0;

/// A text field of the planner form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormField {
    /// Origin place text
    Origin,
    /// Destination place text
    Destination,
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Origin => f.write_str("origin"),
            Self::Destination => f.write_str("destination"),
        }
    }
}

impl FromStr for FormField {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "origin" | "from" => Ok(Self::Origin),
            "destination" | "to" => Ok(Self::Destination),
            other => Err(DomainError::ValidationError(format!(
                "unknown form field '{other}'"
            ))),
        }
    }
}

/// Everything the planner form shows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanState {
    /// Origin place text
    pub origin_text: String,
    /// Destination place text
    pub destination_text: String,
    /// Selected travel profile
    pub profile: TravelProfile,
    /// Last successful route
    pub route: Option<RouteResult>,
    /// Last successful isochrone
    pub isochrone: Option<IsochroneResult>,
    /// Distance of the last route in meters
    pub distance_meters: Option<f64>,
    /// Duration of the last route in seconds
    pub duration_seconds: Option<f64>,
    /// Isochrone range value
    pub range: f64,
    /// Isochrone range interpretation
    pub range_kind: RangeKind,
    /// Shared error display
    pub error_message: Option<String>,
}

impl Default for PlanState {
    fn default() -> Self {
        Self {
            origin_text: String::new(),
            destination_text: String::new(),
            profile: TravelProfile::default(),
            route: None,
            isochrone: None,
            distance_meters: None,
            duration_seconds: None,
            range: DEFAULT_RANGE,
            range_kind: RangeKind::default(),
            error_message: None,
        }
    }
}

impl PlanState {
    /// Text of a form field
    #[must_use]
    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Origin => &self.origin_text,
            FormField::Destination => &self.destination_text,
        }
    }

    /// Overwrite a form field
    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        match field {
            FormField::Origin => self.origin_text = value.into(),
            FormField::Destination => self.destination_text = value.into(),
        }
    }

    /// Store a successful route
    pub fn apply_route(&mut self, route: RouteResult) {
        self.distance_meters = Some(route.distance_meters);
        self.duration_seconds = Some(route.duration_seconds);
        self.route = Some(route);
    }

    /// Reset route results and the origin/destination text
    pub fn reset_route(&mut self) {
        self.route = None;
        self.distance_meters = None;
        self.duration_seconds = None;
        self.origin_text.clear();
        self.destination_text.clear();
        self.error_message = None;
    }

    /// Reset isochrone results, range settings and the origin text
    pub fn reset_isochrone(&mut self) {
        self.isochrone = None;
        self.range = DEFAULT_RANGE;
        self.range_kind = RangeKind::default();
        self.origin_text.clear();
        self.error_message = None;
    }
}
