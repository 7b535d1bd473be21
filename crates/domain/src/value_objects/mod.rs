//! Value Objects - Immutable, identity-less domain primitives

mod coordinate;
mod lat_lng;
mod range_kind;
mod travel_profile;

pub use coordinate::Coordinate;
pub use lat_lng::{LatLng, LatLngBounds};
pub use range_kind::RangeKind;
pub use travel_profile::TravelProfile;
