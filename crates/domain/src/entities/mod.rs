//! Domain entities - Planner results and form state

mod isochrone_result;
mod plan_state;
mod route_result;

pub use isochrone_result::{IsochroneProperties, IsochroneResult};
pub use plan_state::{DEFAULT_RANGE, FormField, PlanState};
pub use route_result::RouteResult;
