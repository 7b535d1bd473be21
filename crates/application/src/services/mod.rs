//! Application services - Use case implementations

mod request_sequencer;
mod route_planner;

pub use request_sequencer::{PlannerAction, RequestSequencer, RequestTicket};
pub use route_planner::{
    ISOCHRONE_ERROR_PREFIX, LOCATION_ERROR_PREFIX, PLACE_NAME_ERROR_PREFIX, ROUTE_ERROR_PREFIX,
    RoutePlanner, SubmitOutcome,
};
