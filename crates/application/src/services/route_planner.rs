//! Route planner controller
//!
//! Holds the form state, dispatches submits to the geocoding, routing and
//! isochrone ports, and reconciles their results into map layers or the
//! shared error message. Failures never escape this type: every action
//! reports a [`SubmitOutcome`] and leaves its message in the state.

use std::{fmt, sync::Arc};

use domain::{
    Coordinate, FormField, IsochroneResult, LayerKind, LayerStyle, MapLayer, PlanState,
    RangeKind, RouteResult, TravelProfile,
};
use parking_lot::RwLock;
use tracing::{debug, info, instrument, warn};

use super::request_sequencer::{PlannerAction, RequestSequencer, RequestTicket};
use crate::{
    error::ApplicationError,
    ports::{
        GeocodingPort, GeolocationPort, IsochronePort, MapSurfacePort, RoutingPort,
        UnsupportedGeolocation,
    },
};

/// Prefix of route submit errors
pub const ROUTE_ERROR_PREFIX: &str = "Error fetching route: ";
/// Prefix of isochrone submit errors
pub const ISOCHRONE_ERROR_PREFIX: &str = "Error fetching isochrone: ";
/// Prefix of device position errors
pub const LOCATION_ERROR_PREFIX: &str = "Error fetching user's location: ";
/// Prefix of reverse geocoding errors during a location lookup
pub const PLACE_NAME_ERROR_PREFIX: &str = "Error fetching place name: ";

/// How a planner action ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The result was applied to state and map
    Succeeded,
    /// The error message was set
    Failed,
    /// A newer request of the same action was issued; nothing was applied
    Superseded,
}

/// The form/state controller
pub struct RoutePlanner {
    geocoding: Arc<dyn GeocodingPort>,
    routing: Arc<dyn RoutingPort>,
    isochrones: Arc<dyn IsochronePort>,
    geolocation: Arc<dyn GeolocationPort>,
    map: Arc<dyn MapSurfacePort>,
    state: RwLock<PlanState>,
    sequencer: RequestSequencer,
}

impl fmt::Debug for RoutePlanner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RoutePlanner")
            .field("state", &*self.state.read())
            .finish_non_exhaustive()
    }
}

impl RoutePlanner {
    /// Create a planner over an initialized map surface
    ///
    /// Geolocation is unsupported until [`Self::with_geolocation`] is used.
    pub fn new(
        geocoding: Arc<dyn GeocodingPort>,
        routing: Arc<dyn RoutingPort>,
        isochrones: Arc<dyn IsochronePort>,
        map: Arc<dyn MapSurfacePort>,
    ) -> Self {
        Self {
            geocoding,
            routing,
            isochrones,
            geolocation: Arc::new(UnsupportedGeolocation),
            map,
            state: RwLock::new(PlanState::default()),
            sequencer: RequestSequencer::new(),
        }
    }

    /// Use a device position source
    #[must_use]
    pub fn with_geolocation(mut self, geolocation: Arc<dyn GeolocationPort>) -> Self {
        self.geolocation = geolocation;
        self
    }

    /// Snapshot of the form state
    pub fn state(&self) -> PlanState {
        self.state.read().clone()
    }

    /// The map surface this planner draws on
    pub fn map(&self) -> &Arc<dyn MapSurfacePort> {
        &self.map
    }

    /// Set the origin text
    pub fn set_origin(&self, text: impl Into<String>) {
        self.state.write().origin_text = text.into();
    }

    /// Set the destination text
    pub fn set_destination(&self, text: impl Into<String>) {
        self.state.write().destination_text = text.into();
    }

    /// Set either text field
    pub fn set_field(&self, field: FormField, text: impl Into<String>) {
        self.state.write().set_field(field, text);
    }

    /// Select the travel profile
    pub fn set_profile(&self, profile: TravelProfile) {
        self.state.write().profile = profile;
    }

    /// Set the isochrone range value
    pub fn set_range(&self, range: f64) {
        self.state.write().range = range;
    }

    /// Set the isochrone range interpretation
    pub fn set_range_kind(&self, range_kind: RangeKind) {
        self.state.write().range_kind = range_kind;
    }

    /// Geocode origin and destination, route between them and draw the route
    #[instrument(skip(self))]
    pub async fn submit_route(&self) -> SubmitOutcome {
        let ticket = self.sequencer.issue(PlannerAction::Route);
        let (origin, destination, profile) = {
            let mut state = self.state.write();
            state.error_message = None;
            (
                state.origin_text.clone(),
                state.destination_text.clone(),
                state.profile.clone(),
            )
        };
        info!(%origin, %destination, %profile, seq = ticket.seq(), "Submitting route");

        let result = self.fetch_route(&origin, &destination, &profile).await;

        if !self.sequencer.is_current(ticket) {
            debug!(action = %ticket.action(), seq = ticket.seq(), "Discarding superseded response");
            return SubmitOutcome::Superseded;
        }

        match result {
            Ok(route) => {
                info!(summary = %route.format_summary(), "Route found");
                self.map.add_or_replace(
                    LayerKind::Route,
                    MapLayer::polyline(route.path.clone(), LayerStyle::route()),
                );
                self.state.write().apply_route(route);
                SubmitOutcome::Succeeded
            },
            Err(e) => {
                Self::log_failure(ticket, &e);
                self.set_error(format!("{ROUTE_ERROR_PREFIX}{e}"));
                SubmitOutcome::Failed
            },
        }
    }

    async fn fetch_route(
        &self,
        origin: &str,
        destination: &str,
        profile: &TravelProfile,
    ) -> Result<RouteResult, ApplicationError> {
        let origin = self.geocoding.forward(origin).await?;
        let destination = self.geocoding.forward(destination).await?;
        self.routing.route(origin, destination, profile).await
    }

    /// Geocode the origin, compute its isochrone and draw it
    #[instrument(skip(self))]
    pub async fn submit_isochrone(&self) -> SubmitOutcome {
        let ticket = self.sequencer.issue(PlannerAction::Isochrone);
        let (origin, profile, range, range_kind) = {
            let mut state = self.state.write();
            state.error_message = None;
            (
                state.origin_text.clone(),
                state.profile.clone(),
                state.range,
                state.range_kind,
            )
        };
        info!(%origin, %profile, range, %range_kind, seq = ticket.seq(), "Submitting isochrone");

        let result = self
            .fetch_isochrone(&origin, &profile, range, range_kind)
            .await;

        if !self.sequencer.is_current(ticket) {
            debug!(action = %ticket.action(), seq = ticket.seq(), "Discarding superseded response");
            return SubmitOutcome::Superseded;
        }

        match result {
            Ok(isochrone) => {
                info!(polygons = isochrone.features.len(), "Isochrone found");
                self.map.add_or_replace(
                    LayerKind::Isochrone,
                    MapLayer::geojson(isochrone.geometries(), LayerStyle::isochrone()),
                );
                self.state.write().isochrone = Some(isochrone);
                SubmitOutcome::Succeeded
            },
            Err(e) => {
                Self::log_failure(ticket, &e);
                self.set_error(format!("{ISOCHRONE_ERROR_PREFIX}{e}"));
                SubmitOutcome::Failed
            },
        }
    }

    async fn fetch_isochrone(
        &self,
        origin: &str,
        profile: &TravelProfile,
        range: f64,
        range_kind: RangeKind,
    ) -> Result<IsochroneResult, ApplicationError> {
        if !range.is_finite() || range <= 0.0 {
            return Err(ApplicationError::InvalidInput(format!(
                "range must be a positive number, got {range}"
            )));
        }
        let origin = self.geocoding.forward(origin).await?;
        self.isochrones
            .isochrone(origin, profile, range, range_kind)
            .await
    }

    /// Remove the route layer and reset route fields
    #[instrument(skip(self))]
    pub fn clear_route(&self) {
        self.sequencer.invalidate(PlannerAction::Route);
        self.map.remove(LayerKind::Route);
        self.state.write().reset_route();
        debug!("Route cleared");
    }

    /// Remove the isochrone layer and reset isochrone fields
    #[instrument(skip(self))]
    pub fn clear_isochrone(&self) {
        self.sequencer.invalidate(PlannerAction::Isochrone);
        self.map.remove(LayerKind::Isochrone);
        self.state.write().reset_isochrone();
        debug!("Isochrone cleared");
    }

    /// Fill `field` with the name of the place the device is at
    #[instrument(skip(self))]
    pub async fn use_current_location(&self, field: FormField) -> SubmitOutcome {
        let ticket = self.sequencer.issue(PlannerAction::Locate);

        let result = match self.geolocation.current_position().await {
            Ok(position) => {
                debug!(%position, "Device position acquired");
                self.reverse_label(position).await
            },
            Err(ApplicationError::GeolocationUnsupported) => {
                Err(ApplicationError::GeolocationUnsupported.to_string())
            },
            Err(e) => Err(format!("{LOCATION_ERROR_PREFIX}{e}")),
        };

        if !self.sequencer.is_current(ticket) {
            debug!(action = %ticket.action(), seq = ticket.seq(), "Discarding superseded response");
            return SubmitOutcome::Superseded;
        }

        match result {
            Ok(label) => {
                info!(%field, %label, "Filled field from current location");
                self.state.write().set_field(field, label);
                SubmitOutcome::Succeeded
            },
            Err(message) => {
                warn!(%message, "Current location lookup failed");
                self.set_error(message);
                SubmitOutcome::Failed
            },
        }
    }

    async fn reverse_label(&self, position: Coordinate) -> Result<String, String> {
        self.geocoding
            .reverse(position)
            .await
            .map_err(|e| format!("{PLACE_NAME_ERROR_PREFIX}{e}"))
    }

    fn log_failure(ticket: RequestTicket, error: &ApplicationError) {
        if error.is_empty_result() {
            info!(action = %ticket.action(), %error, "Service found nothing");
        } else {
            warn!(action = %ticket.action(), %error, "Request failed");
        }
    }

    fn set_error(&self, message: String) {
        self.state.write().error_message = Some(message);
    }
}
