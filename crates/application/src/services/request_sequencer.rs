//! Per-action request sequencing
//!
//! Requests are not cancelled. Instead every request takes a ticket, and
//! only the holder of the newest ticket for its action may apply a result.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Planner actions that are sequenced independently
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlannerAction {
    /// Route submit
    Route,
    /// Isochrone submit
    Isochrone,
    /// Current-location lookup
    Locate,
}

impl fmt::Display for PlannerAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Route => f.write_str("route"),
            Self::Isochrone => f.write_str("isochrone"),
            Self::Locate => f.write_str("locate"),
        }
    }
}

/// Proof of having issued a request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket {
    action: PlannerAction,
    seq: u64,
}

impl RequestTicket {
    /// Action the ticket belongs to
    #[must_use]
    pub const fn action(&self) -> PlannerAction {
        self.action
    }

    /// Sequence number within the action
    #[must_use]
    pub const fn seq(&self) -> u64 {
        self.seq
    }
}

/// Monotonic counters, one per action
#[derive(Debug, Default)]
pub struct RequestSequencer {
    route: AtomicU64,
    isochrone: AtomicU64,
    locate: AtomicU64,
}

impl RequestSequencer {
    /// Create a sequencer with all counters at zero
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    const fn counter(&self, action: PlannerAction) -> &AtomicU64 {
        match action {
            PlannerAction::Route => &self.route,
            PlannerAction::Isochrone => &self.isochrone,
            PlannerAction::Locate => &self.locate,
        }
    }

    /// Issue the next ticket, superseding all earlier ones for `action`
    pub fn issue(&self, action: PlannerAction) -> RequestTicket {
        let seq = self.counter(action).fetch_add(1, Ordering::AcqRel) + 1;
        RequestTicket { action, seq }
    }

    /// Supersede every outstanding ticket for `action` without issuing one
    pub fn invalidate(&self, action: PlannerAction) {
        self.counter(action).fetch_add(1, Ordering::AcqRel);
    }

    /// Whether `ticket` is still the newest for its action
    #[must_use]
    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        self.counter(ticket.action).load(Ordering::Acquire) == ticket.seq
    }
}
