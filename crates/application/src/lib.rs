//! Application layer - Use cases and orchestration
//!
//! Contains the port definitions for the external routing service, the
//! device position and the map surface, and the [`RoutePlanner`] controller
//! that orchestrates them.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
