//! HTTP API module for the reform cost engine.
//!
//! This module provides the REST endpoints a presentation shell uses to run
//! simulations and inspect the regime in force on a date.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::SimulationRequest;
pub use response::{ApiError, RegimeResponse};
pub use state::AppState;
