//! Web layer for the flight route planner.
//!
//! Provides the HTTP endpoint for route queries and a health probe.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
