//! Domain types for the flight route planner.
//!
//! This module contains the core value types the search operates on.
//! All types enforce their invariants at construction time, so code that
//! receives these types can trust that they fit the packed search layout.

mod airport;
mod error;
mod packed;

pub use airport::{Airport, AirportIndex, is_real_code};
pub use error::DomainError;
pub use packed::PackedState;
