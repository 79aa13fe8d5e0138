//! Route planner using bounded-hop relaxation.
//!
//! This module implements the core planning algorithm that answers:
//! "what is the shortest way from A to B with at most N connections?"
//!
//! The search relaxes one layer per allowed connection over packed
//! (predecessor, distance) states, then walks the layers back to recover
//! the flights taken.

mod config;
mod itinerary;
mod query;
mod search;

#[cfg(test)]
mod fixtures;

pub use config::SearchConfig;
pub use itinerary::{Flight, Itinerary};
pub use query::{QueryError, ResolvedQuery, RouteQuery, plan_route};
pub use search::RouteFinder;
