//! The static flight network: airports and the routes between them.
//!
//! Both structures are built once at startup and never mutated, so they
//! can be shared between concurrent searches without locking.

mod directory;
mod graph;

pub use directory::AirportDirectory;
pub use graph::{Route, RouteEdge, RouteGraph, RouteStats};
