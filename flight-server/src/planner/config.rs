//! Search configuration for the route planner.

use std::time::Duration;

/// Configuration parameters for route search.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Hop budget used when the request does not name one.
    pub default_hop_budget: u32,

    /// Largest hop budget a request may ask for.
    pub max_hop_budget: u32,

    /// Deadline for a single search (milliseconds).
    /// Searches running longer than this are abandoned by the caller.
    pub search_timeout_ms: u64,
}

impl SearchConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(default_hop_budget: u32, max_hop_budget: u32, search_timeout_ms: u64) -> Self {
        Self {
            default_hop_budget,
            max_hop_budget,
            search_timeout_ms,
        }
    }

    /// Returns the search deadline as a Duration.
    pub fn search_timeout(&self) -> Duration {
        Duration::from_millis(self.search_timeout_ms)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_hop_budget: 3,
            max_hop_budget: 99,
            search_timeout_ms: 2_000,
        }
    }
}
