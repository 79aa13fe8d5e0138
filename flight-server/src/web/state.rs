//! Application state for the web layer.

use std::sync::Arc;

use crate::dataset::Dataset;
use crate::planner::SearchConfig;

/// Shared application state.
///
/// Built once at startup and cloned cheaply into every request.
#[derive(Clone)]
pub struct AppState {
    /// Airports and routes, read-only after loading
    pub dataset: Arc<Dataset>,

    /// Route planner configuration
    pub config: Arc<SearchConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(dataset: Dataset, config: SearchConfig) -> Self {
        Self {
            dataset: Arc::new(dataset),
            config: Arc::new(config),
        }
    }
}
