//! Validation of route requests and the one-shot planning entry point.

use tracing::info;

use crate::dataset::Dataset;
use crate::domain::AirportIndex;
use crate::network::AirportDirectory;

use super::config::SearchConfig;
use super::itinerary::Itinerary;
use super::search::RouteFinder;

/// Why a route request could not be answered.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    /// Origin code does not name a known airport
    #[error("no source airport found: {0}")]
    UnknownSource(String),

    /// Destination code does not name a known airport
    #[error("no destination airport found: {0}")]
    UnknownDestination(String),

    /// Both codes name the same airport
    #[error("source and destination are the same airport: {0}")]
    SameAirport(String),

    /// Hop budget outside the accepted range
    #[error("hop budget must be between 0 and {max}, got {requested}")]
    HopBudgetOutOfRange { requested: i64, max: u32 },

    /// No itinerary within the hop budget
    #[error("no flights found")]
    NoRouteFound,
}

/// A route request as received from a caller, before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteQuery {
    /// Origin IATA or ICAO code
    pub source: String,

    /// Destination IATA or ICAO code
    pub destination: String,

    /// Requested hop budget; the configured default when absent
    pub hop_budget: Option<i64>,
}

/// A request whose codes and hop budget have been checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedQuery {
    pub source: AirportIndex,
    pub destination: AirportIndex,
    pub hop_budget: u32,
}

impl RouteQuery {
    /// Create a new query.
    pub fn new(
        source: impl Into<String>,
        destination: impl Into<String>,
        hop_budget: Option<i64>,
    ) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
            hop_budget,
        }
    }

    /// Resolve codes to indices and check the hop budget.
    pub fn resolve(
        &self,
        directory: &AirportDirectory,
        config: &SearchConfig,
    ) -> Result<ResolvedQuery, QueryError> {
        let source = directory
            .index_of(&self.source)
            .ok_or_else(|| QueryError::UnknownSource(self.source.clone()))?;
        let destination = directory
            .index_of(&self.destination)
            .ok_or_else(|| QueryError::UnknownDestination(self.destination.clone()))?;

        if source == destination {
            return Err(QueryError::SameAirport(self.source.clone()));
        }

        let requested = self
            .hop_budget
            .unwrap_or(i64::from(config.default_hop_budget));
        let hop_budget = u32::try_from(requested)
            .ok()
            .filter(|budget| *budget <= config.max_hop_budget)
            .ok_or(QueryError::HopBudgetOutOfRange {
                requested,
                max: config.max_hop_budget,
            })?;

        Ok(ResolvedQuery {
            source,
            destination,
            hop_budget,
        })
    }
}

/// Validate a query, search once, and format the result.
pub fn plan_route(
    dataset: &Dataset,
    config: &SearchConfig,
    query: &RouteQuery,
) -> Result<Itinerary, QueryError> {
    let resolved = query.resolve(dataset.directory(), config)?;

    info!(
        source = %resolved.source,
        destination = %resolved.destination,
        hop_budget = resolved.hop_budget,
        "Calculating route"
    );

    let finder = RouteFinder::new(dataset.graph());
    let path = finder.find(resolved.source, resolved.destination, resolved.hop_budget);
    if path.is_empty() {
        return Err(QueryError::NoRouteFound);
    }

    Ok(Itinerary::from_path(
        &path,
        resolved.destination,
        dataset.directory(),
    ))
}
