//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::planner::{Flight, Itinerary, RouteQuery};

/// Query parameters of a route request.
///
/// The short names `sou`, `dest` and `maxs` are accepted as well.
#[derive(Debug, Default, Deserialize)]
pub struct RouteRequest {
    /// Origin IATA or ICAO code
    #[serde(default, alias = "sou")]
    pub source: String,

    /// Destination IATA or ICAO code
    #[serde(default, alias = "dest")]
    pub destination: String,

    /// Hop budget; empty or absent means the configured default
    #[serde(default, alias = "maxs", alias = "hops")]
    pub max_stops: Option<String>,
}

impl RouteRequest {
    /// Convert into a planner query.
    ///
    /// Returns the offending text if the hop budget is not an integer.
    pub fn into_query(self) -> Result<RouteQuery, String> {
        let hop_budget = match self.max_stops.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(raw.parse::<i64>().map_err(|_| raw.to_string())?),
        };
        Ok(RouteQuery::new(self.source, self.destination, hop_budget))
    }
}

/// A single flight in a route response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightResult {
    /// Departure airport code
    pub from: String,

    /// Arrival airport code
    pub to: String,

    /// Length of this flight
    pub distance_km: u32,
}

/// Response for a successful route request.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteResponse {
    /// Sum of all flight distances
    pub total_distance_km: u32,

    /// Flights in travel order
    pub flights: Vec<FlightResult>,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

// Conversion implementations

impl From<&Flight> for FlightResult {
    fn from(flight: &Flight) -> Self {
        Self {
            from: flight.from.clone(),
            to: flight.to.clone(),
            distance_km: flight.distance_km,
        }
    }
}

impl From<&Itinerary> for RouteResponse {
    fn from(itinerary: &Itinerary) -> Self {
        Self {
            total_distance_km: itinerary.total_distance_km,
            flights: itinerary.flights.iter().map(FlightResult::from).collect(),
        }
    }
}
