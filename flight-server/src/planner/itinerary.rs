//! Turning a packed search path into per-flight legs.

use crate::domain::{AirportIndex, PackedState};
use crate::network::AirportDirectory;

/// One flight of an itinerary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flight {
    /// Departure airport code
    pub from: String,

    /// Arrival airport code
    pub to: String,

    /// Length of this flight alone
    pub distance_km: u32,
}

/// A complete itinerary: the flights in order and their total length.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Itinerary {
    pub total_distance_km: u32,
    pub flights: Vec<Flight>,
}

impl Itinerary {
    /// Decode a path returned by the route search.
    ///
    /// Each entry names the airport a flight departs from and the
    /// cumulative distance at its end. The flight lands at the next
    /// entry's airport, or at `destination` for the last entry. An empty
    /// path gives an empty itinerary.
    pub fn from_path(
        path: &[PackedState],
        destination: AirportIndex,
        directory: &AirportDirectory,
    ) -> Self {
        let mut flights = Vec::with_capacity(path.len());
        let mut travelled = 0u32;

        for (i, state) in path.iter().enumerate() {
            let to = path
                .get(i + 1)
                .map(|next| next.airport())
                .unwrap_or(destination);
            let cumulative = u32::from(state.distance());

            flights.push(Flight {
                from: directory.code_of(state.airport()).to_string(),
                to: directory.code_of(to).to_string(),
                distance_km: cumulative - travelled,
            });
            travelled = cumulative;
        }

        Self {
            total_distance_km: travelled,
            flights,
        }
    }

    /// True if there are no flights.
    pub fn is_empty(&self) -> bool {
        self.flights.is_empty()
    }

    /// Number of flights.
    pub fn legs(&self) -> usize {
        self.flights.len()
    }
}
