//! Directed route graph.

use serde::Deserialize;

use crate::domain::{AirportIndex, PackedState};

/// A route record as it appears in the generated dataset.
///
/// Indices are unchecked; [`RouteGraph::from_routes`] filters them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Route {
    /// Departure airport index
    pub from: u32,
    /// Arrival airport index
    pub to: u32,
    /// Great-circle distance in kilometres
    pub distance_km: u32,
}

impl Route {
    /// Create a route record.
    pub fn new(from: u32, to: u32, distance_km: u32) -> Self {
        Self {
            from,
            to,
            distance_km,
        }
    }
}

/// One outgoing flight from an airport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteEdge {
    /// Destination airport
    pub to: AirportIndex,

    /// Great-circle distance, always below [`PackedState::DISTANCE_CAP`]
    pub distance_km: u16,
}

/// Counts of what happened to the input routes during graph construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RouteStats {
    /// Routes stored in the graph
    pub accepted: usize,

    /// Routes with an endpoint outside the airport range
    pub dropped_unresolved: usize,

    /// Routes whose distance is the "no distance" sentinel or larger
    pub dropped_distance: usize,
}

/// Adjacency of the flight network in compressed sparse row form.
///
/// `offsets[i]..offsets[i + 1]` is the slice of `edges` leaving airport
/// `i`. Edges keep their input order within each airport. Parallel edges
/// are kept as-is.
#[derive(Debug, Clone)]
pub struct RouteGraph {
    offsets: Vec<u32>,
    edges: Vec<RouteEdge>,
}

impl RouteGraph {
    /// Build the graph for `airport_count` airports.
    ///
    /// Routes referring to airports outside `0..airport_count`, or carrying
    /// a distance at or above the sentinel, are dropped and counted.
    pub fn from_routes(
        airport_count: usize,
        routes: impl IntoIterator<Item = Route>,
    ) -> (Self, RouteStats) {
        let mut stats = RouteStats::default();
        let mut accepted: Vec<(AirportIndex, RouteEdge)> = Vec::new();

        for route in routes {
            let endpoints = (
                resolve(route.from, airport_count),
                resolve(route.to, airport_count),
            );
            let (Some(from), Some(to)) = endpoints else {
                stats.dropped_unresolved += 1;
                continue;
            };
            if route.distance_km >= PackedState::DISTANCE_CAP {
                stats.dropped_distance += 1;
                continue;
            }
            accepted.push((
                from,
                RouteEdge {
                    to,
                    distance_km: route.distance_km as u16,
                },
            ));
        }
        stats.accepted = accepted.len();

        // Counting sort by source keeps per-source input order
        let mut offsets = vec![0u32; airport_count + 1];
        for (from, _) in &accepted {
            offsets[from.get() + 1] += 1;
        }
        for i in 0..airport_count {
            offsets[i + 1] += offsets[i];
        }

        let mut cursor: Vec<u32> = offsets[..airport_count].to_vec();
        let placeholder = RouteEdge {
            to: AirportIndex::from_packed(0),
            distance_km: 0,
        };
        let mut edges = vec![placeholder; accepted.len()];
        for (from, edge) in accepted {
            let slot = &mut cursor[from.get()];
            edges[*slot as usize] = edge;
            *slot += 1;
        }

        (Self { offsets, edges }, stats)
    }

    /// Outgoing edges of an airport, in input order.
    ///
    /// # Panics
    ///
    /// Panics if `from` is outside the graph.
    pub fn edges_from(&self, from: AirportIndex) -> &[RouteEdge] {
        let start = self.offsets[from.get()] as usize;
        let end = self.offsets[from.get() + 1] as usize;
        &self.edges[start..end]
    }

    /// Number of airports the graph was built for.
    pub fn airport_count(&self) -> usize {
        self.offsets.len() - 1
    }

    /// Total number of stored edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

fn resolve(raw: u32, airport_count: usize) -> Option<AirportIndex> {
    if (raw as usize) < airport_count {
        AirportIndex::new(raw).ok()
    } else {
        None
    }
}
