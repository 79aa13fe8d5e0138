//! Bounded-hop shortest route search.
//!
//! Finds the shortest itinerary between two airports using at most a given
//! number of relaxation layers. This is Bellman-Ford cut off by hop count
//! instead of run to a fixed point:
//!
//! 1. **First leg**: every direct flight from the origin fills layer 0. A
//!    direct flight to the destination ends the search immediately.
//! 2. **Middle legs**: layer `k` starts as a copy of layer `k - 1`, then
//!    every airport whose state changed between `k - 2` and `k - 1` relaxes
//!    its outgoing flights into layer `k`. Airports whose state did not
//!    change already relaxed the same edges one layer earlier.
//! 3. **Last leg**: instead of materialising one more layer, only flights
//!    landing at the destination are relaxed from the final layer.
//! 4. **Reconstruction**: walk back through the layers from the arrival,
//!    following predecessors. Layers that add no new predecessor are
//!    skipped, so the path has one entry per flight actually taken.
//!
//! Each slot is a [`PackedState`]: predecessor airport in the high bits,
//! cumulative distance in the low bits. Layers live only for the duration
//! of one [`RouteFinder::find`] call, so one finder can serve any number of
//! concurrent callers.

use tracing::{debug, trace};

use crate::domain::{AirportIndex, PackedState};
use crate::network::RouteGraph;

/// Best known state per airport for one hop count.
type Layer = Vec<PackedState>;

/// Outcome of the first-leg pass.
enum FirstLeg {
    /// Direct flight to the destination.
    Direct(PackedState),
    /// Nothing further can be found.
    NoRoute,
    /// Continue with the middle legs.
    Continue,
}

/// Shortest route search over a shared, read-only route graph.
#[derive(Debug, Clone, Copy)]
pub struct RouteFinder<'a> {
    graph: &'a RouteGraph,
}

impl<'a> RouteFinder<'a> {
    /// Create a finder over a graph.
    pub fn new(graph: &'a RouteGraph) -> Self {
        Self { graph }
    }

    /// Find the shortest route from `source` to `destination`.
    ///
    /// `hop_budget` is the number of relaxation layers: `0` only accepts a
    /// direct flight, `n > 0` allows up to `n + 1` flights.
    ///
    /// Returns the path as packed states. Entry `i` holds the airport the
    /// `i`-th flight departs from and the cumulative distance at the end of
    /// that flight. An empty vector means there is no route within the
    /// budget.
    ///
    /// # Panics
    ///
    /// Panics if either index is outside the graph.
    pub fn find(
        &self,
        source: AirportIndex,
        destination: AirportIndex,
        hop_budget: u32,
    ) -> Vec<PackedState> {
        let airport_count = self.graph.airport_count();
        let layer_count = hop_budget.max(1) as usize;

        let mut layers: Vec<Layer> = Vec::with_capacity(layer_count);
        layers.push(vec![PackedState::UNREACHED; airport_count]);

        match self.first_leg(&mut layers[0], source, destination, hop_budget) {
            FirstLeg::Direct(state) => {
                debug!(%source, %destination, hop_budget, "Direct flight found");
                return vec![state];
            }
            FirstLeg::NoRoute => {
                debug!(%source, %destination, hop_budget, "No route found");
                return Vec::new();
            }
            FirstLeg::Continue => {}
        }

        while layers.len() < layer_count {
            let next = self.middle_leg(&layers);
            layers.push(next);
        }

        let arrival = self.last_leg(&layers, destination);
        if arrival.is_unreached() {
            debug!(%source, %destination, hop_budget, "No route found");
            return Vec::new();
        }

        let path = reconstruct(&layers, arrival);
        debug!(
            %source,
            %destination,
            hop_budget,
            legs = path.len(),
            distance_km = arrival.distance(),
            "Route found"
        );
        path
    }

    /// Fill layer 0 with the direct flights from `source`.
    fn first_leg(
        &self,
        layer: &mut Layer,
        source: AirportIndex,
        destination: AirportIndex,
        hop_budget: u32,
    ) -> FirstLeg {
        layer[source.get()] = PackedState::pack(source, 0);

        let flights = self.graph.edges_from(source);
        if flights.is_empty() {
            return FirstLeg::NoRoute;
        }

        for edge in flights {
            // First flight seen to an airport wins; the origin keeps distance 0
            let slot = &mut layer[edge.to.get()];
            if edge.to != source && slot.is_unreached() {
                *slot = PackedState::pack(source, edge.distance_km);
            }
        }

        let direct = layer[destination.get()];
        if !direct.is_unreached() {
            return FirstLeg::Direct(direct);
        }
        if hop_budget == 0 {
            return FirstLeg::NoRoute;
        }
        FirstLeg::Continue
    }

    /// Build the next layer by relaxing from the last one.
    fn middle_leg(&self, layers: &[Layer]) -> Layer {
        let current = &layers[layers.len() - 1];
        let previous = layers.len().checked_sub(2).map(|i| &layers[i]);
        let mut next = current.clone();
        let mut relaxed = 0usize;

        for (i, &state) in current.iter().enumerate() {
            if !needs_relaxing(state, previous.map(|layer| layer[i])) {
                continue;
            }
            relaxed += 1;

            let from = AirportIndex::from_packed(i as u16);
            let reached = u32::from(state.distance());
            for edge in self.graph.edges_from(from) {
                let total = reached + u32::from(edge.distance_km);
                let slot = &mut next[edge.to.get()];
                if total < PackedState::DISTANCE_CAP && total < u32::from(slot.distance()) {
                    *slot = PackedState::pack(from, total as u16);
                }
            }
        }

        trace!(layer = layers.len(), relaxed, "Relaxed middle leg");
        next
    }

    /// Best arrival at `destination` using one flight beyond the last layer.
    fn last_leg(&self, layers: &[Layer], destination: AirportIndex) -> PackedState {
        let current = &layers[layers.len() - 1];
        let previous = layers.len().checked_sub(2).map(|i| &layers[i]);
        let mut best = current[destination.get()];

        for (i, &state) in current.iter().enumerate() {
            if !needs_relaxing(state, previous.map(|layer| layer[i])) {
                continue;
            }

            let from = AirportIndex::from_packed(i as u16);
            let reached = u32::from(state.distance());
            for edge in self.graph.edges_from(from) {
                if edge.to != destination {
                    continue;
                }
                let total = reached + u32::from(edge.distance_km);
                if total < PackedState::DISTANCE_CAP && total < u32::from(best.distance()) {
                    best = PackedState::pack(from, total as u16);
                }
            }
        }

        best
    }
}

/// An airport relaxes its flights only if it is reachable and its state
/// changed since the layer before.
fn needs_relaxing(state: PackedState, before: Option<PackedState>) -> bool {
    state.is_reachable() && before != Some(state)
}

/// Walk predecessors back from the arrival, one layer at a time.
///
/// A layer whose slot for the current airport points at that same airport
/// is the origin's own entry and contributes no flight.
fn reconstruct(layers: &[Layer], arrival: PackedState) -> Vec<PackedState> {
    let mut path = vec![arrival];
    let mut front = arrival;

    for layer in layers.iter().rev() {
        let via = front.airport();
        let step = layer[via.get()];
        if step.airport() == via {
            continue;
        }
        path.push(step);
        front = step;
    }

    path.reverse();
    path
}
