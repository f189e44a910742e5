use super::exhaustive::ExhaustiveSearch;
use super::nearest_neighbor::NearestNeighbor;
use super::{RouteSolver, StopSequence};
use crate::config::{DEFAULT_EXACT_SEARCH_LIMIT, MAX_EXACT_SEARCH_LIMIT};
use crate::utils::distance_table::DistanceTable;
use petgraph::graph::NodeIndex;
use tracing::trace;

/// Picks exhaustive search for small stop sets and the nearest-neighbor
/// heuristic above `exact_search_limit`.
#[derive(Debug, Clone, Copy)]
pub struct RouteOptimizer {
    pub exact_search_limit: usize,
}

impl Default for RouteOptimizer {
    fn default() -> Self {
        Self::new(DEFAULT_EXACT_SEARCH_LIMIT)
    }
}

impl RouteOptimizer {
    /// Limits above [`MAX_EXACT_SEARCH_LIMIT`] are clamped to it
    pub fn new(exact_search_limit: usize) -> Self {
        Self {
            exact_search_limit: exact_search_limit.min(MAX_EXACT_SEARCH_LIMIT),
        }
    }

    pub fn uses_exact_search(&self, stop_count: usize) -> bool {
        stop_count <= self.exact_search_limit
    }
}

impl RouteSolver for RouteOptimizer {
    fn solve(
        &self,
        table: &DistanceTable,
        start: NodeIndex,
        stops: &[NodeIndex],
        destination: NodeIndex,
    ) -> Option<StopSequence> {
        // Nothing to route, or no stop can be reached at all
        if stops.iter().all(|&stop| !table.is_reachable(start, stop)) {
            trace!(stops = stops.len(), "no stop reachable from start");
            return None;
        }

        if self.uses_exact_search(stops.len()) {
            ExhaustiveSearch.solve(table, start, stops, destination)
        } else {
            NearestNeighbor.solve(table, start, stops, destination)
        }
    }
}
