pub mod driver_selector;
pub mod exhaustive;
pub mod nearest_neighbor;
pub mod route_optimizer;

// Common algorithm traits
use crate::models::Distance;
use crate::utils::distance_table::DistanceTable;
use petgraph::graph::NodeIndex;

/// Order in which to visit a set of stops, with the distance it costs
#[derive(Debug, Clone, PartialEq)]
pub struct StopSequence {
    /// Positions into the `stops` slice that was solved, in visiting order
    pub visits: Vec<usize>,

    /// start -> first stop -> ... -> last stop -> destination
    pub total_distance: Distance,
}

/// Trait for stop-ordering solvers
pub trait RouteSolver {
    /// Find a visiting order for `stops` between `start` and `destination`.
    /// Returns `None` when no order avoids every unreachable leg.
    fn solve(
        &self,
        table: &DistanceTable,
        start: NodeIndex,
        stops: &[NodeIndex],
        destination: NodeIndex,
    ) -> Option<StopSequence>;
}

/// Total distance of visiting `stops` in the order given by `visits`, or
/// `None` if any leg is unreachable
pub fn route_distance(
    table: &DistanceTable,
    start: NodeIndex,
    stops: &[NodeIndex],
    visits: &[usize],
    destination: NodeIndex,
) -> Option<Distance> {
    let mut current = start;
    let mut total = 0.0;

    for &position in visits {
        let next = *stops.get(position)?;
        total += table.get(current, next)?;
        current = next;
    }

    Some(total + table.get(current, destination)?)
}
