//! Nearest-neighbor constructive heuristic.
//!
//! From the current position, always move to the closest unvisited stop,
//! then head to the destination. O(n²) in the number of stops; fast, not
//! guaranteed optimal.

use super::{RouteSolver, StopSequence};
use crate::utils::distance_table::DistanceTable;
use petgraph::graph::NodeIndex;

#[derive(Debug, Clone, Copy, Default)]
pub struct NearestNeighbor;

impl RouteSolver for NearestNeighbor {
    fn solve(
        &self,
        table: &DistanceTable,
        start: NodeIndex,
        stops: &[NodeIndex],
        destination: NodeIndex,
    ) -> Option<StopSequence> {
        let mut visited = vec![false; stops.len()];
        let mut visits = Vec::with_capacity(stops.len());
        let mut current = start;
        let mut total = 0.0;

        while visits.len() < stops.len() {
            let mut nearest: Option<(usize, f64)> = None;

            // Strict comparison keeps the earliest stop on ties
            for (position, &stop) in stops.iter().enumerate() {
                if visited[position] {
                    continue;
                }
                if let Some(distance) = table.get(current, stop) {
                    if nearest.map_or(true, |(_, best)| distance < best) {
                        nearest = Some((position, distance));
                    }
                }
            }

            // Every remaining stop is unreachable from here
            let (position, distance) = nearest?;
            visited[position] = true;
            visits.push(position);
            total += distance;
            current = stops[position];
        }

        let final_leg = table.get(current, destination)?;
        Some(StopSequence {
            visits,
            total_distance: total + final_leg,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::road_network::LocationGraph;

    fn create_line_graph() -> LocationGraph {
        // Hub - S1 - S2 - S3 - S4 - S5 - Cust, unit spacing
        let mut graph = LocationGraph::new();
        let labels = ["Hub", "S1", "S2", "S3", "S4", "S5", "Cust"];
        for pair in labels.windows(2) {
            graph.add_edge(pair[0], pair[1], 1.0).unwrap();
        }
        graph
    }

    #[test]
    fn test_walks_to_nearest_each_step() {
        let graph = create_line_graph();
        let table = DistanceTable::build(&graph);
        let node = |label| graph.node(label).unwrap();

        let stops = [node("S4"), node("S2"), node("S5"), node("S1"), node("S3")];
        let route = NearestNeighbor
            .solve(&table, node("Hub"), &stops, node("Cust"))
            .unwrap();

        assert_eq!(route.visits, vec![3, 1, 4, 0, 2]);
        assert_eq!(route.total_distance, 6.0);
    }

    #[test]
    fn test_ties_follow_insertion_order() {
        let mut graph = LocationGraph::new();
        graph.add_edge("Hub", "Left", 2.0).unwrap();
        graph.add_edge("Hub", "Right", 2.0).unwrap();
        graph.add_edge("Left", "Cust", 1.0).unwrap();
        graph.add_edge("Right", "Cust", 1.0).unwrap();
        let table = DistanceTable::build(&graph);
        let node = |label| graph.node(label).unwrap();

        let route = NearestNeighbor
            .solve(&table, node("Hub"), &[node("Right"), node("Left")], node("Cust"))
            .unwrap();
        assert_eq!(route.visits[0], 0);
    }

    #[test]
    fn test_unreachable_stop_fails() {
        let mut graph = create_line_graph();
        graph.add_node("Island");
        let table = DistanceTable::build(&graph);
        let node = |label| graph.node(label).unwrap();

        let route = NearestNeighbor.solve(
            &table,
            node("Hub"),
            &[node("S1"), node("Island")],
            node("Cust"),
        );
        assert!(route.is_none());
    }

    #[test]
    fn test_unreachable_destination_fails() {
        let mut graph = create_line_graph();
        graph.add_node("Island");
        let table = DistanceTable::build(&graph);
        let node = |label| graph.node(label).unwrap();

        let route = NearestNeighbor.solve(&table, node("Hub"), &[node("S1")], node("Island"));
        assert!(route.is_none());
    }
}
