use crate::models::Distance;
use crate::utils::road_network::LocationGraph;
use petgraph::algo::dijkstra;
use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;

/// Marker stored for pairs with no connecting path
pub const UNREACHABLE: Distance = f64::INFINITY;

/// All-pairs shortest path distances over a [`LocationGraph`].
#[derive(Debug, Clone)]
pub struct DistanceTable {
    distances: Vec<Vec<Distance>>,
}

impl DistanceTable {
    /// Run Dijkstra from every node. Pairs in different components are
    /// recorded as [`UNREACHABLE`] rather than reported as errors.
    pub fn build(graph: &LocationGraph) -> Self {
        let inner = graph.inner();
        let n = inner.node_count();
        let mut distances = vec![vec![UNREACHABLE; n]; n];

        for source in inner.node_indices() {
            let row = &mut distances[source.index()];
            for (target, distance) in dijkstra(inner, source, None, |e| *e.weight()) {
                row[target.index()] = distance;
            }
            row[source.index()] = 0.0;
        }

        Self { distances }
    }

    /// Shortest distance from `from` to `to`; `None` when unreachable or
    /// either index is outside the table
    pub fn get(&self, from: NodeIndex, to: NodeIndex) -> Option<Distance> {
        self.distances
            .get(from.index())?
            .get(to.index())
            .copied()
            .filter(|d| d.is_finite())
    }

    pub fn is_reachable(&self, from: NodeIndex, to: NodeIndex) -> bool {
        self.get(from, to).is_some()
    }
}
