use crate::error::NetworkError;
use crate::models::Distance;
use petgraph::graph::{NodeIndex, UnGraph};
use std::collections::HashMap;

/// Undirected weighted graph over named locations (hub, stores, customer
/// zones). Edge weight is the travel distance between two locations.
#[derive(Debug, Clone, Default)]
pub struct LocationGraph {
    graph: UnGraph<String, Distance>,
    index: HashMap<String, NodeIndex>, // Label -> node index
}

impl LocationGraph {
    /// Create an empty location graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a location, returning the existing index if the label is known
    pub fn add_node(&mut self, label: &str) -> NodeIndex {
        if let Some(&existing) = self.index.get(label) {
            return existing;
        }
        let node = self.graph.add_node(label.to_string());
        self.index.insert(label.to_string(), node);
        node
    }

    /// Connect two locations. Endpoints are created on demand and an existing
    /// edge between them gets its distance replaced.
    pub fn add_edge(&mut self, from: &str, to: &str, distance: Distance) -> Result<(), NetworkError> {
        if !distance.is_finite() || distance < 0.0 {
            return Err(NetworkError::InvalidDistance {
                from: from.to_string(),
                to: to.to_string(),
                distance,
            });
        }

        let a = self.add_node(from);
        let b = self.add_node(to);
        self.graph.update_edge(a, b, distance);
        Ok(())
    }

    /// Remove the edge between two locations; returns its distance if one existed
    pub fn remove_edge(&mut self, from: &str, to: &str) -> Option<Distance> {
        let a = self.node(from)?;
        let b = self.node(to)?;
        let edge = self.graph.find_edge(a, b)?;
        self.graph.remove_edge(edge)
    }

    /// Direct edge distance between two locations, if they are adjacent
    pub fn edge_distance(&self, from: &str, to: &str) -> Option<Distance> {
        let edge = self.graph.find_edge(self.node(from)?, self.node(to)?)?;
        self.graph.edge_weight(edge).copied()
    }

    pub fn node(&self, label: &str) -> Option<NodeIndex> {
        self.index.get(label).copied()
    }

    pub fn label(&self, node: NodeIndex) -> Option<&str> {
        self.graph.node_weight(node).map(String::as_str)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.index.contains_key(label)
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Underlying petgraph graph
    pub fn inner(&self) -> &UnGraph<String, Distance> {
        &self.graph
    }
}
