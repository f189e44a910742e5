use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::info;

use crate::error::NetworkError;
use crate::models::{Distance, Location, StoreId};

use super::coordinate_map::CoordinateMap;
use super::road_network::LocationGraph;

/// Coordinate of a named node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodePosition {
    pub node: String,
    pub x: f64,
    pub y: f64,
}

/// Which node a store lives at
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreNode {
    pub store_id: StoreId,
    pub node: String,
}

/// On-disk description of the delivery network
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkConfig {
    pub nodes: Vec<String>,
    pub edges: Vec<(String, String, Distance)>,
    #[serde(default)]
    pub positions: Vec<NodePosition>,
    pub default_node: String,
    #[serde(default)]
    pub stores: Vec<StoreNode>,
}

/// Static topology consumed by the assignment engine: the location graph,
/// the coordinate-to-node map, and the store-to-node map.
#[derive(Debug, Clone)]
pub struct DeliveryNetwork {
    pub graph: LocationGraph,
    pub coordinates: CoordinateMap,
    store_nodes: HashMap<StoreId, String>,
}

impl DeliveryNetwork {
    /// Assemble a network from parts that the caller has already validated
    pub fn new(graph: LocationGraph, coordinates: CoordinateMap) -> Self {
        Self {
            graph,
            coordinates,
            store_nodes: HashMap::new(),
        }
    }

    /// Attach a store to a node of the graph
    pub fn set_store_node<S: Into<String>>(&mut self, store_id: StoreId, node: S) {
        self.store_nodes.insert(store_id, node.into());
    }

    /// Node label of a store; `None` for stores the network does not know
    pub fn store_node(&self, store_id: StoreId) -> Option<&str> {
        self.store_nodes.get(&store_id).map(String::as_str)
    }

    /// Build and validate a network from its configuration
    pub fn from_config(config: NetworkConfig) -> Result<Self, NetworkError> {
        let mut graph = LocationGraph::new();
        for node in &config.nodes {
            graph.add_node(node);
        }

        let require = |graph: &LocationGraph, node: &str| -> Result<(), NetworkError> {
            if graph.contains(node) {
                Ok(())
            } else {
                Err(NetworkError::UnknownNode(node.to_string()))
            }
        };

        for (from, to, distance) in &config.edges {
            require(&graph, from)?;
            require(&graph, to)?;
            graph.add_edge(from, to, *distance)?;
        }

        require(&graph, &config.default_node)?;
        let mut coordinates = CoordinateMap::new(config.default_node);
        for position in config.positions {
            require(&graph, &position.node)?;
            coordinates.insert(position.node, Location::new(position.x, position.y));
        }

        let mut network = Self::new(graph, coordinates);
        for store in config.stores {
            require(&network.graph, &store.node)?;
            network.set_store_node(store.store_id, store.node);
        }

        Ok(network)
    }

    /// The seven-location city the delivery app ships with
    pub fn default_city() -> Self {
        Self::from_config(default_city_config())
            .expect("built-in city config references only its own nodes and valid distances")
    }
}

/// Configuration of the seven-location city
pub fn default_city_config() -> NetworkConfig {
    let positions = [
        ("Admin Office", 0.0, 0.0),
        ("Store A", -1.0, 1.0),
        ("Store B", -1.0, -1.0),
        ("Store C", 1.0, 1.0),
        ("Customer 1", 1.0, 0.0),
        ("Customer 2", -2.0, 0.0),
        ("Customer 3", 0.0, -1.0),
    ];
    let edges = [
        ("Admin Office", "Store A", 5.0),
        ("Admin Office", "Store B", 6.0),
        ("Admin Office", "Store C", 7.0),
        ("Store A", "Customer 1", 4.0),
        ("Store A", "Customer 2", 3.0),
        ("Store B", "Customer 2", 2.0),
        ("Store B", "Customer 3", 5.0),
        ("Store C", "Customer 1", 6.0),
        ("Store C", "Customer 3", 4.0),
        ("Store A", "Store B", 3.0),
        ("Store A", "Store C", 4.0),
        ("Store B", "Store C", 2.0),
    ];

    NetworkConfig {
        nodes: positions.iter().map(|(node, _, _)| node.to_string()).collect(),
        edges: edges
            .iter()
            .map(|&(from, to, distance)| (from.to_string(), to.to_string(), distance))
            .collect(),
        positions: positions
            .iter()
            .map(|&(node, x, y)| NodePosition {
                node: node.to_string(),
                x,
                y,
            })
            .collect(),
        default_node: "Admin Office".to_string(),
        stores: [(1, "Store A"), (2, "Store B"), (3, "Store C")]
            .iter()
            .map(|&(store_id, node)| StoreNode {
                store_id,
                node: node.to_string(),
            })
            .collect(),
    }
}

/// Load the delivery network from a JSON file
pub fn init_network_from_file<P: AsRef<Path>>(path: P) -> Result<DeliveryNetwork, NetworkError> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).map_err(|source| NetworkError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let network = init_network_from_str(&raw)?;
    info!(
        path = %path.display(),
        nodes = network.graph.node_count(),
        edges = network.graph.edge_count(),
        "loaded delivery network"
    );
    Ok(network)
}

/// Parse and validate a JSON network description
pub fn init_network_from_str(raw: &str) -> Result<DeliveryNetwork, NetworkError> {
    let config: NetworkConfig = serde_json::from_str(raw)?;
    DeliveryNetwork::from_config(config)
}
