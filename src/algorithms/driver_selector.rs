use priority_queue::PriorityQueue;
use tracing::{debug, info, warn};

use super::route_optimizer::RouteOptimizer;
use super::RouteSolver;
use crate::config::RouterConfig;
use crate::models::{
    DriverCandidate, Location, OrderRecord, OrderRequest, RouteCandidate, RouteResult, StoreId,
    UserRecord,
};
use crate::utils::distance_table::DistanceTable;
use crate::utils::init_map::DeliveryNetwork;
use petgraph::graph::NodeIndex;

/// Picks the driver for an order and the order in which they visit its
/// stores.
///
/// Available drivers always rank above busy ones; within a tier the shortest
/// total route wins, and exact ties go to the driver listed first. The
/// selector reads driver and order records but never writes them: recording
/// the assignment is up to the caller, as is serializing concurrent calls.
pub struct DriverSelector<'a> {
    network: &'a DeliveryNetwork,
    config: &'a RouterConfig,
}

impl<'a> DriverSelector<'a> {
    pub fn new(network: &'a DeliveryNetwork, config: &'a RouterConfig) -> Self {
        Self { network, config }
    }

    /// Assign a driver to `order`. Always returns a well-formed result;
    /// `RouteResult::unassigned()` when no driver can complete the route.
    pub fn assign_driver(
        &self,
        order: &OrderRequest,
        users: &[UserRecord],
        orders: &[OrderRecord],
    ) -> RouteResult {
        let mut queue = PriorityQueue::new();
        for candidate in self.evaluate_candidates(order, users, orders) {
            queue.push(candidate.sequence, candidate);
        }

        match queue.pop() {
            Some((_, best)) => {
                info!(
                    customer = %order.customer_id,
                    driver = %best.driver_id,
                    priority = best.priority.rank(),
                    distance = best.total_distance,
                    route = ?best.store_order,
                    "driver assigned"
                );
                RouteResult::from(best)
            }
            None => {
                info!(customer = %order.customer_id, "no driver could be assigned");
                RouteResult::unassigned()
            }
        }
    }

    /// Every driver that can complete the order, in driver enumeration order
    pub fn evaluate_candidates(
        &self,
        order: &OrderRequest,
        users: &[UserRecord],
        orders: &[OrderRecord],
    ) -> Vec<RouteCandidate> {
        let drivers: Vec<&UserRecord> = users.iter().filter(|u| u.is_driver()).collect();
        if drivers.is_empty() {
            debug!("no delivery agents registered");
            return Vec::new();
        }

        // Recomputed on every call so topology changes are always picked up
        let table = DistanceTable::build(&self.network.graph);
        let graph = &self.network.graph;

        let store_ids = order.stop_store_ids();
        let stops: Vec<NodeIndex> = match store_ids
            .iter()
            .map(|&store_id| self.store_index(store_id))
            .collect::<Option<Vec<_>>>()
        {
            Some(stops) => stops,
            None => return Vec::new(),
        };

        let Some(destination) = self.location_index(&order.customer_location) else {
            return Vec::new();
        };

        let optimizer = RouteOptimizer::new(self.config.exact_search_limit);
        let mut candidates = Vec::new();

        for (sequence, user) in drivers.into_iter().enumerate() {
            let driver = DriverCandidate::resolve(user, orders);
            let Some(start) = self.location_index(&driver.start_location) else {
                continue;
            };

            match optimizer.solve(&table, start, &stops, destination) {
                Some(route) => {
                    debug!(
                        driver = %driver.driver_id,
                        start = graph.label(start).unwrap_or_default(),
                        priority = driver.priority.rank(),
                        distance = route.total_distance,
                        "candidate route found"
                    );
                    candidates.push(RouteCandidate {
                        priority: driver.priority,
                        total_distance: route.total_distance,
                        sequence,
                        driver_id: driver.driver_id,
                        store_order: route.visits.iter().map(|&i| store_ids[i]).collect(),
                    });
                }
                None => {
                    debug!(
                        driver = %driver.driver_id,
                        start = graph.label(start).unwrap_or_default(),
                        "no valid route, driver excluded"
                    );
                }
            }
        }

        candidates
    }

    fn store_index(&self, store_id: StoreId) -> Option<NodeIndex> {
        let index = self
            .network
            .store_node(store_id)
            .and_then(|label| self.network.graph.node(label));
        if index.is_none() {
            warn!(store_id, "store has no location node, order cannot be routed");
        }
        index
    }

    fn location_index(&self, location: &Location) -> Option<NodeIndex> {
        let label = self
            .network
            .coordinates
            .resolve(location, self.config.coordinate_match);
        let index = self.network.graph.node(label);
        if index.is_none() {
            warn!(node = label, "coordinate resolved to a node missing from the graph");
        }
        index
    }
}
