// Order models: the assignment request and the external in-flight order record

use crate::models::{CustomerId, DriverId, Location, RouteResult, StoreId};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Items a driver has to pick up from a single store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorePickup {
    pub store_id: StoreId,

    /// Map of item names to their required quantities
    pub items: HashMap<String, u32>,
}

/// Represents an order waiting for a driver
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRequest {
    pub customer_id: CustomerId,

    /// Where the order has to be delivered
    pub customer_location: Location,

    /// Pickups in the order their stores were first added
    pub stores: Vec<StorePickup>,
}

impl OrderRequest {
    /// Creates a new order with no items
    pub fn new<S: Into<CustomerId>>(customer_id: S, customer_location: Location) -> Self {
        Self {
            customer_id: customer_id.into(),
            customer_location,
            stores: Vec::new(),
        }
    }

    /// Adds an item to the pickup of the given store, creating the pickup on
    /// first use. A zero quantity still makes the store a stop but records no
    /// item line.
    pub fn add_item<S: Into<String>>(&mut self, store_id: StoreId, item: S, quantity: u32) {
        let position = match self.stores.iter().position(|p| p.store_id == store_id) {
            Some(position) => position,
            None => {
                self.stores.push(StorePickup {
                    store_id,
                    items: HashMap::new(),
                });
                self.stores.len() - 1
            }
        };

        if quantity == 0 {
            return;
        }
        *self.stores[position]
            .items
            .entry(item.into())
            .or_insert(0) += quantity;
    }

    /// Builder-style variant of [`OrderRequest::add_item`]
    pub fn with_item<S: Into<String>>(mut self, store_id: StoreId, item: S, quantity: u32) -> Self {
        self.add_item(store_id, item, quantity);
        self
    }

    /// Store ids to visit, one per store, in first-seen order. Pickups that
    /// repeat a store (possible when `stores` is filled directly or
    /// deserialized) collapse into the first one.
    pub fn stop_store_ids(&self) -> Vec<StoreId> {
        let mut seen = HashSet::new();
        self.stores
            .iter()
            .map(|pickup| pickup.store_id)
            .filter(|&store_id| seen.insert(store_id))
            .collect()
    }

    /// Gets the total number of items (including quantities)
    pub fn total_item_count(&self) -> u32 {
        self.stores
            .iter()
            .flat_map(|pickup| pickup.items.values())
            .sum()
    }
}

/// Lifecycle of an order record as tracked by the surrounding application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Preparing,
    Processing,
    Collected,
    Delivered,
}

/// An order record owned by the caller. The selector only reads these to
/// find out which drivers are busy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRecord {
    pub order_id: String,
    pub customer_id: CustomerId,
    pub delivery_agent: Option<DriverId>,
    pub status: OrderStatus,
    pub delivered: bool,
    pub customer_location: Location,

    /// Store visiting order chosen at assignment time
    pub store_route: Vec<StoreId>,
}

impl OrderRecord {
    /// Builds the record a caller stores once an assignment has been made
    pub fn from_assignment<S: Into<String>>(
        order_id: S,
        request: &OrderRequest,
        result: &RouteResult,
    ) -> Self {
        Self {
            order_id: order_id.into(),
            customer_id: request.customer_id.clone(),
            delivery_agent: result.driver.clone(),
            status: OrderStatus::Processing,
            delivered: false,
            customer_location: request.customer_location,
            store_route: result.store_order.clone(),
        }
    }

    /// True while this order keeps `driver` busy
    pub fn is_active_for(&self, driver: &str) -> bool {
        self.delivery_agent.as_deref() == Some(driver)
            && self.status != OrderStatus::Delivered
            && !self.delivered
    }

    /// The driver picked up every item
    pub fn mark_collected(&mut self) {
        if !self.delivered {
            self.status = OrderStatus::Collected;
        }
    }

    /// The driver handed the order over; frees the driver for new work
    pub fn mark_delivered(&mut self) {
        self.status = OrderStatus::Delivered;
        self.delivered = true;
    }
}
