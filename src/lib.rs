// Public modules
pub mod algorithms;
pub mod config;
pub mod error;
pub mod models;
pub mod utils;

// Re-exports for convenience
pub use algorithms::driver_selector::DriverSelector;
pub use algorithms::route_optimizer::RouteOptimizer;
pub use config::{CoordinateMatch, RouterConfig};
pub use error::{ConfigError, NetworkError};
pub use models::{Location, OrderRecord, OrderRequest, RouteResult, UserRecord};
pub use utils::init_map::DeliveryNetwork;

/// Assign a driver to `order` with the default [`RouterConfig`].
pub fn assign_driver(
    network: &DeliveryNetwork,
    order: &OrderRequest,
    users: &[UserRecord],
    orders: &[OrderRecord],
) -> RouteResult {
    DriverSelector::new(network, &RouterConfig::default()).assign_driver(order, users, orders)
}
