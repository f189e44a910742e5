// Models module - exports all model types

mod driver;
mod location;
mod order;
mod route;

// Re-export model types
pub use self::driver::{DriverCandidate, Priority, UserRecord, UserType};
pub use self::location::Location;
pub use self::order::{OrderRecord, OrderRequest, OrderStatus, StorePickup};
pub use self::route::{OrderedDistance, RouteCandidate, RouteResult};

// Common type aliases for improved code readability
pub type StoreId = u32;
pub type DriverId = String;
pub type CustomerId = String;
pub type Distance = f64;
