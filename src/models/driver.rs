// Driver models: external user records and the per-assignment candidate view

use crate::models::{DriverId, Location, OrderRecord};
use serde::{Deserialize, Serialize};

/// Role tag carried by every user record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserType {
    Admin,
    Manager,
    Customer,
    #[serde(rename = "Delivery Agent")]
    DeliveryAgent,
}

/// A user as stored by the surrounding application
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub username: String,
    pub user_type: UserType,

    /// Last known position
    pub location: Location,
}

impl UserRecord {
    pub fn new<S: Into<String>>(username: S, user_type: UserType, location: Location) -> Self {
        Self {
            username: username.into(),
            user_type,
            location,
        }
    }

    /// Shorthand for a delivery agent record
    pub fn driver<S: Into<String>>(username: S, location: Location) -> Self {
        Self::new(username, UserType::DeliveryAgent, location)
    }

    pub fn is_driver(&self) -> bool {
        self.user_type == UserType::DeliveryAgent
    }
}

/// Availability tier; lower ranks first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Priority {
    Available = 1,
    Busy = 2,
}

impl Priority {
    pub fn rank(self) -> u8 {
        self as u8
    }
}

/// A driver as seen by a single assignment call
#[derive(Debug, Clone, PartialEq)]
pub struct DriverCandidate {
    pub driver_id: DriverId,

    /// Where the driver's next route starts
    pub start_location: Location,

    pub priority: Priority,
}

impl DriverCandidate {
    /// Resolves priority and start location of `user` against the current
    /// order records. A busy driver starts from the delivery location of the
    /// first order that keeps them busy.
    pub fn resolve(user: &UserRecord, orders: &[OrderRecord]) -> Self {
        match orders.iter().find(|o| o.is_active_for(&user.username)) {
            Some(active) => Self {
                driver_id: user.username.clone(),
                start_location: active.customer_location,
                priority: Priority::Busy,
            },
            None => Self {
                driver_id: user.username.clone(),
                start_location: user.location,
                priority: Priority::Available,
            },
        }
    }
}
