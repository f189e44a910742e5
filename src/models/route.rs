// Route models for representing driver assignments

use crate::models::{Distance, DriverId, Priority, StoreId};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Outcome of an assignment call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteResult {
    /// Chosen driver, `None` when nobody could take the order
    pub driver: Option<DriverId>,

    /// Stores in visiting order; empty when unassigned
    pub store_order: Vec<StoreId>,
}

impl RouteResult {
    pub fn assigned(driver: DriverId, store_order: Vec<StoreId>) -> Self {
        Self {
            driver: Some(driver),
            store_order,
        }
    }

    /// The "no driver assigned" outcome
    pub fn unassigned() -> Self {
        Self {
            driver: None,
            store_order: Vec::new(),
        }
    }

    pub fn is_assigned(&self) -> bool {
        self.driver.is_some()
    }
}

impl From<RouteCandidate> for RouteResult {
    fn from(candidate: RouteCandidate) -> Self {
        Self::assigned(candidate.driver_id, candidate.store_order)
    }
}

// Custom wrapper to make f64 implement Eq
#[derive(PartialEq, Copy, Clone, Debug)]
pub struct OrderedDistance(pub Distance);

impl Eq for OrderedDistance {}

impl PartialOrd for OrderedDistance {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OrderedDistance {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// A driver that can complete the order, with the route it would take
#[derive(Debug, Clone)]
pub struct RouteCandidate {
    pub priority: Priority,
    pub total_distance: Distance,

    /// Position of the driver in the enumeration of the current call
    pub sequence: usize,

    pub driver_id: DriverId,
    pub store_order: Vec<StoreId>,
}

impl RouteCandidate {
    fn selection_key(&self) -> (Priority, OrderedDistance, usize) {
        (self.priority, OrderedDistance(self.total_distance), self.sequence)
    }
}

impl PartialEq for RouteCandidate {
    fn eq(&self, other: &Self) -> bool {
        self.selection_key() == other.selection_key()
    }
}

impl Eq for RouteCandidate {}

// Reversed so that the best candidate is the greatest element of a max-queue:
// lower priority tier, then shorter distance, then earlier enumeration
impl Ord for RouteCandidate {
    fn cmp(&self, other: &Self) -> Ordering {
        other.selection_key().cmp(&self.selection_key())
    }
}

impl PartialOrd for RouteCandidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(priority: Priority, total_distance: Distance, sequence: usize) -> RouteCandidate {
        RouteCandidate {
            priority,
            total_distance,
            sequence,
            driver_id: format!("driver{}", sequence),
            store_order: vec![1],
        }
    }

    #[test]
    fn test_priority_dominates_distance() {
        let available = candidate(Priority::Available, 50.0, 1);
        let busy = candidate(Priority::Busy, 1.0, 0);

        // In a max-queue, the better candidate is the greater element
        assert!(available > busy);
    }

    #[test]
    fn test_shorter_distance_wins_within_tier() {
        let near = candidate(Priority::Available, 9.0, 1);
        let far = candidate(Priority::Available, 12.0, 0);
        assert!(near > far);
    }

    #[test]
    fn test_tie_goes_to_first_enumerated() {
        let first = candidate(Priority::Busy, 9.0, 0);
        let second = candidate(Priority::Busy, 9.0, 1);
        assert!(first > second);
    }

    #[test]
    fn test_result_from_candidate() {
        let result = RouteResult::from(candidate(Priority::Available, 3.0, 2));
        assert_eq!(result.driver.as_deref(), Some("driver2"));
        assert_eq!(result.store_order, vec![1]);
        assert!(!RouteResult::unassigned().is_assigned());
    }
}
