//! Owned snapshots of store records handed back to callers.
//!
//! Records are copies taken while the store lock is held; they never borrow
//! from the store.

use serde::{Deserialize, Serialize};

use crate::ecs::{DriverId, DriverStatus, RiderId, TripId, TripStatus};
use crate::spatial::Location;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriverRecord {
    pub id: DriverId,
    pub name: String,
    pub location: Location,
    pub status: DriverStatus,
}

impl DriverRecord {
    pub fn is_available(&self) -> bool {
        self.status == DriverStatus::Available
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiderRecord {
    pub id: RiderId,
    pub name: String,
    pub location: Location,
    /// Completed trips, in completion order.
    pub history: Vec<TripId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripRecord {
    pub id: TripId,
    pub rider_id: RiderId,
    pub rider_name: String,
    pub driver_id: DriverId,
    pub driver_name: String,
    pub start: Location,
    pub end: Location,
    pub status: TripStatus,
}
