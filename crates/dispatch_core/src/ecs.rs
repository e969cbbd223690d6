//! ECS components for drivers, riders and trips.
//!
//! Every record in the store is an entity. Lifecycle state is carried by
//! marker components (`Available`/`Reserved` on drivers,
//! `TripNotStarted`/`TripInProgress`/`TripCompleted` on trips) so that
//! queries can filter on state directly.

use std::fmt;

use bevy_ecs::prelude::{Component, Entity};
use bevy_ecs::world::{EntityRef, EntityWorldMut};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::spatial::Location;

macro_rules! record_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Generate a fresh random identifier.
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }
    };
}

record_id!(
    /// Identifier of a registered driver.
    DriverId
);
record_id!(
    /// Identifier of a registered rider.
    RiderId
);
record_id!(
    /// Identifier of a booked trip.
    TripId
);

#[derive(Debug, Clone, PartialEq, Eq, Component)]
pub struct Driver {
    pub id: DriverId,
    pub name: String,
    /// Monotonic registration order; breaks ties between equidistant drivers.
    pub registration_seq: u64,
    pub assigned_trip: Option<Entity>,
}

#[derive(Debug, Clone, PartialEq, Eq, Component)]
pub struct Rider {
    pub id: RiderId,
    pub name: String,
    /// Completed trips, in completion order.
    pub history: Vec<Entity>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Component)]
pub struct Trip {
    pub id: TripId,
    pub rider: Entity,
    pub rider_id: RiderId,
    pub driver: Entity,
    pub driver_id: DriverId,
    pub start: Location,
    pub end: Location,
}

/// Current grid location of a driver or rider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Component)]
pub struct Position(pub Location);

// Driver availability markers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Component)]
pub struct Available;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Component)]
pub struct Reserved;

// Trip lifecycle markers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Component)]
pub struct TripNotStarted;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Component)]
pub struct TripInProgress;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Component)]
pub struct TripCompleted;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DriverStatus {
    Available,
    Reserved,
}

impl DriverStatus {
    /// Read the availability marker of a driver entity.
    pub fn of(entity: EntityRef<'_>) -> Option<Self> {
        if entity.contains::<Reserved>() {
            Some(Self::Reserved)
        } else if entity.contains::<Available>() {
            Some(Self::Available)
        } else {
            None
        }
    }
}

impl fmt::Display for DriverStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Available => f.write_str("available"),
            Self::Reserved => f.write_str("reserved"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TripStatus {
    NotStarted,
    InProgress,
    Completed,
}

impl TripStatus {
    /// Read the lifecycle marker of a trip entity.
    pub fn of(entity: EntityRef<'_>) -> Option<Self> {
        if entity.contains::<TripCompleted>() {
            Some(Self::Completed)
        } else if entity.contains::<TripInProgress>() {
            Some(Self::InProgress)
        } else if entity.contains::<TripNotStarted>() {
            Some(Self::NotStarted)
        } else {
            None
        }
    }

    pub fn is_active(self) -> bool {
        self != Self::Completed
    }
}

impl fmt::Display for TripStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotStarted => f.write_str("not started"),
            Self::InProgress => f.write_str("in progress"),
            Self::Completed => f.write_str("completed"),
        }
    }
}

/// Swap driver availability markers so exactly one is present.
pub trait DriverStateExt {
    fn set_driver_available(&mut self) -> &mut Self;
    fn set_driver_reserved(&mut self) -> &mut Self;
}

impl DriverStateExt for EntityWorldMut<'_> {
    fn set_driver_available(&mut self) -> &mut Self {
        self.remove::<Reserved>();
        self.insert(Available);
        self
    }

    fn set_driver_reserved(&mut self) -> &mut Self {
        self.remove::<Available>();
        self.insert(Reserved);
        self
    }
}

/// Swap trip lifecycle markers so exactly one is present.
pub trait TripStateExt {
    fn set_trip_status(&mut self, status: TripStatus) -> &mut Self;
}

impl TripStateExt for EntityWorldMut<'_> {
    fn set_trip_status(&mut self, status: TripStatus) -> &mut Self {
        self.remove::<(TripNotStarted, TripInProgress, TripCompleted)>();
        match status {
            TripStatus::NotStarted => self.insert(TripNotStarted),
            TripStatus::InProgress => self.insert(TripInProgress),
            TripStatus::Completed => self.insert(TripCompleted),
        }
    }
}
