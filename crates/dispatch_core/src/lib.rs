//! Ride-dispatch registry.
//!
//! Tracks drivers, riders and trips, matches a requesting rider to the nearest
//! available driver and drives each trip through
//! `NotStarted -> InProgress -> Completed`.
//!
//! Records live in a `bevy_ecs` [`World`](bevy_ecs::world::World) owned by
//! [`store::EntityStore`]; [`registry::DispatchRegistry`] wraps the store for
//! concurrent use and implements the [`registry::RiderRegistry`] boundary.

pub mod config;
pub mod dispatch;
pub mod ecs;
pub mod error;
pub mod lifecycle;
pub mod matching;
pub mod query;
pub mod records;
pub mod registry;
pub mod scenario;
pub mod spatial;
pub mod store;
pub mod telemetry;
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers;

pub use config::{DispatchConfig, TripStartPolicy};
pub use ecs::{DriverId, DriverStatus, RiderId, TripId, TripStatus};
pub use error::{DispatchError, DispatchResult};
pub use records::{DriverRecord, RiderRecord, TripRecord};
pub use registry::{DispatchRegistry, RiderRegistry};
pub use spatial::Location;
