//! Read-only queries over the store.

use crate::ecs::{DriverId, DriverStatus, Rider, RiderId, TripStatus};
use crate::error::{DispatchError, DispatchResult};
use crate::records::TripRecord;
use crate::store::EntityStore;
use crate::telemetry::RegistryCounts;

pub fn driver_status(store: &EntityStore, driver_id: DriverId) -> DispatchResult<DriverStatus> {
    let entity = store.driver_entity(driver_id)?;
    store
        .world
        .get_entity(entity)
        .and_then(DriverStatus::of)
        .ok_or(DispatchError::DriverNotFound(driver_id))
}

/// Completed trips of a rider in completion order.
///
/// A known rider with no completed trips yields an empty vector; only an
/// unknown id is an error.
pub fn rider_history(store: &EntityStore, rider_id: RiderId) -> DispatchResult<Vec<TripRecord>> {
    let entity = store.rider_entity(rider_id)?;
    let rider = store
        .world
        .get::<Rider>(entity)
        .ok_or(DispatchError::RiderNotFound(rider_id))?;

    Ok(rider
        .history
        .iter()
        .filter_map(|trip| store.trip_record(*trip))
        .collect())
}

pub fn counts(store: &EntityStore) -> RegistryCounts {
    let mut counts = RegistryCounts {
        riders: store.rider_count(),
        ..Default::default()
    };
    for entity in store.driver_entities() {
        if let Some(status) = store.world.get_entity(entity).and_then(DriverStatus::of) {
            counts.add_driver(status);
        }
    }
    for entity in store.trip_entities() {
        if let Some(status) = store.world.get_entity(entity).and_then(TripStatus::of) {
            counts.add_trip(status);
        }
    }
    counts
}
