//! Trip lifecycle: `NotStarted -> InProgress -> Completed`.
//!
//! Completion is the only transition with side effects on other records: the
//! driver is released at the drop-off point, the rider is moved there and the
//! trip is appended to the rider's history.

use bevy_ecs::prelude::Entity;
use tracing::{debug, info, warn};

use crate::ecs::{Driver, DriverStateExt, Position, Rider, Trip, TripId, TripStateExt, TripStatus};
use crate::error::{DispatchError, DispatchResult};
use crate::store::EntityStore;

fn current_status(store: &EntityStore, trip_id: TripId) -> DispatchResult<(Entity, TripStatus)> {
    let trip_entity = store.trip_entity(trip_id)?;
    let status = store
        .world
        .get_entity(trip_entity)
        .and_then(TripStatus::of)
        .ok_or(DispatchError::TripNotFound(trip_id))?;
    Ok((trip_entity, status))
}

/// Move a trip to `InProgress`.
///
/// Starting a trip that is already in progress is a no-op. Completed trips
/// are immutable and cannot be restarted.
pub fn start_trip(store: &mut EntityStore, trip_id: TripId) -> DispatchResult<TripStatus> {
    let (trip_entity, status) = current_status(store, trip_id)?;

    match status {
        TripStatus::NotStarted => {
            if let Some(mut trip) = store.world.get_entity_mut(trip_entity) {
                trip.set_trip_status(TripStatus::InProgress);
            }
            info!(trip_id = %trip_id, "trip started");
        }
        TripStatus::InProgress => {
            debug!(trip_id = %trip_id, "trip already in progress");
        }
        TripStatus::Completed => {
            return Err(DispatchError::InvalidTransition {
                trip: trip_id,
                from: TripStatus::Completed,
                to: TripStatus::InProgress,
            });
        }
    }

    Ok(TripStatus::InProgress)
}

/// Complete a trip.
///
/// Releases the driver, moves driver and rider to the trip's end location and
/// appends the trip to the rider's history. Ending an already completed trip
/// changes nothing, so history never holds a trip twice. A driver whose
/// assignment is some other trip stays reserved where it is.
pub fn end_trip(store: &mut EntityStore, trip_id: TripId) -> DispatchResult<TripStatus> {
    let (trip_entity, status) = current_status(store, trip_id)?;

    if !status.is_active() {
        debug!(trip_id = %trip_id, "trip already completed");
        return Ok(TripStatus::Completed);
    }

    let trip = *store
        .world
        .get::<Trip>(trip_entity)
        .ok_or(DispatchError::TripNotFound(trip_id))?;

    // Validate both participants before touching anything.
    if store.world.get::<Driver>(trip.driver).is_none() {
        return Err(DispatchError::DriverNotFound(trip.driver_id));
    }
    if store.world.get::<Rider>(trip.rider).is_none() {
        return Err(DispatchError::RiderNotFound(trip.rider_id));
    }

    if let Some(mut driver) = store.world.get_entity_mut(trip.driver) {
        let assigned = driver.get::<Driver>().and_then(|d| d.assigned_trip);
        if assigned == Some(trip_entity) {
            driver.set_driver_available().insert(Position(trip.end));
            if let Some(mut component) = driver.get_mut::<Driver>() {
                component.assigned_trip = None;
            }
        } else {
            warn!(
                trip_id = %trip_id,
                driver_id = %trip.driver_id,
                "driver is assigned to another trip; not released"
            );
        }
    }

    if let Some(mut rider) = store.world.get_entity_mut(trip.rider) {
        rider.insert(Position(trip.end));
        if let Some(mut component) = rider.get_mut::<Rider>() {
            component.history.push(trip_entity);
        }
    }

    if let Some(mut entity) = store.world.get_entity_mut(trip_entity) {
        entity.set_trip_status(TripStatus::Completed);
    }

    info!(
        trip_id = %trip_id,
        driver_id = %trip.driver_id,
        rider_id = %trip.rider_id,
        end = %trip.end,
        "trip completed"
    );
    Ok(TripStatus::Completed)
}
