//! Dispatcher: matches a rider to a driver and books the trip.

use bevy_ecs::prelude::Entity;
use tracing::{debug, info, warn};

use crate::ecs::{
    Available, Driver, DriverId, DriverStateExt, Position, RiderId, Trip, TripId, TripStateExt,
    TripStatus,
};
use crate::error::{DispatchError, DispatchResult};
use crate::matching::{MatchCandidate, MatchingAlgorithm};
use crate::records::TripRecord;
use crate::spatial::Location;
use crate::store::EntityStore;

/// The driver a matcher picked, if it may take a new trip: it must be one of
/// the offered candidates, still `Available` and not assigned elsewhere.
fn reservable_driver(
    store: &EntityStore,
    candidates: &[MatchCandidate],
    entity: Entity,
) -> Option<DriverId> {
    if !candidates.iter().any(|c| c.driver_entity == entity) {
        return None;
    }
    let entity_ref = store.world.get_entity(entity)?;
    let driver = entity_ref.get::<Driver>()?;
    let free = entity_ref.contains::<Available>() && driver.assigned_trip.is_none();
    free.then_some(driver.id)
}

/// Book a trip for `rider_id` to `destination`.
///
/// Candidate collection, driver selection and reservation happen against a
/// single `&mut EntityStore`, so callers holding the store exclusively get an
/// atomic scan-and-reserve. On any error nothing is written.
pub fn book_cab(
    store: &mut EntityStore,
    matcher: &dyn MatchingAlgorithm,
    rider_id: RiderId,
    destination: Location,
    initial: TripStatus,
) -> DispatchResult<TripRecord> {
    let rider_entity = store.rider_entity(rider_id)?;
    let rider_pos = store
        .world
        .get::<Position>(rider_entity)
        .map(|position| position.0)
        .ok_or(DispatchError::RiderNotFound(rider_id))?;

    let candidates = store.available_drivers();
    debug!(rider_id = %rider_id, candidates = candidates.len(), "matching rider");

    let Some(matched) = matcher.find_match(rider_pos, &candidates) else {
        warn!(rider_id = %rider_id, "no available drivers");
        return Err(DispatchError::NoAvailableDriver);
    };

    let Some(driver_id) = reservable_driver(store, &candidates, matched.driver_entity) else {
        warn!(rider_id = %rider_id, "matcher selected a driver that cannot be reserved");
        return Err(DispatchError::NoAvailableDriver);
    };

    let trip_id = TripId::new();
    let trip = Trip {
        id: trip_id,
        rider: rider_entity,
        rider_id,
        driver: matched.driver_entity,
        driver_id,
        start: rider_pos,
        end: destination,
    };
    let trip_entity = store.world.spawn(trip).set_trip_status(initial).id();

    if let Some(mut driver) = store.world.get_entity_mut(matched.driver_entity) {
        driver.set_driver_reserved();
        if let Some(mut component) = driver.get_mut::<Driver>() {
            component.assigned_trip = Some(trip_entity);
        }
    }
    store.insert_trip(trip_id, trip_entity);

    info!(
        trip_id = %trip_id,
        rider_id = %rider_id,
        driver_id = %driver_id,
        distance = matched.pickup_distance,
        start = %rider_pos,
        end = %destination,
        "trip booked"
    );

    store
        .trip_record(trip_entity)
        .ok_or(DispatchError::TripNotFound(trip_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::DriverStatus;
    use crate::matching::{MatchResult, NearestDriverMatching};

    /// Always answers with the same entity, whatever it is offered.
    #[derive(Debug)]
    struct FixedMatching(Entity);

    impl MatchingAlgorithm for FixedMatching {
        fn find_match(&self, _: Location, _: &[MatchCandidate]) -> Option<MatchResult> {
            Some(MatchResult {
                driver_entity: self.0,
                pickup_distance: 0.0,
            })
        }
    }

    #[test]
    fn books_nearest_driver_and_reserves_it() {
        let mut store = EntityStore::new();
        let d1 = store
            .register_driver("Paulson", Location::new(2, 3))
            .expect("d1");
        let d2 = store
            .register_driver("Daniel", Location::new(5, 5))
            .expect("d2");
        let rider = store
            .register_rider("Swag", Location::new(7, 2))
            .expect("rider");

        let trip = book_cab(
            &mut store,
            &NearestDriverMatching,
            rider.id,
            Location::new(3, 8),
            TripStatus::InProgress,
        )
        .expect("booked");

        assert_eq!(trip.driver_id, d2.id);
        assert_eq!(trip.start, Location::new(7, 2));
        assert_eq!(trip.end, Location::new(3, 8));
        assert_eq!(trip.status, TripStatus::InProgress);
        assert_eq!(
            store.driver(d2.id).expect("d2").status,
            DriverStatus::Reserved
        );
        assert_eq!(
            store.driver(d1.id).expect("d1").status,
            DriverStatus::Available
        );
        assert_eq!(store.trip_count(), 1);
    }

    #[test]
    fn no_available_driver_leaves_store_untouched() {
        let mut store = EntityStore::new();
        let rider = store
            .register_rider("Samuel", Location::new(9, 2))
            .expect("rider");

        let err = book_cab(
            &mut store,
            &NearestDriverMatching,
            rider.id,
            Location::new(9, 8),
            TripStatus::InProgress,
        )
        .expect_err("no drivers");
        assert_eq!(err, DispatchError::NoAvailableDriver);
        assert_eq!(store.trip_count(), 0);
    }

    #[test]
    fn unknown_rider_is_rejected() {
        let mut store = EntityStore::new();
        store
            .register_driver("Sammy", Location::new(6, 6))
            .expect("driver");
        let missing = RiderId::new();

        let err = book_cab(
            &mut store,
            &NearestDriverMatching,
            missing,
            Location::new(0, 0),
            TripStatus::InProgress,
        )
        .expect_err("unknown rider");
        assert_eq!(err, DispatchError::RiderNotFound(missing));
        assert_eq!(store.available_drivers().len(), 1);
    }

    #[test]
    fn reserved_driver_returned_by_matcher_is_refused() {
        let mut store = EntityStore::new();
        let driver = store
            .register_driver("Sammy", Location::new(6, 6))
            .expect("driver");
        let first = store
            .register_rider("Treasure", Location::new(6, 6))
            .expect("first rider");
        let second = store
            .register_rider("Samuel", Location::new(9, 2))
            .expect("second rider");
        let driver_entity = store.driver_entity(driver.id).expect("entity");
        let matcher = FixedMatching(driver_entity);

        let trip = book_cab(
            &mut store,
            &matcher,
            first.id,
            Location::new(9, 9),
            TripStatus::InProgress,
        )
        .expect("first booking");
        assert_eq!(trip.driver_id, driver.id);

        let err = book_cab(
            &mut store,
            &matcher,
            second.id,
            Location::new(3, 8),
            TripStatus::InProgress,
        )
        .expect_err("driver already reserved");
        assert_eq!(err, DispatchError::NoAvailableDriver);
        assert_eq!(store.trip_count(), 1);
        assert_eq!(
            store.driver(driver.id).expect("driver").status,
            DriverStatus::Reserved
        );
    }

    #[test]
    fn matcher_answer_outside_candidates_is_refused() {
        let mut store = EntityStore::new();
        store
            .register_driver("Daniel", Location::new(5, 5))
            .expect("driver");
        let rider = store
            .register_rider("Swag", Location::new(7, 2))
            .expect("rider");
        let rider_entity = store.rider_entity(rider.id).expect("entity");

        let err = book_cab(
            &mut store,
            &FixedMatching(rider_entity),
            rider.id,
            Location::new(3, 8),
            TripStatus::InProgress,
        )
        .expect_err("not a candidate");
        assert_eq!(err, DispatchError::NoAvailableDriver);
        assert_eq!(store.trip_count(), 0);
        assert_eq!(store.available_drivers().len(), 1);
    }
}
