//! Entity store: owns every driver, rider and trip for the life of a registry.
//!
//! Records live as entities in a [`World`]. [`EntityIndex`] maps public
//! identifiers (and names, for the uniqueness rule) to those entities. The
//! store itself is not synchronized; [`crate::registry::DispatchRegistry`]
//! wraps it in a lock.

use std::collections::HashMap;

use bevy_ecs::prelude::{Entity, With, World};
use tracing::{info, warn};

use crate::ecs::{
    Available, Driver, DriverId, DriverStatus, Position, Rider, RiderId, Trip, TripId, TripStatus,
};
use crate::error::{DispatchError, DispatchResult};
use crate::matching::MatchCandidate;
use crate::records::{DriverRecord, RiderRecord, TripRecord};
use crate::spatial::Location;

/// Identifier and name lookups into the world.
#[derive(Debug, Default)]
pub struct EntityIndex {
    drivers: HashMap<DriverId, Entity>,
    riders: HashMap<RiderId, Entity>,
    trips: HashMap<TripId, Entity>,
    driver_names: HashMap<String, DriverId>,
    rider_names: HashMap<String, RiderId>,
    next_driver_seq: u64,
}

#[derive(Debug, Default)]
pub struct EntityStore {
    pub(crate) world: World,
    pub(crate) index: EntityIndex,
}

impl EntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a driver as available at `location`.
    ///
    /// Names are unique among drivers (exact, case-sensitive match).
    pub fn register_driver(
        &mut self,
        name: &str,
        location: Location,
    ) -> DispatchResult<DriverRecord> {
        if self.index.driver_names.contains_key(name) {
            warn!(name, "driver name already registered");
            return Err(DispatchError::DuplicateDriverName(name.to_string()));
        }

        let id = DriverId::new();
        let registration_seq = self.index.next_driver_seq;
        self.index.next_driver_seq += 1;

        let entity = self
            .world
            .spawn((
                Driver {
                    id,
                    name: name.to_string(),
                    registration_seq,
                    assigned_trip: None,
                },
                Position(location),
                Available,
            ))
            .id();
        self.index.drivers.insert(id, entity);
        self.index.driver_names.insert(name.to_string(), id);

        info!(driver_id = %id, name, %location, "driver registered");
        Ok(DriverRecord {
            id,
            name: name.to_string(),
            location,
            status: DriverStatus::Available,
        })
    }

    /// Register a rider at `location`. Rider names are a separate namespace
    /// from driver names.
    pub fn register_rider(
        &mut self,
        name: &str,
        location: Location,
    ) -> DispatchResult<RiderRecord> {
        if self.index.rider_names.contains_key(name) {
            warn!(name, "rider name already registered");
            return Err(DispatchError::DuplicateRiderName(name.to_string()));
        }

        let id = RiderId::new();
        let entity = self
            .world
            .spawn((
                Rider {
                    id,
                    name: name.to_string(),
                    history: Vec::new(),
                },
                Position(location),
            ))
            .id();
        self.index.riders.insert(id, entity);
        self.index.rider_names.insert(name.to_string(), id);

        info!(rider_id = %id, name, %location, "rider registered");
        Ok(RiderRecord {
            id,
            name: name.to_string(),
            location,
            history: Vec::new(),
        })
    }

    pub fn driver(&self, id: DriverId) -> DispatchResult<DriverRecord> {
        let entity = self.driver_entity(id)?;
        self.driver_record(entity)
            .ok_or(DispatchError::DriverNotFound(id))
    }

    pub fn rider(&self, id: RiderId) -> DispatchResult<RiderRecord> {
        let entity = self.rider_entity(id)?;
        self.rider_record(entity)
            .ok_or(DispatchError::RiderNotFound(id))
    }

    pub fn trip(&self, id: TripId) -> DispatchResult<TripRecord> {
        let entity = self.trip_entity(id)?;
        self.trip_record(entity)
            .ok_or(DispatchError::TripNotFound(id))
    }

    pub fn driver_by_name(&self, name: &str) -> Option<DriverId> {
        self.index.driver_names.get(name).copied()
    }

    pub fn rider_by_name(&self, name: &str) -> Option<RiderId> {
        self.index.rider_names.get(name).copied()
    }

    pub fn driver_count(&self) -> usize {
        self.index.drivers.len()
    }

    pub fn rider_count(&self) -> usize {
        self.index.riders.len()
    }

    pub fn trip_count(&self) -> usize {
        self.index.trips.len()
    }

    /// Available drivers in registration order.
    ///
    /// Marker changes move entities between archetypes, so raw query order
    /// is not stable; sorting keeps matching reproducible.
    pub fn available_drivers(&mut self) -> Vec<MatchCandidate> {
        let mut query = self
            .world
            .query_filtered::<(Entity, &Driver, &Position), With<Available>>();
        let mut candidates: Vec<MatchCandidate> = query
            .iter(&self.world)
            .map(|(entity, driver, position)| MatchCandidate {
                driver_entity: entity,
                registration_seq: driver.registration_seq,
                position: position.0,
            })
            .collect();
        candidates.sort_by_key(|candidate| candidate.registration_seq);
        candidates
    }

    pub(crate) fn driver_entity(&self, id: DriverId) -> DispatchResult<Entity> {
        self.index
            .drivers
            .get(&id)
            .copied()
            .ok_or(DispatchError::DriverNotFound(id))
    }

    pub(crate) fn rider_entity(&self, id: RiderId) -> DispatchResult<Entity> {
        self.index
            .riders
            .get(&id)
            .copied()
            .ok_or(DispatchError::RiderNotFound(id))
    }

    pub(crate) fn trip_entity(&self, id: TripId) -> DispatchResult<Entity> {
        self.index
            .trips
            .get(&id)
            .copied()
            .ok_or(DispatchError::TripNotFound(id))
    }

    pub(crate) fn insert_trip(&mut self, id: TripId, entity: Entity) {
        self.index.trips.insert(id, entity);
    }

    pub(crate) fn driver_record(&self, entity: Entity) -> Option<DriverRecord> {
        let entity_ref = self.world.get_entity(entity)?;
        let driver = entity_ref.get::<Driver>()?;
        let position = entity_ref.get::<Position>()?;
        Some(DriverRecord {
            id: driver.id,
            name: driver.name.clone(),
            location: position.0,
            status: DriverStatus::of(entity_ref)?,
        })
    }

    pub(crate) fn rider_record(&self, entity: Entity) -> Option<RiderRecord> {
        let entity_ref = self.world.get_entity(entity)?;
        let rider = entity_ref.get::<Rider>()?;
        let position = entity_ref.get::<Position>()?;
        let history = rider
            .history
            .iter()
            .filter_map(|trip| self.world.get::<Trip>(*trip).map(|trip| trip.id))
            .collect();
        Some(RiderRecord {
            id: rider.id,
            name: rider.name.clone(),
            location: position.0,
            history,
        })
    }

    pub(crate) fn trip_record(&self, entity: Entity) -> Option<TripRecord> {
        let entity_ref = self.world.get_entity(entity)?;
        let trip = entity_ref.get::<Trip>()?;
        let rider = self.world.get::<Rider>(trip.rider)?;
        let driver = self.world.get::<Driver>(trip.driver)?;
        Some(TripRecord {
            id: trip.id,
            rider_id: trip.rider_id,
            rider_name: rider.name.clone(),
            driver_id: trip.driver_id,
            driver_name: driver.name.clone(),
            start: trip.start,
            end: trip.end,
            status: TripStatus::of(entity_ref)?,
        })
    }

    pub(crate) fn driver_entities(&self) -> impl Iterator<Item = Entity> + '_ {
        self.index.drivers.values().copied()
    }

    pub(crate) fn trip_entities(&self) -> impl Iterator<Item = Entity> + '_ {
        self.index.trips.values().copied()
    }
}
