//! Thread-safe registry facade.
//!
//! [`DispatchRegistry`] owns the [`EntityStore`] behind an `RwLock`. Every
//! mutating operation holds the write lock for its full duration, which makes
//! a booking's scan-select-reserve sequence atomic: two concurrent bookings
//! can never reserve the same driver. Queries share the read lock and always
//! see a fully applied state.
//!
//! Bookings fail fast with [`crate::error::DispatchError::NoAvailableDriver`] instead of
//! waiting for a driver to be released.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::config::DispatchConfig;
use crate::dispatch;
use crate::ecs::{DriverId, DriverStatus, RiderId, TripId, TripStatus};
use crate::error::DispatchResult;
use crate::lifecycle;
use crate::matching::{build_matching_algorithm, MatchingAlgorithm};
use crate::query;
use crate::records::{DriverRecord, RiderRecord, TripRecord};
use crate::spatial::Location;
use crate::store::EntityStore;
use crate::telemetry::RegistryCounts;

/// The boundary operation set of the dispatch registry.
pub trait RiderRegistry {
    fn register_driver(&self, name: &str, location: Location) -> DispatchResult<DriverRecord>;

    fn register_rider(&self, name: &str, location: Location) -> DispatchResult<RiderRecord>;

    /// Match the rider to a driver and create a trip to `destination`.
    fn book_cab(&self, rider_id: RiderId, destination: Location) -> DispatchResult<TripRecord>;

    fn start_trip(&self, trip_id: TripId) -> DispatchResult<TripStatus>;

    fn end_trip(&self, trip_id: TripId) -> DispatchResult<TripStatus>;

    fn driver_status(&self, driver_id: DriverId) -> DispatchResult<DriverStatus>;

    /// Completed trips in completion order; empty for a rider with none.
    fn rider_history(&self, rider_id: RiderId) -> DispatchResult<Vec<TripRecord>>;
}

#[derive(Debug)]
pub struct DispatchRegistry {
    store: RwLock<EntityStore>,
    matcher: Box<dyn MatchingAlgorithm>,
    config: DispatchConfig,
}

impl Default for DispatchRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl DispatchRegistry {
    pub fn new() -> Self {
        Self::with_config(DispatchConfig::default())
    }

    pub fn with_config(config: DispatchConfig) -> Self {
        Self {
            store: RwLock::new(EntityStore::new()),
            matcher: build_matching_algorithm(config.matching),
            config,
        }
    }

    /// Use a custom matching algorithm instead of the configured one.
    ///
    /// Only the matcher is replaced. [`DispatchRegistry::config`] still
    /// returns the configuration the registry was built with, so its
    /// `matching` field no longer names the algorithm in use.
    pub fn with_matcher(mut self, matcher: Box<dyn MatchingAlgorithm>) -> Self {
        self.matcher = matcher;
        self
    }

    /// The configuration this registry was built from.
    pub fn config(&self) -> &DispatchConfig {
        &self.config
    }

    pub fn driver(&self, id: DriverId) -> DispatchResult<DriverRecord> {
        self.read().driver(id)
    }

    pub fn rider(&self, id: RiderId) -> DispatchResult<RiderRecord> {
        self.read().rider(id)
    }

    pub fn trip(&self, id: TripId) -> DispatchResult<TripRecord> {
        self.read().trip(id)
    }

    pub fn counts(&self) -> RegistryCounts {
        query::counts(&self.read())
    }

    pub fn trip_count(&self) -> usize {
        self.read().trip_count()
    }

    // Mutations validate before they write; a poisoned store is still consistent.
    fn read(&self) -> RwLockReadGuard<'_, EntityStore> {
        self.store.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, EntityStore> {
        self.store.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl RiderRegistry for DispatchRegistry {
    fn register_driver(&self, name: &str, location: Location) -> DispatchResult<DriverRecord> {
        self.write().register_driver(name, location)
    }

    fn register_rider(&self, name: &str, location: Location) -> DispatchResult<RiderRecord> {
        self.write().register_rider(name, location)
    }

    fn book_cab(&self, rider_id: RiderId, destination: Location) -> DispatchResult<TripRecord> {
        let mut store = self.write();
        dispatch::book_cab(
            &mut store,
            self.matcher.as_ref(),
            rider_id,
            destination,
            self.config.trip_start.initial_status(),
        )
    }

    fn start_trip(&self, trip_id: TripId) -> DispatchResult<TripStatus> {
        lifecycle::start_trip(&mut self.write(), trip_id)
    }

    fn end_trip(&self, trip_id: TripId) -> DispatchResult<TripStatus> {
        lifecycle::end_trip(&mut self.write(), trip_id)
    }

    fn driver_status(&self, driver_id: DriverId) -> DispatchResult<DriverStatus> {
        query::driver_status(&self.read(), driver_id)
    }

    fn rider_history(&self, rider_id: RiderId) -> DispatchResult<Vec<TripRecord>> {
        query::rider_history(&self.read(), rider_id)
    }
}
