//! Test helpers for common test setup and utilities.
//!
//! The reference session registers three drivers and three riders at fixed
//! grid points; tests and the demo reuse it so expectations stay comparable.

use crate::ecs::{DriverId, RiderId};
use crate::registry::{DispatchRegistry, RiderRegistry};
use crate::spatial::Location;

pub const REFERENCE_DRIVERS: [(&str, Location); 3] = [
    ("Paulson", Location::new(2, 3)),
    ("Daniel", Location::new(5, 5)),
    ("Sammy", Location::new(6, 6)),
];

pub const REFERENCE_RIDERS: [(&str, Location); 3] = [
    ("Swag", Location::new(7, 2)),
    ("Samuel", Location::new(9, 2)),
    ("Treasure", Location::new(6, 6)),
];

/// Destination booked by each reference rider, in rider order.
pub const REFERENCE_DESTINATIONS: [Location; 3] = [
    Location::new(3, 8),
    Location::new(9, 8),
    Location::new(9, 9),
];

#[derive(Debug, Clone)]
pub struct ReferenceFleet {
    pub drivers: Vec<DriverId>,
    pub riders: Vec<RiderId>,
}

/// Register the reference drivers and riders into `registry`.
///
/// # Panics
///
/// Panics if any registration fails (the registry must be empty).
pub fn register_reference_fleet(registry: &DispatchRegistry) -> ReferenceFleet {
    let drivers = REFERENCE_DRIVERS
        .iter()
        .map(|(name, location)| {
            registry
                .register_driver(name, *location)
                .expect("reference driver should register")
                .id
        })
        .collect();
    let riders = REFERENCE_RIDERS
        .iter()
        .map(|(name, location)| {
            registry
                .register_rider(name, *location)
                .expect("reference rider should register")
                .id
        })
        .collect();
    ReferenceFleet { drivers, riders }
}

/// A fresh default registry holding the reference fleet.
pub fn reference_registry() -> (DispatchRegistry, ReferenceFleet) {
    let registry = DispatchRegistry::new();
    let fleet = register_reference_fleet(&registry);
    (registry, fleet)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_fleet_registers_everyone() {
        let (registry, fleet) = reference_registry();
        assert_eq!(fleet.drivers.len(), 3);
        assert_eq!(fleet.riders.len(), 3);
        assert_eq!(registry.counts().drivers_available, 3);
        assert_eq!(registry.counts().riders, 3);
    }
}
