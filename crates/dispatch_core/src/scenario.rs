//! Scenario builder: populate a registry with a reproducible random fleet.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::ecs::{DriverId, RiderId};
use crate::error::DispatchResult;
use crate::registry::RiderRegistry;
use crate::spatial::Location;

/// Parameters for building a fleet scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FleetParams {
    pub num_drivers: usize,
    pub num_riders: usize,
    /// Side length of the square grid positions are drawn from.
    pub grid_size: i32,
    /// Seed for RNG (for reproducibility).
    pub seed: u64,
}

impl Default for FleetParams {
    fn default() -> Self {
        Self {
            num_drivers: 100,
            num_riders: 500,
            grid_size: 100,
            seed: 0,
        }
    }
}

impl FleetParams {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_drivers(mut self, num_drivers: usize) -> Self {
        self.num_drivers = num_drivers;
        self
    }

    pub fn with_riders(mut self, num_riders: usize) -> Self {
        self.num_riders = num_riders;
        self
    }

    pub fn with_grid_size(mut self, grid_size: i32) -> Self {
        self.grid_size = grid_size.max(1);
        self
    }
}

/// Identifiers of everything a scenario registered, in registration order.
#[derive(Debug, Clone, Default)]
pub struct Fleet {
    pub drivers: Vec<DriverId>,
    pub riders: Vec<RiderId>,
}

fn random_location(rng: &mut StdRng, grid_size: i32) -> Location {
    let size = grid_size.max(1);
    Location::new(rng.gen_range(0..size), rng.gen_range(0..size))
}

/// Register `driver-{i}` and `rider-{i}` at seeded random grid positions.
pub fn populate<R: RiderRegistry + ?Sized>(
    registry: &R,
    params: FleetParams,
) -> DispatchResult<Fleet> {
    let mut rng = StdRng::seed_from_u64(params.seed);
    let mut fleet = Fleet::default();

    for i in 0..params.num_drivers {
        let location = random_location(&mut rng, params.grid_size);
        let driver = registry.register_driver(&format!("driver-{i}"), location)?;
        fleet.drivers.push(driver.id);
    }
    for i in 0..params.num_riders {
        let location = random_location(&mut rng, params.grid_size);
        let rider = registry.register_rider(&format!("rider-{i}"), location)?;
        fleet.riders.push(rider.id);
    }

    debug!(
        drivers = fleet.drivers.len(),
        riders = fleet.riders.len(),
        seed = params.seed,
        "fleet populated"
    );
    Ok(fleet)
}

/// Seeded random destinations inside the scenario grid.
pub fn random_destinations(params: FleetParams, count: usize) -> Vec<Location> {
    // Offset the seed so destinations are independent of registration positions.
    let mut rng = StdRng::seed_from_u64(params.seed.wrapping_add(1));
    (0..count)
        .map(|_| random_location(&mut rng, params.grid_size))
        .collect()
}
