#![allow(dead_code)]

use dispatch_core::{DispatchRegistry, DriverRecord, Location, RiderRecord, RiderRegistry};

/// Builder for driver fixtures.
#[derive(Clone, Debug)]
pub struct DriverBuilder {
    name: String,
    location: Location,
}

impl DriverBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            location: Location::default(),
        }
    }

    pub fn at(mut self, x: i32, y: i32) -> Self {
        self.location = Location::new(x, y);
        self
    }

    /// Register the driver fixture into the provided registry.
    pub fn register(self, registry: &DispatchRegistry) -> DriverRecord {
        registry
            .register_driver(&self.name, self.location)
            .expect("driver fixture should register")
    }
}

/// Builder for rider fixtures.
#[derive(Clone, Debug)]
pub struct RiderBuilder {
    name: String,
    location: Location,
}

impl RiderBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            location: Location::default(),
        }
    }

    pub fn at(mut self, x: i32, y: i32) -> Self {
        self.location = Location::new(x, y);
        self
    }

    /// Register the rider fixture into the provided registry.
    pub fn register(self, registry: &DispatchRegistry) -> RiderRecord {
        registry
            .register_rider(&self.name, self.location)
            .expect("rider fixture should register")
    }
}
