//! Telemetry: aggregate counts over the store for monitoring and demos.

use serde::{Deserialize, Serialize};

use crate::ecs::{DriverStatus, TripStatus};

/// Aggregated counts at a point in time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryCounts {
    pub drivers_available: usize,
    pub drivers_reserved: usize,
    pub riders: usize,
    pub trips_not_started: usize,
    pub trips_in_progress: usize,
    pub trips_completed: usize,
}

impl RegistryCounts {
    pub fn add_driver(&mut self, status: DriverStatus) {
        match status {
            DriverStatus::Available => self.drivers_available += 1,
            DriverStatus::Reserved => self.drivers_reserved += 1,
        }
    }

    pub fn add_trip(&mut self, status: TripStatus) {
        match status {
            TripStatus::NotStarted => self.trips_not_started += 1,
            TripStatus::InProgress => self.trips_in_progress += 1,
            TripStatus::Completed => self.trips_completed += 1,
        }
    }

    pub fn drivers(&self) -> usize {
        self.drivers_available + self.drivers_reserved
    }

    pub fn trips(&self) -> usize {
        self.trips_not_started + self.trips_in_progress + self.trips_completed
    }

    pub fn active_trips(&self) -> usize {
        self.trips_not_started + self.trips_in_progress
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn totals_add_up() {
        let mut counts = RegistryCounts::default();
        counts.add_driver(DriverStatus::Available);
        counts.add_driver(DriverStatus::Reserved);
        counts.add_trip(TripStatus::InProgress);
        counts.add_trip(TripStatus::Completed);
        counts.add_trip(TripStatus::Completed);

        assert_eq!(counts.drivers(), 2);
        assert_eq!(counts.trips(), 3);
        assert_eq!(counts.active_trips(), 1);
    }
}
