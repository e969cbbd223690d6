//! Registry configuration.

use serde::{Deserialize, Serialize};

use crate::ecs::TripStatus;
use crate::matching::MatchingAlgorithmType;

/// Status a freshly booked trip is created in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TripStartPolicy {
    /// Trips start as soon as they are booked.
    #[default]
    Immediate,
    /// Trips wait in `NotStarted` until `start_trip` confirms them.
    OnConfirm,
}

impl TripStartPolicy {
    pub fn initial_status(self) -> TripStatus {
        match self {
            Self::Immediate => TripStatus::InProgress,
            Self::OnConfirm => TripStatus::NotStarted,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DispatchConfig {
    pub matching: MatchingAlgorithmType,
    pub trip_start: TripStartPolicy,
}

impl DispatchConfig {
    pub fn with_matching(mut self, matching: MatchingAlgorithmType) -> Self {
        self.matching = matching;
        self
    }

    pub fn with_trip_start(mut self, trip_start: TripStartPolicy) -> Self {
        self.trip_start = trip_start;
        self
    }
}
