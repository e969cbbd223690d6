use bevy_ecs::prelude::Entity;

use crate::spatial::Location;

/// An available driver offered to a matching algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchCandidate {
    pub driver_entity: Entity,
    pub registration_seq: u64,
    pub position: Location,
}

/// Represents a successful match result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchResult {
    pub driver_entity: Entity,
    pub pickup_distance: f64,
}
