use crate::spatial::{euclidean_distance, Location};

use super::algorithm::MatchingAlgorithm;
use super::types::{MatchCandidate, MatchResult};

/// First-come-first-served matching: the earliest-registered available
/// driver, regardless of distance.
///
/// Useful as a baseline against [`super::NearestDriverMatching`].
#[derive(Debug, Default, Clone, Copy)]
pub struct FirstAvailableMatching;

impl MatchingAlgorithm for FirstAvailableMatching {
    fn find_match(
        &self,
        rider_pos: Location,
        available_drivers: &[MatchCandidate],
    ) -> Option<MatchResult> {
        available_drivers
            .iter()
            .min_by_key(|candidate| candidate.registration_seq)
            .map(|candidate| MatchResult {
                driver_entity: candidate.driver_entity,
                pickup_distance: euclidean_distance(rider_pos, candidate.position),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy_ecs::prelude::Entity;

    #[test]
    fn ignores_distance() {
        let far = MatchCandidate {
            driver_entity: Entity::from_raw(1),
            registration_seq: 0,
            position: Location::new(100, 100),
        };
        let near = MatchCandidate {
            driver_entity: Entity::from_raw(2),
            registration_seq: 1,
            position: Location::new(0, 1),
        };

        let result = FirstAvailableMatching
            .find_match(Location::new(0, 0), &[near, far])
            .expect("match");
        assert_eq!(result.driver_entity, Entity::from_raw(1));
        assert!(result.pickup_distance > 100.0);
    }
}
