use crate::spatial::{euclidean_distance, Location};

use super::algorithm::MatchingAlgorithm;
use super::types::{MatchCandidate, MatchResult};

/// Nearest-driver-first matching.
///
/// Picks the candidate with the strictly smallest Euclidean distance to the
/// rider. Among equidistant candidates the one registered first wins, so the
/// result does not depend on storage order.
///
/// This is a greedy per-request heuristic; no global optimization across
/// several waiting riders is attempted.
///
/// Time complexity: O(n) in the number of available drivers.
#[derive(Debug, Default, Clone, Copy)]
pub struct NearestDriverMatching;

impl MatchingAlgorithm for NearestDriverMatching {
    fn find_match(
        &self,
        rider_pos: Location,
        available_drivers: &[MatchCandidate],
    ) -> Option<MatchResult> {
        let mut best: Option<(&MatchCandidate, f64)> = None;

        for candidate in available_drivers {
            let distance = euclidean_distance(rider_pos, candidate.position);
            match best {
                None => best = Some((candidate, distance)),
                Some((current, best_distance))
                    if distance < best_distance
                        || (distance == best_distance
                            && candidate.registration_seq < current.registration_seq) =>
                {
                    best = Some((candidate, distance))
                }
                _ => {}
            }
        }

        best.map(|(candidate, distance)| MatchResult {
            driver_entity: candidate.driver_entity,
            pickup_distance: distance,
        })
    }
}
