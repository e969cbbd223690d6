use std::fmt::Debug;

use crate::spatial::Location;

use super::types::{MatchCandidate, MatchResult};

/// Trait for matching algorithms that pick a driver for a requesting rider.
///
/// Implementations must be deterministic: for the same rider position and the
/// same candidate slice they return the same driver. Candidates are supplied
/// in registration order and are all currently available.
pub trait MatchingAlgorithm: Debug + Send + Sync {
    /// Returns the chosen driver, or `None` when `available_drivers` is empty.
    fn find_match(
        &self,
        rider_pos: Location,
        available_drivers: &[MatchCandidate],
    ) -> Option<MatchResult>;
}
