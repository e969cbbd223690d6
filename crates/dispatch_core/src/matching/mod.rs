pub mod algorithm;
pub mod first_available;
pub mod nearest;
pub mod types;

use serde::{Deserialize, Serialize};

pub use algorithm::MatchingAlgorithm;
pub use first_available::FirstAvailableMatching;
pub use nearest::NearestDriverMatching;
pub use types::{MatchCandidate, MatchResult};

/// Type of matching algorithm to use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchingAlgorithmType {
    #[default]
    Nearest,
    FirstAvailable,
}

/// Build the boxed matcher for a configured algorithm type.
pub fn build_matching_algorithm(kind: MatchingAlgorithmType) -> Box<dyn MatchingAlgorithm> {
    match kind {
        MatchingAlgorithmType::Nearest => Box::new(NearestDriverMatching),
        MatchingAlgorithmType::FirstAvailable => Box::new(FirstAvailableMatching),
    }
}
