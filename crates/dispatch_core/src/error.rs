use thiserror::Error;

use crate::ecs::{DriverId, RiderId, TripId, TripStatus};

/// Errors returned by registry operations.
///
/// None of these leave the store partially mutated: an operation either
/// applies completely or not at all.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    #[error("a driver named {0:?} is already registered")]
    DuplicateDriverName(String),

    #[error("a rider named {0:?} is already registered")]
    DuplicateRiderName(String),

    #[error("driver {0} not found")]
    DriverNotFound(DriverId),

    #[error("rider {0} not found")]
    RiderNotFound(RiderId),

    #[error("trip {0} not found")]
    TripNotFound(TripId),

    #[error("no available drivers at this moment")]
    NoAvailableDriver,

    #[error("trip {trip} cannot move from {from} to {to}")]
    InvalidTransition {
        trip: TripId,
        from: TripStatus,
        to: TripStatus,
    },
}

impl DispatchError {
    pub fn is_duplicate_name(&self) -> bool {
        matches!(
            self,
            Self::DuplicateDriverName(_) | Self::DuplicateRiderName(_)
        )
    }

    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::DriverNotFound(_) | Self::RiderNotFound(_) | Self::TripNotFound(_)
        )
    }
}

pub type DispatchResult<T> = Result<T, DispatchError>;
