//! Error taxonomy for facility operations
//!
//! The surface is deliberately small: allocation can fail only by exhaustion,
//! release only by naming a level or spot that does not exist, and
//! construction only by invalid layout. Claim and release themselves are
//! total operations on a known spot.

use crate::types::{LevelId, SpotId, VehicleClass};
use thiserror::Error;

/// All facility errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// No compatible free spot exists anywhere in the lot.
    ///
    /// Recoverable: the caller may retry later or report to the user.
    #[error("no available spot for {class}")]
    NoAvailableSpot {
        /// Class the vehicle required
        class: VehicleClass,
    },

    /// A release named a level the lot does not have.
    #[error("unknown level {level}")]
    UnknownLevel {
        /// The level id that failed to resolve
        level: LevelId,
    },

    /// A release named a spot the level does not have.
    ///
    /// Releasing a *known* spot that is already free is not an error; that
    /// case is an idempotent no-op.
    #[error("unknown spot {spot} on level {level}")]
    UnknownSpot {
        /// Level the lookup went through
        level: LevelId,
        /// The spot id that failed to resolve
        spot: SpotId,
    },

    /// Layout validation failed at construction time.
    #[error("invalid layout: {0}")]
    InvalidLayout(String),
}

/// Result type for facility operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this error is retryable.
    ///
    /// Exhaustion may clear up as vehicles exit; id lookups and layout
    /// validation will fail the same way every time.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Error::NoAvailableSpot { .. })
    }

    /// Check if this is a release-target error (bad level or spot id).
    pub fn is_unknown_target(&self) -> bool {
        matches!(self, Error::UnknownLevel { .. } | Error::UnknownSpot { .. })
    }
}
