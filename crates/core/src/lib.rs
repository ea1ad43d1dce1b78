//! Core types for the parking facility
//!
//! This crate defines the fundamental vocabulary shared by every layer:
//! - [`types`]: identifiers, vehicle classes, placements, spot states
//! - [`error`]: the error taxonomy and `Result` alias
//! - [`layout`]: static facility configuration
//! - [`status`]: point-in-time occupancy snapshots
//!
//! No locking and no mutable state live here. Concurrency belongs to the
//! engine crate.

pub mod error;
pub mod layout;
pub mod status;
pub mod types;

pub use error::{Error, Result};
pub use layout::{LevelLayout, LotLayout};
pub use status::{LevelStatus, LotStatus, SpotStatus};
pub use types::{LevelId, Placement, SpotId, SpotState, VehicleClass};
