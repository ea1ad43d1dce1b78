//! # Carpark
//!
//! Concurrent allocation core for a multi-level parking facility.
//!
//! A facility assigns spots to vehicles on entry and frees them on exit,
//! under concurrent access from any number of gates. Allocation is first-fit
//! over a fixed layout; each spot guards its own occupancy with its own
//! lock, so no spot is ever double-booked and unrelated spots never contend.
//!
//! ## Quick Start
//!
//! ```
//! use carpark::prelude::*;
//!
//! # fn main() -> carpark::Result<()> {
//! let facility = Facility::builder()
//!     .level([VehicleClass::Compact, VehicleClass::TwoWheeler])
//!     .level([VehicleClass::Compact, VehicleClass::Oversized])
//!     .build()?;
//!
//! let gate = facility.gate();
//! let placement = gate.enter(VehicleClass::Compact)?;
//! println!("{}", facility.status());
//! gate.exit(placement)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Observers
//!
//! Subscribers implementing [`StatusObserver`] are notified synchronously of
//! every spot-state transition, in registration order. A panicking observer
//! is isolated and never blocks the rest.

#![warn(missing_docs)]

mod facility;

pub mod prelude;

pub use facility::{Facility, FacilityBuilder};

// Re-export the error type unchanged; the taxonomy is small enough that a
// facade-level mapping would add nothing.
pub use carpark_core::{Error, Result};

// Re-export the vocabulary callers need at the boundary
pub use carpark_core::{
    LevelId, LevelLayout, LevelStatus, LotLayout, LotStatus, Placement, SpotId, SpotState,
    SpotStatus, VehicleClass,
};
pub use carpark_engine::{Gate, GateId, LogObserver, SpotEvent, StatusObserver};
