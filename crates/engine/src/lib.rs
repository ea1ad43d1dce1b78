//! Allocation engine for the parking facility
//!
//! This crate owns every piece of shared mutable state and all locking:
//! - [`spot::Spot`]: the smallest unit, one occupancy flag behind its own lock
//! - [`level::Level`]: an ordered, lock-free collection of spots
//! - [`lot::Lot`]: cross-level first-fit allocation plus observer fan-out
//! - [`gate::Gate`]: one concurrent caller identity bound to a lot
//! - [`observer`]: the subscriber contract and notification payload
//!
//! # Locking model
//!
//! Each spot carries its own `parking_lot::Mutex`; no lot-wide lock exists,
//! so claims on unrelated spots never contend. Critical sections are a
//! boolean check and set, never I/O. The observer registry has its own lock,
//! held only to mutate or snapshot the list, never across a callback.

pub mod gate;
pub mod level;
pub mod lot;
pub mod observer;
pub mod spot;

pub use gate::{Gate, GateId};
pub use level::Level;
pub use lot::Lot;
pub use observer::{LogObserver, SpotEvent, StatusObserver};
pub use spot::Spot;
