//! Convenient re-exports for common usage.
//!
//! ```
//! use carpark::prelude::*;
//! ```

pub use crate::facility::{Facility, FacilityBuilder};
pub use carpark_core::{
    Error, LevelId, LevelLayout, LotLayout, LotStatus, Placement, Result, SpotId, SpotState,
    VehicleClass,
};
pub use carpark_engine::{Gate, GateId, LogObserver, SpotEvent, StatusObserver};
