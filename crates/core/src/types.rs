//! Fundamental identifiers and tags
//!
//! This module defines the types used throughout the system:
//! - [`VehicleClass`]: the class of vehicle a spot accepts
//! - [`LevelId`] / [`SpotId`]: numeric identifiers, unique within their parent
//! - [`Placement`]: a (level, spot) pair naming one allocatable unit
//! - [`SpotState`]: the two-state occupancy machine

use serde::{Deserialize, Serialize};

/// Class of vehicle a spot can accommodate
///
/// A spot accepts exactly one class, fixed at construction. Vehicles carry
/// their class as an immutable tag; no subtype hierarchy is needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum VehicleClass {
    /// Standard passenger vehicle
    Compact,
    /// Motorcycles, scooters
    TwoWheeler,
    /// Trucks, buses, anything needing an oversized bay
    Oversized,
}

impl VehicleClass {
    /// All classes, in a fixed order (useful for per-class summaries)
    pub const ALL: [VehicleClass; 3] = [
        VehicleClass::Compact,
        VehicleClass::TwoWheeler,
        VehicleClass::Oversized,
    ];
}

impl std::fmt::Display for VehicleClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            VehicleClass::Compact => "Compact",
            VehicleClass::TwoWheeler => "TwoWheeler",
            VehicleClass::Oversized => "Oversized",
        };
        write!(f, "{}", name)
    }
}

/// Identifier of a level within a lot
///
/// Unique within one lot, not globally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LevelId(pub u32);

impl LevelId {
    /// Raw numeric value
    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for LevelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "L{}", self.0)
    }
}

/// Identifier of a spot within a level
///
/// Unique within one level, not globally. Spot ids follow the level's
/// iteration order, so lower ids are claimed first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SpotId(pub u32);

impl SpotId {
    /// Raw numeric value
    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for SpotId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "S{}", self.0)
    }
}

/// A (level, spot) pair naming one allocatable unit
///
/// Returned by a successful claim and consumed by release. A `Placement` is
/// only meaningful for the lot that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Placement {
    /// Level that owns the spot
    pub level: LevelId,
    /// Spot within that level
    pub spot: SpotId,
}

impl Placement {
    /// Create a placement from its parts
    pub fn new(level: LevelId, spot: SpotId) -> Self {
        Self { level, spot }
    }
}

impl std::fmt::Display for Placement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.level, self.spot)
    }
}

/// Occupancy state of a single spot
///
/// Transitions: `Free -> Occupied` via a successful claim,
/// `Occupied -> Free` via release. Initial state is `Free`; there is no
/// terminal state, spots cycle for the lifetime of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpotState {
    /// Spot is available for a compatible vehicle
    Free,
    /// Spot holds a vehicle
    Occupied,
}

impl SpotState {
    /// Build the state from a raw occupancy flag
    pub fn from_occupied(occupied: bool) -> Self {
        if occupied {
            SpotState::Occupied
        } else {
            SpotState::Free
        }
    }

    /// True when the spot holds a vehicle
    pub fn is_occupied(&self) -> bool {
        matches!(self, SpotState::Occupied)
    }
}

impl std::fmt::Display for SpotState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SpotState::Free => "Free",
            SpotState::Occupied => "Occupied",
        };
        write!(f, "{}", name)
    }
}
