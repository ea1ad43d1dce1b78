//! Point-in-time occupancy snapshots
//!
//! A [`LotStatus`] is a read-only rendering of every level and spot. When
//! taken while entries and exits are in flight it may mix states from
//! different instants (each spot is read consistently, the whole is not
//! coordinated). After traffic quiesces it reflects exact occupancy.

use crate::types::{LevelId, Placement, SpotId, SpotState, VehicleClass};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// State of a single spot at snapshot time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpotStatus {
    /// Spot identifier within its level
    pub id: SpotId,
    /// Vehicle class this spot accepts
    pub class: VehicleClass,
    /// Occupancy at the instant this spot was read
    pub state: SpotState,
}

/// State of one level at snapshot time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelStatus {
    /// Level identifier
    pub id: LevelId,
    /// Per-spot states in scan order
    pub spots: Vec<SpotStatus>,
}

impl LevelStatus {
    /// Number of free spots accepting the given class
    pub fn free_count(&self, class: VehicleClass) -> usize {
        self.spots
            .iter()
            .filter(|s| s.class == class && !s.state.is_occupied())
            .count()
    }

    /// Number of occupied spots on this level
    pub fn occupied_count(&self) -> usize {
        self.spots.iter().filter(|s| s.state.is_occupied()).count()
    }
}

/// State of the whole lot at snapshot time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LotStatus {
    /// When the snapshot was taken
    pub captured_at: DateTime<Utc>,
    /// Per-level states in scan order
    pub levels: Vec<LevelStatus>,
}

impl LotStatus {
    /// Look up the state of one spot in this snapshot
    pub fn spot(&self, placement: Placement) -> Option<&SpotStatus> {
        self.levels
            .iter()
            .find(|l| l.id == placement.level)?
            .spots
            .iter()
            .find(|s| s.id == placement.spot)
    }

    /// Number of free spots accepting the given class, lot-wide
    pub fn free_count(&self, class: VehicleClass) -> usize {
        self.levels.iter().map(|l| l.free_count(class)).sum()
    }

    /// Number of occupied spots, lot-wide
    pub fn occupied_count(&self) -> usize {
        self.levels.iter().map(LevelStatus::occupied_count).sum()
    }
}

impl std::fmt::Display for LotStatus {
    /// Human-readable rendering, one line per spot:
    ///
    /// ```text
    /// Level L0:
    ///   Spot S0 [Compact]: Occupied
    ///   Spot S1 [TwoWheeler]: Free
    /// ```
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for level in &self.levels {
            writeln!(f, "Level {}:", level.id)?;
            for spot in &level.spots {
                writeln!(f, "  Spot {} [{}]: {}", spot.id, spot.class, spot.state)?;
            }
        }
        Ok(())
    }
}
