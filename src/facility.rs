//! Facility entry point
//!
//! [`Facility`] wraps the engine's lot behind a small surface: build it from
//! a layout, hand out gates, read status, wire observers.

use carpark_core::error::Result;
use carpark_core::layout::{LevelLayout, LotLayout};
use carpark_core::status::LotStatus;
use carpark_core::types::{LevelId, VehicleClass};
use carpark_engine::{Gate, Lot, StatusObserver};
use std::collections::BTreeMap;
use std::sync::Arc;

/// A running parking facility.
///
/// Create one with [`Facility::new`] from a layout, or with
/// [`Facility::builder`]. The facility is cheap to share: gates hold an
/// `Arc` to the same lot.
///
/// # Example
///
/// ```
/// use carpark::prelude::*;
///
/// # fn main() -> carpark::Result<()> {
/// let facility = Facility::builder()
///     .level([VehicleClass::Compact, VehicleClass::Compact])
///     .build()?;
///
/// let gate = facility.gate();
/// let placement = gate.enter(VehicleClass::Compact)?;
/// gate.exit(placement)?;
/// # Ok(())
/// # }
/// ```
pub struct Facility {
    lot: Arc<Lot>,
}

impl Facility {
    /// Build a facility from a layout.
    ///
    /// The layout is validated; every spot starts free.
    pub fn new(layout: &LotLayout) -> Result<Self> {
        Ok(Self {
            lot: Arc::new(Lot::new(layout)?),
        })
    }

    /// Create a builder for incremental layout construction
    pub fn builder() -> FacilityBuilder {
        FacilityBuilder::new()
    }

    /// Open a new gate onto this facility.
    ///
    /// Each gate is an independent caller identity; open as many as there
    /// are physical entry/exit points.
    pub fn gate(&self) -> Gate {
        Gate::new(Arc::clone(&self.lot))
    }

    /// The underlying lot, for callers that need engine-level access
    pub fn lot(&self) -> &Arc<Lot> {
        &self.lot
    }

    /// Point-in-time occupancy snapshot (eventually consistent under
    /// concurrent traffic, exact once traffic quiesces)
    pub fn status(&self) -> LotStatus {
        self.lot.status()
    }

    /// Currently-free spots per vehicle class
    pub fn free_counts(&self) -> BTreeMap<VehicleClass, usize> {
        self.lot.free_counts()
    }

    /// Register an observer for spot-state transitions
    pub fn register_observer(&self, observer: Arc<dyn StatusObserver>) {
        self.lot.register_observer(observer);
    }

    /// Remove an observer by identity; returns `true` if it was registered
    pub fn remove_observer(&self, observer: &Arc<dyn StatusObserver>) -> bool {
        self.lot.remove_observer(observer)
    }
}

impl std::fmt::Debug for Facility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Facility")
            .field("levels", &self.lot.levels().len())
            .finish()
    }
}

/// Builder assembling a facility level by level.
///
/// Levels added with [`FacilityBuilder::level`] get ascending ids starting
/// at 0; [`FacilityBuilder::level_with_id`] sets an explicit id. A whole
/// [`LotLayout`] can also be supplied at once.
///
/// # Example
///
/// ```
/// use carpark::prelude::*;
///
/// # fn main() -> carpark::Result<()> {
/// let facility = Facility::builder()
///     .level([VehicleClass::Compact, VehicleClass::TwoWheeler])
///     .level_with_id(LevelId(5), [VehicleClass::Oversized])
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct FacilityBuilder {
    levels: Vec<LevelLayout>,
    next_auto_id: u32,
}

impl FacilityBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a level with the next ascending id
    pub fn level(mut self, spots: impl IntoIterator<Item = VehicleClass>) -> Self {
        let id = LevelId(self.next_auto_id);
        self.next_auto_id += 1;
        self.levels.push(LevelLayout::new(id, spots.into_iter().collect::<Vec<_>>()));
        self
    }

    /// Add a level with an explicit id.
    ///
    /// Later auto-assigned ids continue above the highest id seen so far.
    pub fn level_with_id(
        mut self,
        id: LevelId,
        spots: impl IntoIterator<Item = VehicleClass>,
    ) -> Self {
        self.next_auto_id = self.next_auto_id.max(id.as_u32() + 1);
        self.levels
            .push(LevelLayout::new(id, spots.into_iter().collect::<Vec<_>>()));
        self
    }

    /// Replace everything added so far with a complete layout
    pub fn layout(mut self, layout: LotLayout) -> Self {
        self.next_auto_id = layout
            .levels
            .iter()
            .map(|l| l.id.as_u32() + 1)
            .max()
            .unwrap_or(0);
        self.levels = layout.levels;
        self
    }

    /// Validate the accumulated layout and build the facility
    pub fn build(self) -> Result<Facility> {
        Facility::new(&LotLayout::new(self.levels))
    }
}
