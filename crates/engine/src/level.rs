//! One level of the facility
//!
//! A level is an ordered collection of spots with no lock of its own;
//! concurrency safety is delegated entirely to each spot. A scan on one
//! level therefore never blocks scans on other levels, or even other scans
//! on the same level touching different spots.

use crate::spot::Spot;
use carpark_core::error::{Error, Result};
use carpark_core::layout::LevelLayout;
use carpark_core::status::LevelStatus;
use carpark_core::types::{LevelId, SpotId, VehicleClass};

/// An ordered collection of spots. Membership is fixed after construction.
#[derive(Debug)]
pub struct Level {
    id: LevelId,
    spots: Vec<Spot>,
}

impl Level {
    /// Build a level from its layout; spot ids follow layout position
    pub fn new(layout: &LevelLayout) -> Self {
        let spots = layout
            .spots
            .iter()
            .enumerate()
            .map(|(index, class)| Spot::new(SpotId(index as u32), *class))
            .collect();
        Self {
            id: layout.id,
            spots,
        }
    }

    /// Level identifier
    pub fn id(&self) -> LevelId {
        self.id
    }

    /// The level's spots in scan order
    pub fn spots(&self) -> &[Spot] {
        &self.spots
    }

    /// Look up one spot by id
    pub fn spot(&self, id: SpotId) -> Option<&Spot> {
        self.spots.iter().find(|s| s.id() == id)
    }

    /// Claim the first free spot accepting the given class.
    ///
    /// Linear scan in fixed index order; the lowest-index spot whose atomic
    /// claim succeeds wins. Returns `None` when no spot on this level could
    /// be claimed. Losing a spot to a concurrent claimant mid-scan just
    /// moves the scan to the next candidate.
    pub fn claim_first(&self, class: VehicleClass) -> Option<SpotId> {
        self.spots
            .iter()
            .find(|spot| spot.try_claim(class))
            .map(Spot::id)
    }

    /// Release a spot on this level.
    ///
    /// Returns `true` if the spot was occupied (state actually changed);
    /// releasing an already-free spot is an idempotent no-op reported as
    /// `false`. Unknown spot ids are an error.
    pub fn release(&self, spot: SpotId) -> Result<bool> {
        let spot = self.spot(spot).ok_or(Error::UnknownSpot {
            level: self.id,
            spot,
        })?;
        Ok(spot.release())
    }

    /// Number of currently-free spots accepting the given class.
    ///
    /// Reads each spot under its own lock; the count is advisory under
    /// concurrent traffic.
    pub fn free_count(&self, class: VehicleClass) -> usize {
        self.spots
            .iter()
            .filter(|s| s.accepts(class) && !s.is_occupied())
            .count()
    }

    /// Per-spot snapshot of this level
    pub fn status(&self) -> LevelStatus {
        LevelStatus {
            id: self.id,
            spots: self.spots.iter().map(Spot::status).collect(),
        }
    }
}
