//! The lot: cross-level allocation and observer fan-out
//!
//! The lot owns the levels and the observer registry. It holds no lock over
//! spot state itself; correctness comes from composing per-spot atomic
//! claims, so unrelated entries and exits proceed in parallel.

use crate::level::Level;
use crate::observer::{ObserverRegistry, SpotEvent, StatusObserver};
use carpark_core::error::{Error, Result};
use carpark_core::layout::LotLayout;
use carpark_core::status::LotStatus;
use carpark_core::types::{LevelId, Placement, VehicleClass};
use chrono::Utc;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::debug;

/// Aggregate of levels plus the observer registry.
///
/// # Thread Safety
///
/// All methods take `&self` and are safe to call from any number of threads.
/// Allocation touches one spot lock at a time; the observer registry has its
/// own lock, never held across a callback. There is no lot-wide lock and no
/// lock-ordering hazard.
#[derive(Debug)]
pub struct Lot {
    levels: Vec<Level>,
    observers: ObserverRegistry,
}

impl Lot {
    /// Build a lot from a validated layout.
    ///
    /// Every spot starts free. The layout is validated first; an invalid
    /// layout is rejected with [`Error::InvalidLayout`].
    pub fn new(layout: &LotLayout) -> Result<Self> {
        layout.validate()?;
        Ok(Self {
            levels: layout.levels.iter().map(Level::new).collect(),
            observers: ObserverRegistry::new(),
        })
    }

    /// The lot's levels in scan order
    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    /// Look up one level by id
    pub fn level(&self, id: LevelId) -> Option<&Level> {
        self.levels.iter().find(|l| l.id() == id)
    }

    /// Find and claim the first compatible free spot, first-fit.
    ///
    /// Levels are scanned in fixed order and each level scans its spots in
    /// fixed order, so with no concurrent traffic claims land in ascending
    /// (level, spot) order. The first successful claim ends the scan and is
    /// announced to observers; if no level yields a spot the error is
    /// returned and nothing is announced.
    pub fn park(&self, class: VehicleClass) -> Result<Placement> {
        for level in &self.levels {
            if let Some(spot) = level.claim_first(class) {
                let placement = Placement::new(level.id(), spot);
                debug!(%placement, %class, "spot claimed");
                self.observers.notify(&SpotEvent::occupied(placement, class));
                return Ok(placement);
            }
        }
        debug!(%class, "no available spot");
        Err(Error::NoAvailableSpot { class })
    }

    /// Release a previously-claimed spot, no search involved.
    ///
    /// Releasing a spot that is already free is an idempotent no-op: it
    /// succeeds and emits no event, since occupancy did not change. Unknown
    /// level or spot ids are errors.
    pub fn release(&self, placement: Placement) -> Result<()> {
        let level = self.level(placement.level).ok_or(Error::UnknownLevel {
            level: placement.level,
        })?;
        let spot = level.spot(placement.spot).ok_or(Error::UnknownSpot {
            level: placement.level,
            spot: placement.spot,
        })?;

        let class = spot.class();
        if spot.release() {
            debug!(%placement, %class, "spot freed");
            self.observers.notify(&SpotEvent::freed(placement, class));
        }
        Ok(())
    }

    /// Register an observer for spot-state transitions
    pub fn register_observer(&self, observer: Arc<dyn StatusObserver>) {
        self.observers.register(observer);
    }

    /// Remove an observer by identity; unregistered observers are ignored
    pub fn remove_observer(&self, observer: &Arc<dyn StatusObserver>) -> bool {
        self.observers.remove(observer)
    }

    /// Number of registered observers
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Point-in-time occupancy snapshot.
    ///
    /// Each spot is read under its own lock so no single entry is torn, but
    /// no lot-wide lock is taken: under concurrent traffic the snapshot may
    /// mix states from different instants. Once traffic quiesces it is
    /// exact.
    pub fn status(&self) -> LotStatus {
        LotStatus {
            captured_at: Utc::now(),
            levels: self.levels.iter().map(Level::status).collect(),
        }
    }

    /// Currently-free spots per vehicle class, lot-wide.
    ///
    /// Advisory under concurrent traffic, same caveat as [`Lot::status`].
    pub fn free_counts(&self) -> BTreeMap<VehicleClass, usize> {
        VehicleClass::ALL
            .iter()
            .map(|class| {
                let free = self
                    .levels
                    .iter()
                    .map(|level| level.free_count(*class))
                    .sum();
                (*class, free)
            })
            .collect()
    }
}
