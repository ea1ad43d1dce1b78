//! A single parking spot
//!
//! The spot is the only unit of shared mutable state in the system. Its
//! occupancy flag lives behind the spot's own mutex; nothing outside this
//! module touches the flag directly.
//!
//! # Why claim is one operation
//!
//! A separate "can park?" check followed by a "park" write opens a
//! check-then-act window: two scans can both observe the spot free and both
//! park. [`Spot::try_claim`] closes that window by holding the lock across
//! the compatibility check and the occupancy write, so exactly one
//! concurrent claimant wins.

use carpark_core::status::SpotStatus;
use carpark_core::types::{SpotId, SpotState, VehicleClass};
use parking_lot::Mutex;

/// One parking spot: a fixed accepted class and a locked occupancy flag.
///
/// # Thread Safety
///
/// All operations take the spot's own lock for O(1) work. Claim and release
/// on one spot are strictly serialized; no reader ever observes a torn
/// occupancy value.
#[derive(Debug)]
pub struct Spot {
    /// Identifier within the owning level
    id: SpotId,
    /// Accepted vehicle class, fixed at construction
    class: VehicleClass,
    /// Occupancy flag, only ever read or written under the lock
    occupied: Mutex<bool>,
}

impl Spot {
    /// Create a free spot accepting the given class
    pub fn new(id: SpotId, class: VehicleClass) -> Self {
        Self {
            id,
            class,
            occupied: Mutex::new(false),
        }
    }

    /// Spot identifier within its level
    pub fn id(&self) -> SpotId {
        self.id
    }

    /// The vehicle class this spot accepts
    pub fn class(&self) -> VehicleClass {
        self.class
    }

    /// Class compatibility check; the class is immutable so no lock is taken
    pub fn accepts(&self, class: VehicleClass) -> bool {
        self.class == class
    }

    /// Atomically claim the spot for a vehicle of the given class.
    ///
    /// Returns `true` only if this call performed the claim: the spot was
    /// free, the class matched, and occupancy is now set. The check and the
    /// write happen under one lock acquisition.
    pub fn try_claim(&self, class: VehicleClass) -> bool {
        let mut occupied = self.occupied.lock();
        if *occupied || self.class != class {
            return false;
        }
        *occupied = true;
        true
    }

    /// Return the spot to the free state.
    ///
    /// Total and idempotent. Returns `true` if the spot was occupied, i.e.
    /// this call actually changed state.
    pub fn release(&self) -> bool {
        let mut occupied = self.occupied.lock();
        let was_occupied = *occupied;
        *occupied = false;
        was_occupied
    }

    /// Read the occupancy flag under the lock
    pub fn is_occupied(&self) -> bool {
        *self.occupied.lock()
    }

    /// Consistent single-spot snapshot
    pub fn status(&self) -> SpotStatus {
        SpotStatus {
            id: self.id,
            class: self.class,
            state: SpotState::from_occupied(self.is_occupied()),
        }
    }
}
