//! Spot-state subscribers
//!
//! Observers are notified synchronously, in registration order, whenever a
//! spot changes state. The registry guards its list with its own lock,
//! distinct from every spot lock. The lock is held only to mutate the list
//! or to snapshot it before a fan-out, never across an `update` call, so a
//! callback that re-enters the lot cannot deadlock on the registry.
//!
//! A panicking observer is contained: the panic is caught, logged, and the
//! remaining observers are still notified. Spot state is mutated before any
//! notification, so observer behavior can never corrupt occupancy.

use carpark_core::types::{Placement, SpotState, VehicleClass};
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;
use tracing::warn;

/// A spot-state transition, as delivered to observers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpotEvent {
    /// The spot that changed state
    pub placement: Placement,
    /// Vehicle class the spot accepts
    pub class: VehicleClass,
    /// The state the spot transitioned into
    pub state: SpotState,
    /// When the transition was recorded
    pub at: DateTime<Utc>,
}

impl SpotEvent {
    /// Event for a successful claim
    pub fn occupied(placement: Placement, class: VehicleClass) -> Self {
        Self {
            placement,
            class,
            state: SpotState::Occupied,
            at: Utc::now(),
        }
    }

    /// Event for a release that actually freed a spot
    pub fn freed(placement: Placement, class: VehicleClass) -> Self {
        Self {
            placement,
            class,
            state: SpotState::Free,
            at: Utc::now(),
        }
    }
}

/// Subscriber to spot-state transitions.
///
/// `update` runs synchronously on the thread that performed the transition;
/// a slow observer stalls fan-out to the observers registered after it.
/// Panics are contained by the registry and do not reach other observers.
pub trait StatusObserver: Send + Sync {
    /// Handle one spot-state transition
    fn update(&self, event: &SpotEvent);
}

/// Registered observers, notified in registration order.
///
/// # Thread Safety
///
/// The list is guarded by its own mutex, acquired around mutation and around
/// taking the snapshot for a fan-out. Callbacks run with the lock released.
#[derive(Default)]
pub struct ObserverRegistry {
    observers: Mutex<Vec<Arc<dyn StatusObserver>>>,
}

impl ObserverRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an observer; it will be notified after all earlier registrants
    pub fn register(&self, observer: Arc<dyn StatusObserver>) {
        self.observers.lock().push(observer);
    }

    /// Remove an observer by identity (`Arc::ptr_eq`).
    ///
    /// Removing an observer that was never registered is a no-op. Returns
    /// `true` if an entry was removed.
    pub fn remove(&self, observer: &Arc<dyn StatusObserver>) -> bool {
        let mut observers = self.observers.lock();
        let before = observers.len();
        observers.retain(|existing| !Arc::ptr_eq(existing, observer));
        observers.len() != before
    }

    /// Number of registered observers
    pub fn len(&self) -> usize {
        self.observers.lock().len()
    }

    /// True when no observer is registered
    pub fn is_empty(&self) -> bool {
        self.observers.lock().is_empty()
    }

    /// Notify every observer of one transition.
    ///
    /// The list is snapshotted under the lock, then callbacks run with the
    /// lock released. Each callback is isolated: a panic is caught and
    /// logged, and fan-out continues with the next observer.
    pub fn notify(&self, event: &SpotEvent) {
        let snapshot: Vec<Arc<dyn StatusObserver>> = self.observers.lock().clone();
        for observer in snapshot {
            let outcome = catch_unwind(AssertUnwindSafe(|| observer.update(event)));
            if outcome.is_err() {
                warn!(
                    placement = %event.placement,
                    state = %event.state,
                    "observer panicked during update; continuing fan-out"
                );
            }
        }
    }
}

impl std::fmt::Debug for ObserverRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObserverRegistry")
            .field("len", &self.len())
            .finish()
    }
}

/// Observer that renders transitions through `tracing`.
///
/// Handy default subscriber for demos and operational logging; anything
/// richer lives outside the engine.
#[derive(Debug, Default)]
pub struct LogObserver;

impl StatusObserver for LogObserver {
    fn update(&self, event: &SpotEvent) {
        tracing::info!(
            placement = %event.placement,
            class = %event.class,
            state = %event.state,
            "spot state changed"
        );
    }
}
