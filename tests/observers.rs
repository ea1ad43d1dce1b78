//! Observer fan-out behavior through the public facade

mod common;

use carpark::prelude::*;
use carpark::VehicleClass::{Compact, TwoWheeler};
use common::{demo_facility, init_tracing};
use std::sync::{Arc, Mutex};

/// Records every event it sees, tagged with a name.
struct Recorder {
    name: &'static str,
    seen: Arc<Mutex<Vec<(&'static str, Placement, SpotState)>>>,
}

impl StatusObserver for Recorder {
    fn update(&self, event: &SpotEvent) {
        self.seen
            .lock()
            .unwrap()
            .push((self.name, event.placement, event.state));
    }
}

/// Panics on every update.
struct Faulty;

impl StatusObserver for Faulty {
    fn update(&self, _event: &SpotEvent) {
        panic!("faulty observer");
    }
}

#[test]
fn observers_are_notified_of_claims_and_releases() {
    let facility = demo_facility();
    let seen = Arc::new(Mutex::new(Vec::new()));
    facility.register_observer(Arc::new(Recorder {
        name: "status-board",
        seen: Arc::clone(&seen),
    }));

    let gate = facility.gate();
    let placement = gate.enter(Compact).unwrap();
    gate.exit(placement).unwrap();

    let events = seen.lock().unwrap().clone();
    assert_eq!(
        events,
        vec![
            ("status-board", placement, SpotState::Occupied),
            ("status-board", placement, SpotState::Free),
        ]
    );
}

#[test]
fn failing_observer_never_suppresses_later_observers() {
    init_tracing();

    let facility = demo_facility();
    let seen = Arc::new(Mutex::new(Vec::new()));

    // The faulty observer registers first, so it runs first on every event
    facility.register_observer(Arc::new(Faulty));
    facility.register_observer(Arc::new(Recorder {
        name: "survivor",
        seen: Arc::clone(&seen),
    }));

    let gate = facility.gate();
    let placement = gate.enter(TwoWheeler).unwrap();

    let events = seen.lock().unwrap().clone();
    assert_eq!(events, vec![("survivor", placement, SpotState::Occupied)]);

    // Spot state was mutated before notification; the panic changed nothing
    assert!(facility.status().spot(placement).unwrap().state.is_occupied());
}

#[test]
fn notification_follows_registration_order() {
    let facility = demo_facility();
    let seen = Arc::new(Mutex::new(Vec::new()));

    for name in ["first", "second", "third"] {
        facility.register_observer(Arc::new(Recorder {
            name,
            seen: Arc::clone(&seen),
        }));
    }

    facility.gate().enter(Compact).unwrap();

    let order: Vec<&str> = seen.lock().unwrap().iter().map(|(n, _, _)| *n).collect();
    assert_eq!(order, vec!["first", "second", "third"]);
}

#[test]
fn removed_observer_stops_receiving_events() {
    let facility = demo_facility();
    let seen = Arc::new(Mutex::new(Vec::new()));

    let removable: Arc<dyn StatusObserver> = Arc::new(Recorder {
        name: "removable",
        seen: Arc::clone(&seen),
    });
    facility.register_observer(Arc::clone(&removable));

    let gate = facility.gate();
    gate.enter(Compact).unwrap();
    assert!(facility.remove_observer(&removable));
    gate.enter(Compact).unwrap();

    assert_eq!(seen.lock().unwrap().len(), 1);
}

#[test]
fn removing_never_registered_observer_is_a_no_op() {
    let facility = demo_facility();
    let stranger: Arc<dyn StatusObserver> = Arc::new(Faulty);
    assert!(!facility.remove_observer(&stranger));
}

#[test]
fn rejected_entry_produces_no_event() {
    let facility = demo_facility();
    let seen = Arc::new(Mutex::new(Vec::new()));
    facility.register_observer(Arc::new(Recorder {
        name: "counter",
        seen: Arc::clone(&seen),
    }));

    let gate = facility.gate();
    gate.enter(TwoWheeler).unwrap();
    assert!(gate.enter(TwoWheeler).is_err());

    assert_eq!(seen.lock().unwrap().len(), 1);
}

#[test]
fn log_observer_can_be_wired_without_panic() {
    init_tracing();

    let facility = demo_facility();
    facility.register_observer(Arc::new(LogObserver));

    let gate = facility.gate();
    let placement = gate.enter(Compact).unwrap();
    gate.exit(placement).unwrap();
}

#[test]
fn event_timestamps_are_monotonic_enough_for_ordering() {
    let facility = demo_facility();
    let seen = Arc::new(Mutex::new(Vec::new()));

    struct Stamps {
        seen: Arc<Mutex<Vec<chrono::DateTime<chrono::Utc>>>>,
    }
    impl StatusObserver for Stamps {
        fn update(&self, event: &SpotEvent) {
            self.seen.lock().unwrap().push(event.at);
        }
    }

    facility.register_observer(Arc::new(Stamps {
        seen: Arc::clone(&seen),
    }));

    let gate = facility.gate();
    let placement = gate.enter(Compact).unwrap();
    gate.exit(placement).unwrap();

    let stamps = seen.lock().unwrap().clone();
    assert_eq!(stamps.len(), 2);
    assert!(stamps[0] <= stamps[1]);
}
