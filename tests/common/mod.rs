//! Shared helpers for facility behavior tests.

#![allow(dead_code)]

use carpark::prelude::*;

/// Build a layout from one slice of classes per level, ids ascending from 0.
pub fn layout(levels: &[&[VehicleClass]]) -> LotLayout {
    LotLayout::new(
        levels
            .iter()
            .enumerate()
            .map(|(i, spots)| LevelLayout::new(LevelId(i as u32), spots.to_vec()))
            .collect::<Vec<_>>(),
    )
}

/// The canonical one-level demo layout:
/// [Compact, TwoWheeler, Compact, Oversized].
pub fn demo_layout() -> LotLayout {
    layout(&[&[
        VehicleClass::Compact,
        VehicleClass::TwoWheeler,
        VehicleClass::Compact,
        VehicleClass::Oversized,
    ]])
}

/// Facility over [`demo_layout`].
pub fn demo_facility() -> Facility {
    Facility::new(&demo_layout()).expect("demo layout is valid")
}

/// Install a test-writer tracing subscriber; safe to call repeatedly.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}
