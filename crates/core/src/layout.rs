//! Static facility layout
//!
//! A lot's shape is fixed at construction: levels and their spots are
//! described up front by a [`LotLayout`] value rather than built ad hoc by a
//! driver. Layouts are plain data and serde-deserializable, so they can come
//! from a config file as easily as from a builder.

use crate::error::{Error, Result};
use crate::types::{LevelId, VehicleClass};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Layout of a single level: its id and the accepted class of each spot,
/// in scan order.
///
/// Spot ids are positional: the spot at index `i` gets id `i`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelLayout {
    /// Level identifier, unique within the lot
    pub id: LevelId,
    /// Accepted vehicle class per spot, lowest index scanned first
    pub spots: Vec<VehicleClass>,
}

impl LevelLayout {
    /// Create a level layout
    pub fn new(id: LevelId, spots: impl Into<Vec<VehicleClass>>) -> Self {
        Self {
            id,
            spots: spots.into(),
        }
    }

    /// Number of spots on this level
    pub fn spot_count(&self) -> usize {
        self.spots.len()
    }
}

/// Layout of a whole lot: its levels in scan order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LotLayout {
    /// Levels in scan order, lowest index scanned first
    pub levels: Vec<LevelLayout>,
}

impl LotLayout {
    /// Create a lot layout
    pub fn new(levels: impl Into<Vec<LevelLayout>>) -> Self {
        Self {
            levels: levels.into(),
        }
    }

    /// Convenience constructor for a one-level lot
    ///
    /// The level gets id 0.
    pub fn single_level(spots: impl Into<Vec<VehicleClass>>) -> Self {
        Self::new(vec![LevelLayout::new(LevelId(0), spots)])
    }

    /// Total number of spots across all levels
    pub fn spot_count(&self) -> usize {
        self.levels.iter().map(LevelLayout::spot_count).sum()
    }

    /// Number of spots accepting the given class
    pub fn spot_count_for(&self, class: VehicleClass) -> usize {
        self.levels
            .iter()
            .flat_map(|level| level.spots.iter())
            .filter(|c| **c == class)
            .count()
    }

    /// Validate the layout.
    ///
    /// Rejects empty lots, levels without spots, and duplicate level ids.
    pub fn validate(&self) -> Result<()> {
        if self.levels.is_empty() {
            return Err(Error::InvalidLayout("lot has no levels".to_string()));
        }

        let mut seen = HashSet::new();
        for level in &self.levels {
            if !seen.insert(level.id) {
                return Err(Error::InvalidLayout(format!(
                    "duplicate level id {}",
                    level.id
                )));
            }
            if level.spots.is_empty() {
                return Err(Error::InvalidLayout(format!(
                    "level {} has no spots",
                    level.id
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mixed_level(id: u32) -> LevelLayout {
        LevelLayout::new(
            LevelId(id),
            vec![
                VehicleClass::Compact,
                VehicleClass::TwoWheeler,
                VehicleClass::Compact,
                VehicleClass::Oversized,
            ],
        )
    }

    #[test]
    fn valid_layout_passes() {
        let layout = LotLayout::new(vec![mixed_level(0), mixed_level(1)]);
        assert!(layout.validate().is_ok());
        assert_eq!(layout.spot_count(), 8);
        assert_eq!(layout.spot_count_for(VehicleClass::Compact), 4);
        assert_eq!(layout.spot_count_for(VehicleClass::Oversized), 2);
    }

    #[test]
    fn empty_lot_rejected() {
        let layout = LotLayout::new(Vec::new());
        assert!(matches!(
            layout.validate(),
            Err(Error::InvalidLayout(_))
        ));
    }

    #[test]
    fn empty_level_rejected() {
        let layout = LotLayout::new(vec![LevelLayout::new(LevelId(0), Vec::new())]);
        let err = layout.validate().unwrap_err();
        assert!(err.to_string().contains("no spots"));
    }

    #[test]
    fn duplicate_level_ids_rejected() {
        let layout = LotLayout::new(vec![mixed_level(3), mixed_level(3)]);
        let err = layout.validate().unwrap_err();
        assert!(err.to_string().contains("duplicate level id L3"));
    }

    #[test]
    fn single_level_helper_uses_id_zero() {
        let layout = LotLayout::single_level(vec![VehicleClass::Compact]);
        assert_eq!(layout.levels.len(), 1);
        assert_eq!(layout.levels[0].id, LevelId(0));
        assert!(layout.validate().is_ok());
    }

    #[test]
    fn layout_roundtrips_through_serde() {
        let layout = LotLayout::new(vec![mixed_level(0), mixed_level(1)]);
        let json = serde_json::to_string(&layout).unwrap();
        let back: LotLayout = serde_json::from_str(&json).unwrap();
        assert_eq!(layout, back);
    }

    proptest::proptest! {
        /// Any layout with distinct level ids and at least one spot per
        /// level passes validation.
        #[test]
        fn distinct_nonempty_layouts_validate(
            sizes in proptest::collection::vec(1usize..6, 1..5)
        ) {
            let levels: Vec<LevelLayout> = sizes
                .iter()
                .enumerate()
                .map(|(i, n)| {
                    LevelLayout::new(LevelId(i as u32), vec![VehicleClass::Compact; *n])
                })
                .collect();
            proptest::prop_assert!(LotLayout::new(levels).validate().is_ok());
        }
    }

    #[test]
    fn layout_deserializes_from_plain_config() {
        // The shape a config file would carry
        let json = r#"{
            "levels": [
                { "id": 0, "spots": ["Compact", "TwoWheeler"] },
                { "id": 1, "spots": ["Oversized"] }
            ]
        }"#;
        let layout: LotLayout = serde_json::from_str(json).unwrap();
        assert!(layout.validate().is_ok());
        assert_eq!(layout.spot_count(), 3);
    }
}
