//! Layout presets and the slot permutation table
//!
//! The three image slots never change identity; navigation only reassigns
//! which preset geometry each slot moves to.

use crate::catalog::ITEM_COUNT;
use serde::Serialize;
use vitrine_core::StyleProps;

/// Target geometry for one position in the composition
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct LayoutPreset {
    /// CSS pixels
    pub width: f32,
    pub top: f32,
    pub left: f32,
    /// Degrees
    pub rotate: f32,
}

impl LayoutPreset {
    pub const fn style(&self) -> StyleProps {
        StyleProps::geometry(self.width, self.top, self.left, self.rotate)
    }
}

/// Hero, lower-left, and upper-left placements
pub const LAYOUT_PRESETS: [LayoutPreset; ITEM_COUNT] = [
    LayoutPreset {
        width: 700.0,
        top: -20.0,
        left: 100.0,
        rotate: 0.0,
    },
    LayoutPreset {
        width: 250.0,
        top: 500.0,
        left: -80.0,
        rotate: 120.0,
    },
    LayoutPreset {
        width: 250.0,
        top: -100.0,
        left: -80.0,
        rotate: 28.0,
    },
];

/// Row `t` lists, for slots 0, 1, 2, the preset each moves to when the
/// carousel lands on index `t`
pub const PERMUTATION: [[usize; ITEM_COUNT]; ITEM_COUNT] = [
    [0, 1, 2],
    [2, 0, 1],
    [1, 2, 0],
];

/// Preset index per slot for a target carousel index
pub fn slot_assignment(target: usize) -> [usize; ITEM_COUNT] {
    PERMUTATION[target % ITEM_COUNT]
}

/// Preset geometry for `slot` when the carousel lands on `target`
pub fn slot_style(target: usize, slot: usize) -> StyleProps {
    LAYOUT_PRESETS[slot_assignment(target)[slot % ITEM_COUNT]].style()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_row_is_a_bijection() {
        for (target, row) in PERMUTATION.iter().enumerate() {
            let mut seen = [false; ITEM_COUNT];
            for &preset in row {
                assert!(preset < ITEM_COUNT, "row {target} names preset {preset}");
                assert!(!seen[preset], "row {target} repeats preset {preset}");
                seen[preset] = true;
            }
        }
    }

    #[test]
    fn landing_index_gets_the_hero_preset_from_its_own_row() {
        // The slot moved into the hero position differs per row
        let heroes: Vec<usize> = (0..ITEM_COUNT)
            .map(|t| slot_assignment(t).iter().position(|&p| p == 0).unwrap())
            .collect();
        assert_eq!(heroes, vec![0, 1, 2]);
    }

    #[test]
    fn slot_style_reads_through_both_tables() {
        assert_eq!(slot_style(1, 0), LAYOUT_PRESETS[2].style());
        assert_eq!(slot_style(2, 2).width, Some(700.0));
    }
}
