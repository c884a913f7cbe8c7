//! Image slot animator
//!
//! Owns the three image elements registered with a [`TweenEngine`] and
//! moves them between layout presets.

use crate::catalog::ITEM_COUNT;
use crate::layout::{slot_assignment, LAYOUT_PRESETS};
use vitrine_animation::TweenEngine;
use vitrine_core::StyleProps;

/// Drives the three image slots through the tween engine
pub struct Animator<E: TweenEngine> {
    /// Element handles in creation order
    slots: [E::Element; ITEM_COUNT],
    duration_secs: f32,
}

impl<E: TweenEngine> Animator<E> {
    /// Create the slots and place slot `i` at preset `i` without animating
    pub fn mount(engine: &mut E, duration_secs: f32) -> Self {
        let slots = std::array::from_fn(|slot| {
            let element = engine.create_element(StyleProps::default());
            engine.set_immediate(element, LAYOUT_PRESETS[slot].style());
            element
        });
        tracing::debug!(?slots, "mounted image slots");

        Self {
            slots,
            duration_secs,
        }
    }

    /// Tween every slot to its preset in the permutation row for `new_index`
    pub fn apply(&self, engine: &mut E, new_index: usize) {
        let row = slot_assignment(new_index);
        tracing::debug!(new_index, ?row, "animating slots");

        for (slot, &element) in self.slots.iter().enumerate() {
            let preset = &LAYOUT_PRESETS[row[slot]];
            engine.animate_to(element, preset.style(), self.duration_secs);
        }
    }

    pub fn slots(&self) -> &[E::Element; ITEM_COUNT] {
        &self.slots
    }

    pub fn duration_secs(&self) -> f32 {
        self.duration_secs
    }
}
