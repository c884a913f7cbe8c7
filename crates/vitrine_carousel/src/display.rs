//! Display text and presentational transitions
//!
//! Text is never stored: it is read from the catalog at the current index on
//! every render. What the view does keep are the CSS-style transitions that
//! fade the title and price during a changeover and grow the active tile's
//! indicator bar.

use crate::catalog::{product, CATALOG, ITEM_COUNT};
use serde::Serialize;
use vitrine_animation::{Easing, ValueTransition};

/// Indicator bar height under an inactive tile
pub const INDICATOR_IDLE_PX: f32 = 10.0;
/// Indicator bar height under the active tile
pub const INDICATOR_ACTIVE_PX: f32 = 200.0;
/// Vertical slide of the title and price while changing
pub const CHANGEOVER_OFFSET_PX: f32 = -10.0;

/// Product text for the current index
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct DisplayText {
    pub name: &'static str,
    pub model: &'static str,
    pub price: &'static str,
    /// Whether the changeover style is applied
    pub changing: bool,
}

impl DisplayText {
    pub fn for_index(index: usize, changing: bool) -> Self {
        let record = product(index);
        Self {
            name: record.name,
            model: record.model,
            price: record.price,
            changing,
        }
    }
}

/// Sampled style of the title and price text
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct TextStyle {
    pub opacity: f32,
    pub translate_y: f32,
}

/// One color selector tile
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct TileView {
    pub index: usize,
    pub label: &'static str,
    pub icon_path: &'static str,
    pub color_icon_path: &'static str,
    pub active: bool,
    /// Sampled indicator bar height in pixels
    pub indicator_height: f32,
}

/// Running presentational transitions
pub struct DisplayTransitions {
    text_opacity: ValueTransition,
    text_offset: ValueTransition,
    indicators: [ValueTransition; ITEM_COUNT],
}

impl DisplayTransitions {
    /// Settled at rest for `active_index`
    pub fn new(active_index: usize, duration_ms: u32) -> Self {
        let ease = Easing::TAILWIND_DEFAULT;
        Self {
            text_opacity: ValueTransition::new(1.0, duration_ms, ease),
            text_offset: ValueTransition::new(0.0, duration_ms, ease),
            indicators: std::array::from_fn(|i| {
                let height = if i == active_index {
                    INDICATOR_ACTIVE_PX
                } else {
                    INDICATOR_IDLE_PX
                };
                ValueTransition::new(height, duration_ms, ease)
            }),
        }
    }

    /// Point every transition at the state implied by the controller
    pub fn sync(&mut self, active_index: usize, changing: bool) {
        let (opacity, offset) = if changing {
            (0.0, CHANGEOVER_OFFSET_PX)
        } else {
            (1.0, 0.0)
        };
        self.text_opacity.set_target(opacity);
        self.text_offset.set_target(offset);

        for (i, indicator) in self.indicators.iter_mut().enumerate() {
            indicator.set_target(if i == active_index {
                INDICATOR_ACTIVE_PX
            } else {
                INDICATOR_IDLE_PX
            });
        }
    }

    pub fn tick(&mut self, dt_ms: f32) {
        self.text_opacity.tick(dt_ms);
        self.text_offset.tick(dt_ms);
        for indicator in &mut self.indicators {
            indicator.tick(dt_ms);
        }
    }

    pub fn is_settled(&self) -> bool {
        self.text_opacity.is_settled()
            && self.text_offset.is_settled()
            && self.indicators.iter().all(ValueTransition::is_settled)
    }

    pub fn text_style(&self) -> TextStyle {
        TextStyle {
            opacity: self.text_opacity.value(),
            translate_y: self.text_offset.value(),
        }
    }

    /// Tiles in catalog order
    pub fn tiles(&self, active_index: usize) -> Vec<TileView> {
        CATALOG
            .iter()
            .zip(&self.indicators)
            .enumerate()
            .map(|(index, (record, indicator))| TileView {
                index,
                label: record.color,
                icon_path: record.icon_path,
                color_icon_path: record.color_icon_path,
                active: index == active_index,
                indicator_height: indicator.value(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_reads_straight_from_catalog() {
        let text = DisplayText::for_index(1, false);
        assert_eq!(text.model, "Sky Blue");
        assert_eq!(text.price, "$748");
    }

    #[test]
    fn changeover_fades_out_then_back_in() {
        let mut transitions = DisplayTransitions::new(1, 500);
        transitions.sync(2, true);
        transitions.tick(500.0);
        assert_eq!(
            transitions.text_style(),
            TextStyle {
                opacity: 0.0,
                translate_y: CHANGEOVER_OFFSET_PX
            }
        );

        transitions.sync(2, false);
        transitions.tick(500.0);
        assert_eq!(transitions.text_style().opacity, 1.0);
        assert!(transitions.is_settled());
    }

    #[test]
    fn indicator_grows_under_the_active_tile() {
        let mut transitions = DisplayTransitions::new(1, 500);
        transitions.sync(2, true);
        transitions.tick(500.0);

        let heights: Vec<f32> = transitions.tiles(2).iter().map(|t| t.indicator_height).collect();
        assert_eq!(heights, vec![INDICATOR_IDLE_PX, INDICATOR_IDLE_PX, INDICATOR_ACTIVE_PX]);
    }
}
