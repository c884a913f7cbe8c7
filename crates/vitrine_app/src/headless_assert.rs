//! Assertion helpers evaluated against a view snapshot.

use vitrine_carousel::{ViewSnapshot, LAYOUT_PRESETS};
use vitrine_theme::ColorScheme;

/// Geometry tolerance for a settled slot, in CSS pixels/degrees
pub const SLOT_EPSILON: f32 = 0.01;

/// Assertion result with structured failure details.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssertionResult {
    Passed,
    Failed { code: String, message: String },
}

impl AssertionResult {
    fn failed(code: &str, message: String) -> Self {
        AssertionResult::Failed {
            code: code.to_string(),
            message,
        }
    }
}

pub fn evaluate_assert_exists(id: &str, snapshot: &ViewSnapshot) -> AssertionResult {
    if snapshot.element_text(id).is_some() {
        AssertionResult::Passed
    } else {
        AssertionResult::failed("missing_element", format!("{id}: element not found"))
    }
}

pub fn evaluate_assert_text_contains(
    id: &str,
    expected: &str,
    snapshot: &ViewSnapshot,
) -> AssertionResult {
    let Some(text) = snapshot.element_text(id) else {
        return AssertionResult::failed("missing_element", format!("{id}: element not found"));
    };
    if text.contains(expected) {
        AssertionResult::Passed
    } else {
        AssertionResult::failed(
            "text_mismatch",
            format!("{id}: expected substring '{expected}', got '{text}'"),
        )
    }
}

pub fn evaluate_assert_active_tile(index: usize, snapshot: &ViewSnapshot) -> AssertionResult {
    let active: Vec<usize> = snapshot
        .tiles
        .iter()
        .filter(|tile| tile.active)
        .map(|tile| tile.index)
        .collect();
    if active == [index] {
        AssertionResult::Passed
    } else {
        AssertionResult::failed(
            "tile_mismatch",
            format!("expected tile {index} active, active tiles are {active:?}"),
        )
    }
}

pub fn evaluate_assert_transitioning(expected: bool, snapshot: &ViewSnapshot) -> AssertionResult {
    if snapshot.transitioning == expected {
        AssertionResult::Passed
    } else {
        AssertionResult::failed(
            "transition_mismatch",
            format!(
                "expected transitioning={expected} at {}ms",
                snapshot.elapsed_ms
            ),
        )
    }
}

pub fn evaluate_assert_scheme(expected: ColorScheme, snapshot: &ViewSnapshot) -> AssertionResult {
    if snapshot.scheme != expected {
        return AssertionResult::failed(
            "scheme_mismatch",
            format!(
                "expected {} scheme, got {}",
                expected.name(),
                snapshot.scheme.name()
            ),
        );
    }
    if snapshot.root_classes.contains(vitrine_theme::DARK_CLASS) != expected.is_dark() {
        return AssertionResult::failed(
            "root_scope_mismatch",
            format!(
                "root classes '{}' disagree with {} scheme",
                snapshot.root_classes.class_attr(),
                expected.name()
            ),
        );
    }
    AssertionResult::Passed
}

pub fn evaluate_assert_slot(slot: usize, preset: usize, snapshot: &ViewSnapshot) -> AssertionResult {
    let Some(target) = LAYOUT_PRESETS.get(preset) else {
        return AssertionResult::failed("invalid_step", format!("no layout preset {preset}"));
    };
    let Some(image) = snapshot.images.get(slot) else {
        return AssertionResult::failed("missing_element", format!("image.{slot}: no such slot"));
    };
    let Some(style) = image.style else {
        return AssertionResult::failed(
            "missing_style",
            format!("image.{slot}: engine does not expose styles"),
        );
    };

    let target = target.style();
    if style.approx_eq(&target, SLOT_EPSILON) {
        AssertionResult::Passed
    } else {
        AssertionResult::failed(
            "slot_mismatch",
            format!(
                "image.{slot}: expected '{}', got '{}'",
                target.css_declarations(),
                style.css_declarations()
            ),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_carousel::{CarouselConfig, CarouselView};

    fn snapshot() -> ViewSnapshot {
        CarouselView::new(&CarouselConfig::default())
            .unwrap()
            .snapshot()
    }

    #[test]
    fn text_assertions() {
        let snapshot = snapshot();
        assert_eq!(
            evaluate_assert_text_contains("price", "748", &snapshot),
            AssertionResult::Passed
        );
        let AssertionResult::Failed { code, message } =
            evaluate_assert_text_contains("price", "$899", &snapshot)
        else {
            panic!("expected failure");
        };
        assert_eq!(code, "text_mismatch");
        assert!(message.contains("$748"));
        assert_eq!(
            evaluate_assert_exists("nope", &snapshot),
            AssertionResult::failed("missing_element", "nope: element not found".to_string())
        );
    }

    #[test]
    fn mount_places_slots_on_their_own_presets() {
        let snapshot = snapshot();
        for slot in 0..3 {
            assert_eq!(evaluate_assert_slot(slot, slot, &snapshot), AssertionResult::Passed);
        }
        assert!(matches!(
            evaluate_assert_slot(0, 1, &snapshot),
            AssertionResult::Failed { .. }
        ));
        assert!(matches!(
            evaluate_assert_slot(0, 7, &snapshot),
            AssertionResult::Failed { code, .. } if code == "invalid_step"
        ));
    }

    #[test]
    fn state_assertions() {
        let snapshot = snapshot();
        assert_eq!(evaluate_assert_active_tile(1, &snapshot), AssertionResult::Passed);
        assert_ne!(evaluate_assert_active_tile(0, &snapshot), AssertionResult::Passed);
        assert_eq!(evaluate_assert_transitioning(false, &snapshot), AssertionResult::Passed);
        assert_eq!(
            evaluate_assert_scheme(ColorScheme::Light, &snapshot),
            AssertionResult::Passed
        );
        assert_ne!(
            evaluate_assert_scheme(ColorScheme::Dark, &snapshot),
            AssertionResult::Passed
        );
    }
}
