//! Tween scheduler
//!
//! The built-in [`TweenEngine`]: owns every animated element's style and
//! advances their tweens each frame.

use crate::easing::Easing;
use crate::engine::TweenEngine;
use crate::tween::Tween;
use slotmap::{new_key_type, SlotMap};
use vitrine_core::StyleProps;

new_key_type! {
    pub struct ElementId;
}

/// An element's resolved style and its running tween, if any
#[derive(Clone, Debug)]
struct AnimatedElement {
    style: StyleProps,
    tween: Option<Tween>,
}

/// Frame-driven tween engine
///
/// A new `animate_to` on an element replaces its running tween and starts
/// from the element's current sampled style, so overlapping requests never
/// jump.
pub struct TweenScheduler {
    elements: SlotMap<ElementId, AnimatedElement>,
    easing: Easing,
}

impl TweenScheduler {
    /// Scheduler using GSAP's default ease (`power1.out`)
    pub fn new() -> Self {
        Self::with_easing(Easing::EaseOutQuad)
    }

    pub fn with_easing(easing: Easing) -> Self {
        Self {
            elements: SlotMap::with_key(),
            easing,
        }
    }

    pub fn easing(&self) -> Easing {
        self.easing
    }

    /// The running tween on an element
    pub fn tween(&self, id: ElementId) -> Option<&Tween> {
        self.elements.get(id).and_then(|element| element.tween.as_ref())
    }

    /// Tick all tweens
    pub fn tick(&mut self, dt_ms: f32) {
        for (id, element) in self.elements.iter_mut() {
            let Some(tween) = element.tween.as_mut() else {
                continue;
            };
            tween.tick(dt_ms);
            element.style = tween.value().merged_over(&element.style);
            tracing::trace!(?id, style = %element.style.css_declarations(), "tween step");

            if !tween.is_playing() {
                element.tween = None;
            }
        }
    }

    pub fn has_active_animations(&self) -> bool {
        self.elements
            .values()
            .any(|element| element.tween.as_ref().is_some_and(Tween::is_playing))
    }
}

impl Default for TweenScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl TweenEngine for TweenScheduler {
    type Element = ElementId;

    fn create_element(&mut self, initial: StyleProps) -> ElementId {
        self.elements.insert(AnimatedElement {
            style: initial,
            tween: None,
        })
    }

    fn set_immediate(&mut self, element: ElementId, props: StyleProps) {
        let Some(entry) = self.elements.get_mut(element) else {
            tracing::warn!(?element, "set_immediate on unknown element");
            return;
        };
        entry.tween = None;
        entry.style = props.merged_over(&entry.style);
    }

    fn animate_to(&mut self, element: ElementId, props: StyleProps, duration_secs: f32) {
        let Some(entry) = self.elements.get_mut(element) else {
            tracing::warn!(?element, "animate_to on unknown element");
            return;
        };
        let duration_ms = (duration_secs.max(0.0) * 1000.0).round() as u32;
        let from = entry.style.masked_by(&props);
        let mut tween = Tween::new(from, props, duration_ms, self.easing);
        tween.start();

        if entry.tween.is_some() {
            tracing::debug!(?element, "retargeting running tween");
        }
        if duration_ms == 0 {
            entry.style = props.merged_over(&entry.style);
            entry.tween = None;
        } else {
            entry.tween = Some(tween);
        }
    }

    fn advance(&mut self, dt_ms: f32) {
        self.tick(dt_ms);
    }

    fn style(&self, element: ElementId) -> Option<StyleProps> {
        self.elements.get(element).map(|entry| entry.style)
    }

    fn is_animating(&self) -> bool {
        self.has_active_animations()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HERO: StyleProps = StyleProps::geometry(700.0, -20.0, 100.0, 0.0);
    const LOWER: StyleProps = StyleProps::geometry(250.0, 500.0, -80.0, 120.0);

    #[test]
    fn set_immediate_applies_without_animating() {
        let mut scheduler = TweenScheduler::new();
        let id = scheduler.create_element(StyleProps::default());
        scheduler.set_immediate(id, HERO);

        assert_eq!(scheduler.style(id), Some(HERO));
        assert!(!scheduler.has_active_animations());
    }

    #[test]
    fn animate_to_settles_on_target() {
        let mut scheduler = TweenScheduler::with_easing(Easing::Linear);
        let id = scheduler.create_element(HERO);
        scheduler.animate_to(id, LOWER, 0.5);
        assert!(scheduler.has_active_animations());

        scheduler.tick(250.0);
        let mid = scheduler.style(id).unwrap();
        assert_eq!(mid.width, Some(475.0));

        scheduler.tick(250.0);
        assert_eq!(scheduler.style(id), Some(LOWER));
        assert!(scheduler.tween(id).is_none());
    }

    #[test]
    fn retarget_continues_from_current_style() {
        let mut scheduler = TweenScheduler::with_easing(Easing::Linear);
        let id = scheduler.create_element(HERO);
        scheduler.animate_to(id, LOWER, 0.5);
        scheduler.tick(250.0);

        scheduler.animate_to(id, HERO, 0.5);
        assert_eq!(scheduler.style(id).unwrap().width, Some(475.0));
        scheduler.tick(500.0);
        assert_eq!(scheduler.style(id), Some(HERO));
    }

    #[test]
    fn partial_props_leave_other_properties_alone() {
        let mut scheduler = TweenScheduler::new();
        let id = scheduler.create_element(HERO);
        scheduler.animate_to(id, StyleProps::default().with_rotate(90.0), 0.2);
        scheduler.tick(200.0);

        let style = scheduler.style(id).unwrap();
        assert_eq!(style.rotate, Some(90.0));
        assert_eq!(style.width, Some(700.0));
    }

    #[test]
    fn zero_duration_is_immediate() {
        let mut scheduler = TweenScheduler::new();
        let id = scheduler.create_element(HERO);
        scheduler.animate_to(id, LOWER, 0.0);
        assert_eq!(scheduler.style(id), Some(LOWER));
        assert!(!scheduler.is_animating());
    }
}
