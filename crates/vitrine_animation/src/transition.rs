//! CSS-like value transitions
//!
//! Models `transition: <property> <duration> <timing-function>` for a single
//! numeric property. Setting a new target mid-flight restarts the transition
//! from the currently displayed value, the way browsers retarget a running
//! CSS transition.

use crate::easing::Easing;

/// A single numeric property under a CSS transition
#[derive(Clone, Debug)]
pub struct ValueTransition {
    from: f32,
    to: f32,
    duration_ms: u32,
    easing: Easing,
    current_time: f32,
}

impl ValueTransition {
    /// A settled transition resting at `value`
    pub fn new(value: f32, duration_ms: u32, easing: Easing) -> Self {
        Self {
            from: value,
            to: value,
            duration_ms,
            easing,
            current_time: duration_ms as f32,
        }
    }

    /// Retarget; a no-op when `target` already is the target
    pub fn set_target(&mut self, target: f32) {
        if (target - self.to).abs() < f32::EPSILON {
            return;
        }
        self.from = self.value();
        self.to = target;
        self.current_time = 0.0;
    }

    pub fn tick(&mut self, dt_ms: f32) {
        if self.is_settled() {
            return;
        }
        self.current_time = (self.current_time + dt_ms).min(self.duration_ms as f32);
    }

    /// Currently displayed value
    pub fn value(&self) -> f32 {
        if self.is_settled() {
            return self.to;
        }
        let progress = (self.current_time / self.duration_ms as f32).clamp(0.0, 1.0);
        self.from + (self.to - self.from) * self.easing.apply(progress)
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    pub fn is_settled(&self) -> bool {
        self.current_time >= self.duration_ms as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settles_on_target_after_duration() {
        let mut opacity = ValueTransition::new(1.0, 500, Easing::TAILWIND_DEFAULT);
        opacity.set_target(0.0);
        assert_eq!(opacity.value(), 1.0);

        opacity.tick(250.0);
        let mid = opacity.value();
        assert!(mid > 0.0 && mid < 1.0);

        opacity.tick(250.0);
        assert!(opacity.is_settled());
        assert_eq!(opacity.value(), 0.0);
    }

    #[test]
    fn retarget_starts_from_displayed_value() {
        let mut height = ValueTransition::new(10.0, 100, Easing::Linear);
        height.set_target(200.0);
        height.tick(50.0);
        assert_eq!(height.value(), 105.0);

        height.set_target(10.0);
        assert_eq!(height.value(), 105.0);
        height.tick(100.0);
        assert_eq!(height.value(), 10.0);
    }

    #[test]
    fn same_target_does_not_restart() {
        let mut height = ValueTransition::new(10.0, 100, Easing::Linear);
        height.set_target(200.0);
        height.tick(50.0);
        height.set_target(200.0);
        height.tick(50.0);
        assert!(height.is_settled());
    }
}
