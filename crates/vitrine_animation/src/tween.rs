//! Style tweens
//!
//! A tween moves a set of [`StyleProps`] from a start value to a target over
//! a fixed duration, applying an easing curve to the progress.

use crate::easing::Easing;
use vitrine_core::StyleProps;

/// A single from/to interpolation of style properties
#[derive(Clone, Debug)]
pub struct Tween {
    from: StyleProps,
    to: StyleProps,
    duration_ms: u32,
    easing: Easing,
    /// Elapsed time in milliseconds
    current_time: f32,
    playing: bool,
}

impl Tween {
    /// Create a stopped tween; call [`Tween::start`] to begin playback
    pub fn new(from: StyleProps, to: StyleProps, duration_ms: u32, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration_ms,
            easing,
            current_time: 0.0,
            playing: false,
        }
    }

    pub fn start(&mut self) {
        self.current_time = 0.0;
        self.playing = true;
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Whether the tween has reached its target
    pub fn is_finished(&self) -> bool {
        self.progress() >= 1.0
    }

    /// Linear progress in `0.0..=1.0`
    pub fn progress(&self) -> f32 {
        if self.duration_ms == 0 {
            return 1.0;
        }
        (self.current_time / self.duration_ms as f32).clamp(0.0, 1.0)
    }

    /// Current interpolated properties
    pub fn value(&self) -> StyleProps {
        if self.is_finished() {
            return self.to.merged_over(&self.from);
        }
        let eased = self.easing.apply(self.progress());
        self.from.lerp(&self.to, eased)
    }

    /// Advance the tween by delta time (in milliseconds)
    pub fn tick(&mut self, dt_ms: f32) {
        if !self.playing {
            return;
        }

        self.current_time += dt_ms;

        if self.current_time >= self.duration_ms as f32 {
            self.current_time = self.duration_ms as f32;
            self.playing = false;
        }
    }

    pub fn target(&self) -> &StyleProps {
        &self.to
    }

    pub fn duration_ms(&self) -> u32 {
        self.duration_ms
    }

    pub fn easing(&self) -> Easing {
        self.easing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Tween {
        Tween::new(
            StyleProps::geometry(250.0, -100.0, -80.0, 28.0),
            StyleProps::geometry(700.0, -20.0, 100.0, 0.0),
            500,
            Easing::Linear,
        )
    }

    #[test]
    fn unstarted_tween_holds_its_start() {
        let mut tween = sample();
        tween.tick(250.0);
        assert_eq!(tween.value().width, Some(250.0));
        assert!(!tween.is_playing());
    }

    #[test]
    fn tween_reaches_target_and_stops() {
        let mut tween = sample();
        tween.start();
        tween.tick(250.0);
        assert_eq!(tween.value().width, Some(475.0));
        assert!(tween.is_playing());

        tween.tick(300.0);
        assert!(tween.is_finished());
        assert!(!tween.is_playing());
        assert_eq!(tween.value(), *tween.target());
    }

    #[test]
    fn zero_duration_snaps() {
        let tween = Tween::new(
            StyleProps::default().with_width(1.0),
            StyleProps::default().with_width(2.0),
            0,
            Easing::EaseOutQuad,
        );
        assert_eq!(tween.value().width, Some(2.0));
    }
}
