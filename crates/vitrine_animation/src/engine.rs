//! The tween engine seam
//!
//! Views never animate styles themselves; they ask an engine to. The engine
//! may be the built-in [`TweenScheduler`](crate::TweenScheduler), or an
//! adapter over a host animation library that already owns the frame loop.

use std::fmt;
use vitrine_core::StyleProps;

/// The primitives a view needs from an animation library
pub trait TweenEngine {
    /// Handle to an animated element
    type Element: Copy + fmt::Debug;

    /// Register an element with its initial style
    fn create_element(&mut self, initial: StyleProps) -> Self::Element;

    /// Assign `props` immediately, cancelling any running tween on the element
    fn set_immediate(&mut self, element: Self::Element, props: StyleProps);

    /// Interpolate the element's properties named in `props` toward their
    /// values over `duration_secs`
    fn animate_to(&mut self, element: Self::Element, props: StyleProps, duration_secs: f32);

    /// Advance running tweens; engines driven by their host ignore this
    fn advance(&mut self, _dt_ms: f32) {}

    /// Read back the element's current style, if the engine exposes it
    fn style(&self, _element: Self::Element) -> Option<StyleProps> {
        None
    }

    /// Whether any tween is still running
    fn is_animating(&self) -> bool {
        false
    }
}
