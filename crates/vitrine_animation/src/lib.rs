//! Vitrine Animation System
//!
//! Tweens, presentational transitions, and timer orchestration.
//!
//! # Features
//!
//! - **Easing**: CSS and GSAP-style easing curves, including cubic beziers
//! - **Tweens**: Interpolate [`StyleProps`](vitrine_core::StyleProps) over a duration
//! - **Tween engine**: The two primitives a view needs (`set_immediate`, `animate_to`)
//!   behind the [`TweenEngine`] trait, with [`TweenScheduler`] as the built-in engine
//! - **Transitions**: CSS-like single-value transitions that retarget from where they are
//! - **Timers**: Deferred tasks that cancel themselves when their handle is dropped

pub mod easing;
pub mod engine;
pub mod scheduler;
pub mod timer;
pub mod transition;
pub mod tween;

pub use easing::Easing;
pub use engine::TweenEngine;
pub use scheduler::{ElementId, TweenScheduler};
pub use timer::{ScheduledTask, TimerId, TimerQueue};
pub use transition::ValueTransition;
pub use tween::Tween;
