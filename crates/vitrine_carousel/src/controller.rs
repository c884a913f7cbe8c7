//! Carousel controller
//!
//! Holds the current index and the transitioning flag. Navigation updates
//! the index at once and hands the animation to the [`Animator`]; the flag
//! clears on a deferred task owned by the controller.

use crate::animator::Animator;
use crate::catalog::ITEM_COUNT;
use serde::{Deserialize, Serialize};
use vitrine_animation::{ScheduledTask, TimerQueue, TweenEngine};

/// Navigation direction
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Prev,
    Next,
}

impl Direction {
    /// Signed index offset: -1 or +1
    pub fn offset(self) -> isize {
        match self {
            Direction::Prev => -1,
            Direction::Next => 1,
        }
    }
}

/// `(current + offset + n) mod n`
pub fn step_index(current: usize, direction: Direction) -> usize {
    let len = ITEM_COUNT as isize;
    let current = (current % ITEM_COUNT) as isize;
    ((current + direction.offset() + len) % len) as usize
}

/// Deferred work the controller schedules on its timer queue
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControllerTask {
    ClearTransition,
}

/// Index and transition state of one carousel
#[derive(Debug)]
pub struct CarouselController {
    current_index: usize,
    is_transitioning: bool,
    reset_delay_ms: u32,
    allow_overlap: bool,
    /// The flag reset for the latest navigation; replacing or dropping it
    /// cancels the timer
    pending_reset: Option<ScheduledTask<ControllerTask>>,
}

impl CarouselController {
    pub fn new(initial_index: usize, reset_delay_ms: u32) -> Self {
        Self {
            current_index: initial_index % ITEM_COUNT,
            is_transitioning: false,
            reset_delay_ms,
            allow_overlap: true,
            pending_reset: None,
        }
    }

    /// Builder: drop navigations that arrive while transitioning
    pub fn with_overlap(mut self, allow_overlap: bool) -> Self {
        self.allow_overlap = allow_overlap;
        self
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn is_transitioning(&self) -> bool {
        self.is_transitioning
    }

    /// Milliseconds until the transitioning flag clears
    pub fn reset_remaining_ms(&self) -> Option<f64> {
        self.pending_reset.as_ref().and_then(ScheduledTask::remaining_ms)
    }

    /// Navigate one step
    ///
    /// Returns the new index, or `None` when overlap is disabled and a
    /// transition is still running. A navigation during a transition
    /// retargets the animation and restarts the reset window.
    pub fn advance<E: TweenEngine>(
        &mut self,
        direction: Direction,
        animator: &Animator<E>,
        engine: &mut E,
        timers: &TimerQueue<ControllerTask>,
    ) -> Option<usize> {
        if self.is_transitioning && !self.allow_overlap {
            tracing::debug!(?direction, "navigation dropped while transitioning");
            return None;
        }

        let new_index = step_index(self.current_index, direction);
        tracing::debug!(
            from = self.current_index,
            to = new_index,
            ?direction,
            overlapping = self.is_transitioning,
            "advance"
        );

        self.is_transitioning = true;
        animator.apply(engine, new_index);
        self.current_index = new_index;
        self.pending_reset = Some(timers.schedule(self.reset_delay_ms, ControllerTask::ClearTransition));

        Some(new_index)
    }

    /// Handle a task fired by the timer queue
    pub fn on_task(&mut self, task: ControllerTask) {
        match task {
            ControllerTask::ClearTransition => {
                self.is_transitioning = false;
                self.pending_reset = None;
                tracing::trace!(index = self.current_index, "transition window closed");
            }
        }
    }

    /// Cancel pending work; the flag clears immediately
    pub fn dispose(&mut self) {
        if let Some(task) = self.pending_reset.take() {
            task.cancel();
        }
        self.is_transitioning = false;
    }
}
