//! Deferred tasks on logical time
//!
//! A [`TimerQueue`] fires payloads once their delay has elapsed, measured in
//! the same ticks that drive tweens. Scheduling returns a [`ScheduledTask`]
//! guard: dropping it cancels the timer, so a task can never outlive the
//! component that owns its handle.

use slotmap::{new_key_type, SlotMap};
use std::cell::RefCell;
use std::rc::{Rc, Weak};

new_key_type! {
    pub struct TimerId;
}

struct PendingTimer<T> {
    deadline_ms: f64,
    /// Insertion order, breaks deadline ties
    seq: u64,
    payload: T,
}

struct TimerState<T> {
    timers: SlotMap<TimerId, PendingTimer<T>>,
    now_ms: f64,
    next_seq: u64,
}

/// Queue of pending deferred tasks
pub struct TimerQueue<T> {
    state: Rc<RefCell<TimerState<T>>>,
}

impl<T> TimerQueue<T> {
    pub fn new() -> Self {
        Self {
            state: Rc::new(RefCell::new(TimerState {
                timers: SlotMap::with_key(),
                now_ms: 0.0,
                next_seq: 0,
            })),
        }
    }

    /// Schedule `payload` to fire `delay_ms` from now
    #[must_use = "dropping the task cancels it"]
    pub fn schedule(&self, delay_ms: u32, payload: T) -> ScheduledTask<T> {
        let mut state = self.state.borrow_mut();
        let deadline_ms = state.now_ms + f64::from(delay_ms);
        let seq = state.next_seq;
        state.next_seq += 1;
        let id = state.timers.insert(PendingTimer {
            deadline_ms,
            seq,
            payload,
        });

        ScheduledTask {
            id,
            queue: Rc::downgrade(&self.state),
        }
    }

    /// Advance logical time and drain every timer that came due, in
    /// deadline order
    pub fn advance(&self, dt_ms: f32) -> Vec<T> {
        let mut state = self.state.borrow_mut();
        state.now_ms += f64::from(dt_ms.max(0.0));
        let now = state.now_ms;

        let mut due: Vec<(f64, u64, TimerId)> = state
            .timers
            .iter()
            .filter(|(_, timer)| timer.deadline_ms <= now)
            .map(|(id, timer)| (timer.deadline_ms, timer.seq, id))
            .collect();
        due.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));

        let fired: Vec<T> = due
            .into_iter()
            .filter_map(|(_, _, id)| state.timers.remove(id))
            .map(|timer| timer.payload)
            .collect();
        fired
    }

    pub fn pending_count(&self) -> usize {
        self.state.borrow().timers.len()
    }

    /// Logical time elapsed since the queue was created
    pub fn now_ms(&self) -> f64 {
        self.state.borrow().now_ms
    }
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Ownership of a pending timer; dropping it cancels the timer
pub struct ScheduledTask<T> {
    id: TimerId,
    queue: Weak<RefCell<TimerState<T>>>,
}

impl<T> ScheduledTask<T> {
    pub fn id(&self) -> TimerId {
        self.id
    }

    /// Whether the timer is still waiting to fire
    pub fn is_pending(&self) -> bool {
        let Some(state) = self.queue.upgrade() else {
            return false;
        };
        let pending = state.borrow().timers.contains_key(self.id);
        pending
    }

    /// Milliseconds until the timer fires, if still pending
    pub fn remaining_ms(&self) -> Option<f64> {
        let state = self.queue.upgrade()?;
        let state = state.borrow();
        let remaining = state
            .timers
            .get(self.id)
            .map(|timer| (timer.deadline_ms - state.now_ms).max(0.0));
        remaining
    }

    /// Cancel explicitly; returns whether the timer was still pending
    pub fn cancel(self) -> bool {
        self.remove()
    }

    fn remove(&self) -> bool {
        let Some(state) = self.queue.upgrade() else {
            return false;
        };
        let Ok(mut state) = state.try_borrow_mut() else {
            return false;
        };
        state.timers.remove(self.id).is_some()
    }
}

impl<T> Drop for ScheduledTask<T> {
    fn drop(&mut self) {
        if self.remove() {
            tracing::trace!(id = ?self.id, "cancelled pending timer");
        }
    }
}

impl<T> std::fmt::Debug for ScheduledTask<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScheduledTask")
            .field("id", &self.id)
            .field("remaining_ms", &self.remaining_ms())
            .finish()
    }
}
