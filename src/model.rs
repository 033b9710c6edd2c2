//! Timer state for the floating quest timer.
//! Only the counter lives here; placement and dragging are in `state`.

use std::rc::Rc;
use yew::{Callback, Reducible};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TimerState {
    pub elapsed_secs: u64,
    pub running: bool,
}

impl TimerState {
    pub fn new(initial_secs: u64) -> Self {
        Self {
            elapsed_secs: initial_secs,
            running: false,
        }
    }

    /// Applies an action in place. Returns whether anything changed.
    pub fn apply(&mut self, action: TimerAction) -> bool {
        use TimerAction::*;
        let before = *self;
        match action {
            Toggle => self.running = !self.running,
            Stop => {
                self.running = false;
                self.elapsed_secs = 0;
            }
            // Ticks that race a pause are dropped, never banked.
            Tick => {
                if self.running {
                    self.elapsed_secs = self.elapsed_secs.saturating_add(1);
                }
            }
        }
        *self != before
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerAction {
    Toggle,
    Stop,
    Tick, // one per elapsed cadence period while running
}

impl Reducible for TimerState {
    type Action = TimerAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut new = *self;
        if !new.apply(action) {
            return self;
        }
        Rc::new(new)
    }
}

/// Resets the timer and notifies the owner. The callback fires exactly once
/// per call and its outcome is not observed.
pub fn stop_timer(dispatch: impl Fn(TimerAction), on_stop: &Callback<()>) {
    dispatch(TimerAction::Stop);
    on_stop.emit(());
}
