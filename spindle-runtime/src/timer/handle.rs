use super::signal::Signal;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Where a timer is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    /// Worker is waiting out an interval or running the callback.
    Running,
    /// Cancellation requested; the worker has not finished yet.
    Cancelling,
    /// Worker loop has returned (naturally, by cancellation, or by a callback panic).
    Stopped,
}

/// State shared between a timer, its handles, and its worker thread.
#[derive(Debug)]
pub(crate) struct Shared {
    pub(crate) name: String,
    pub(crate) interval: Duration,
    pub(crate) repeats: AtomicBool,
    pub(crate) cancelled: Signal,
    pub(crate) finished: AtomicBool,
}

impl Shared {
    pub(crate) fn new(name: String, interval: Duration, repeats: bool) -> Self {
        Self {
            name,
            interval,
            repeats: AtomicBool::new(repeats),
            cancelled: Signal::new(),
            finished: AtomicBool::new(false),
        }
    }
}

/// Cloneable control handle for a running timer.
///
/// Handles can cancel the timer or stop it from repeating, from any thread
/// including the timer's own callback. They never own or join the worker;
/// dropping every handle leaves the timer running.
#[derive(Debug, Clone)]
pub struct TimerHandle {
    pub(crate) shared: Arc<Shared>,
}

impl TimerHandle {
    pub(crate) fn new(shared: Arc<Shared>) -> Self {
        Self { shared }
    }

    /// Stop the timer: no further callback starts after this returns.
    ///
    /// Wakes the worker if it is waiting. A callback already running is left
    /// to finish. Calling this more than once has no further effect.
    pub fn cancel(&self) {
        self.shared.repeats.store(false, Ordering::SeqCst);
        if self.shared.cancelled.raise() {
            debug!(timer = %self.shared.name, "timer cancelled");
        }
    }

    /// Let the current wait/fire cycle complete, then stop.
    pub fn unset_repeats(&self) {
        if self.shared.repeats.swap(false, Ordering::SeqCst) {
            debug!(timer = %self.shared.name, "timer will stop after its next firing");
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.shared.cancelled.is_raised()
    }

    pub fn repeats(&self) -> bool {
        self.shared.repeats.load(Ordering::SeqCst)
    }

    pub fn interval(&self) -> Duration {
        self.shared.interval
    }

    pub fn name(&self) -> &str {
        &self.shared.name
    }

    pub fn state(&self) -> TimerState {
        if self.shared.finished.load(Ordering::Acquire) {
            TimerState::Stopped
        } else if self.is_cancelled() {
            TimerState::Cancelling
        } else {
            TimerState::Running
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn handle(repeats: bool) -> TimerHandle {
        TimerHandle::new(Arc::new(Shared::new(
            "test".to_string(),
            Duration::from_millis(10),
            repeats,
        )))
    }

    #[test]
    fn cancel_clears_repeats_and_is_idempotent() {
        let handle = handle(true);
        assert_eq!(handle.state(), TimerState::Running);

        handle.cancel();
        handle.cancel();
        assert!(handle.is_cancelled());
        assert!(!handle.repeats());
        assert_eq!(handle.state(), TimerState::Cancelling);
    }

    #[test]
    fn unset_repeats_does_not_cancel() {
        let handle = handle(true);
        handle.unset_repeats();
        assert!(!handle.repeats());
        assert!(!handle.is_cancelled());
        assert_eq!(handle.state(), TimerState::Running);
    }

    #[test]
    fn finished_wins_over_cancelled() {
        let handle = handle(false);
        handle.cancel();
        handle.shared.finished.store(true, Ordering::Release);
        assert_eq!(handle.state(), TimerState::Stopped);
    }
}
