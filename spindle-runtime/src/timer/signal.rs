use std::sync::{Condvar, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

/// One-way flag that a waiter can block on with a timeout.
///
/// Raising and notifying happen under the same mutex the waiter checks, so a
/// raise that lands between the waiter's check and its sleep is never lost.
#[derive(Debug, Default)]
pub(crate) struct Signal {
    raised: Mutex<bool>,
    cv: Condvar,
}

impl Signal {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Raise the flag and wake every waiter. Returns false if it was already raised.
    pub(crate) fn raise(&self) -> bool {
        let mut raised = self.lock();
        if *raised {
            return false;
        }
        *raised = true;
        self.cv.notify_all();
        true
    }

    pub(crate) fn is_raised(&self) -> bool {
        *self.lock()
    }

    /// Block until the flag is raised or `timeout` elapses on the monotonic
    /// clock. Spurious wakeups go back to sleep for the remaining time.
    /// Returns whether the flag is raised.
    pub(crate) fn wait_timeout(&self, timeout: Duration) -> bool {
        let guard = self.lock();
        let (raised, _) = self
            .cv
            .wait_timeout_while(guard, timeout, |raised| !*raised)
            .unwrap_or_else(PoisonError::into_inner);
        *raised
    }

    // The flag is a plain bool, so a poisoned lock still holds a valid value.
    fn lock(&self) -> MutexGuard<'_, bool> {
        self.raised.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
