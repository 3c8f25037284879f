use super::builder::TimerBuilder;
use super::handle::{Shared, TimerHandle, TimerState};
use crate::error::Result;
use std::any::Any;
use std::sync::atomic::Ordering;
use std::sync::{Arc, Mutex, PoisonError};
use std::thread::{self, JoinHandle, ThreadId};
use std::time::Duration;
use tracing::{debug, error, trace, warn};

/// Runs a callback on a dedicated worker thread after every `interval`,
/// or once when not repeating.
///
/// The worker starts as soon as the timer is created. Dropping the timer
/// cancels it and blocks until the worker has exited, so the callback never
/// outlives the timer.
///
/// ```rust,no_run
/// use spindle_runtime::IntervalTimer;
/// use std::time::Duration;
///
/// let timer = IntervalTimer::new(Duration::from_secs(1), true, || {
///     println!("tick");
/// })?;
/// std::thread::sleep(Duration::from_secs(5));
/// timer.cancel();
/// timer.wait();
/// # Ok::<(), spindle_runtime::Error>(())
/// ```
#[derive(Debug)]
pub struct IntervalTimer {
    handle: TimerHandle,
    worker_id: ThreadId,
    worker: Mutex<Option<JoinHandle<()>>>,
}

impl IntervalTimer {
    /// Start a timer with the default worker name.
    pub fn new<F>(interval: Duration, repeats: bool, callback: F) -> Result<Self>
    where
        F: FnMut() + Send + 'static,
    {
        TimerBuilder::new(interval).repeats(repeats).spawn(callback)
    }

    /// Start a timer whose callback receives a handle to the timer itself,
    /// e.g. to cancel from inside the callback.
    pub fn with_handle<F>(interval: Duration, repeats: bool, callback: F) -> Result<Self>
    where
        F: FnMut(&TimerHandle) + Send + 'static,
    {
        TimerBuilder::new(interval)
            .repeats(repeats)
            .spawn_with_handle(callback)
    }

    pub fn builder(interval: Duration) -> TimerBuilder {
        TimerBuilder::new(interval)
    }

    pub(crate) fn start<F>(shared: Shared, callback: F) -> Result<Self>
    where
        F: FnMut(&TimerHandle) + Send + 'static,
    {
        let handle = TimerHandle::new(Arc::new(shared));
        let worker_handle = handle.clone();

        let worker = thread::Builder::new()
            .name(handle.name().to_string())
            .spawn(move || run_worker(worker_handle, callback))?;

        debug!(
            timer = %handle.name(),
            interval = ?handle.interval(),
            repeats = handle.repeats(),
            "timer started"
        );

        Ok(Self {
            handle,
            worker_id: worker.thread().id(),
            worker: Mutex::new(Some(worker)),
        })
    }

    /// See [`TimerHandle::cancel`].
    pub fn cancel(&self) {
        self.handle.cancel();
    }

    /// See [`TimerHandle::unset_repeats`].
    pub fn unset_repeats(&self) {
        self.handle.unset_repeats();
    }

    /// Block until the worker has exited.
    ///
    /// Only returns on its own for a one-shot timer, or after `cancel()` or
    /// `unset_repeats()`. Returns immediately once the worker has been joined.
    /// Called from the timer's own callback it returns without waiting, since
    /// the worker cannot join itself.
    pub fn wait(&self) {
        if thread::current().id() == self.worker_id {
            warn!(timer = %self.handle.name(), "wait() called from the timer's own callback, ignoring");
            return;
        }

        // Held across the join so concurrent waiters all block until the exit.
        let mut worker = self.worker.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(worker) = worker.take() {
            join_worker(&self.handle, worker);
        }
    }

    /// A control handle that can outlive borrows of this timer.
    pub fn handle(&self) -> TimerHandle {
        self.handle.clone()
    }

    pub fn interval(&self) -> Duration {
        self.handle.interval()
    }

    pub fn repeats(&self) -> bool {
        self.handle.repeats()
    }

    pub fn is_cancelled(&self) -> bool {
        self.handle.is_cancelled()
    }

    pub fn name(&self) -> &str {
        self.handle.name()
    }

    pub fn state(&self) -> TimerState {
        self.handle.state()
    }
}

impl Drop for IntervalTimer {
    fn drop(&mut self) {
        let worker = self
            .worker
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        let Some(worker) = worker else {
            return;
        };

        self.handle.cancel();

        if thread::current().id() == self.worker_id {
            // Dropped by its own callback: the worker sees the cancellation
            // once the callback returns and exits on its own.
            debug!(timer = %self.handle.name(), "timer dropped from its own callback");
            return;
        }

        join_worker(&self.handle, worker);
    }
}

/// Marks the timer stopped when the worker returns or unwinds.
struct FinishGuard<'a>(&'a Shared);

impl Drop for FinishGuard<'_> {
    fn drop(&mut self) {
        self.0.finished.store(true, Ordering::Release);
    }
}

fn run_worker<F>(handle: TimerHandle, mut callback: F)
where
    F: FnMut(&TimerHandle),
{
    let shared = &*handle.shared;
    let _finish = FinishGuard(shared);

    loop {
        if shared.cancelled.wait_timeout(shared.interval) {
            debug!(timer = %shared.name, "worker exiting on cancellation");
            return;
        }

        trace!(timer = %shared.name, "timer fired");
        callback(&handle);

        if !shared.repeats.load(Ordering::SeqCst) {
            debug!(timer = %shared.name, "worker exiting, timer does not repeat");
            return;
        }
    }
}

fn join_worker(handle: &TimerHandle, worker: JoinHandle<()>) {
    match worker.join() {
        Ok(()) => trace!(timer = %handle.name(), "worker joined"),
        Err(payload) => error!(
            timer = %handle.name(),
            panic = panic_message(payload.as_ref()),
            "timer callback panicked, worker terminated"
        ),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message
    } else {
        "<non-string panic payload>"
    }
}
