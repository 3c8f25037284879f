//! Process-wide record of which thread is the "main" thread.
//!
//! The identity is captured by whichever thread first calls
//! [`get_main_thread_id`] (or [`register_main_thread`]) and never changes
//! afterwards. Call `register_main_thread()` early from the entry thread,
//! or annotate `fn main` with `#[spindle::main]`.

use std::sync::OnceLock;
use std::thread::{self, ThreadId};
use tracing::debug;

static MAIN_THREAD_ID: OnceLock<ThreadId> = OnceLock::new();

/// Identity of the main thread, capturing the caller's identity on first use.
pub fn get_main_thread_id() -> ThreadId {
    *MAIN_THREAD_ID.get_or_init(|| {
        let current = thread::current();
        debug!(
            thread = current.name().unwrap_or("<unnamed>"),
            id = ?current.id(),
            "captured main thread"
        );
        current.id()
    })
}

/// Identity of the main thread if it has been captured, without capturing it.
pub fn main_thread_id() -> Option<ThreadId> {
    MAIN_THREAD_ID.get().copied()
}

/// Make the calling thread the main thread unless one was already captured.
pub fn register_main_thread() {
    get_main_thread_id();
}

pub fn is_main_thread() -> bool {
    get_main_thread_id() == thread::current().id()
}
