//! Shared helpers for the integration tests.

#![allow(dead_code)]

use std::sync::Once;
use std::time::{Duration, Instant};
use tracing_subscriber::filter::LevelFilter;

static INIT_LOGGING: Once = Once::new();

/// Route `tracing` output through the test harness so it shows on failure.
pub fn init_test_logging() {
    INIT_LOGGING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(LevelFilter::TRACE)
            .with_test_writer()
            .with_thread_names(true)
            .with_ansi(false)
            .try_init();
    });
}

/// Poll `condition` every few milliseconds until it holds or `timeout` passes.
pub fn eventually(timeout: Duration, mut condition: impl FnMut() -> bool) -> bool {
    let deadline = Instant::now() + timeout;
    while Instant::now() < deadline {
        if condition() {
            return true;
        }
        std::thread::sleep(Duration::from_millis(5));
    }
    condition()
}
