//! Spindle Runtime - main-thread bookkeeping and interval timers
//!
//! This crate provides the runtime pieces re-exported by `spindle`: a
//! process-wide main-thread registry and a cancellable interval timer that
//! runs its callback on a dedicated worker thread.

mod config;
mod error;
mod time_unit;
pub mod main_thread;
pub mod timer;

// Re-export public API
pub use crate::config::{
    load_toml_config, load_yaml_config, resolve_config_value, resolve_interval, TimerSettings,
};
pub use error::{Error, Result};
pub use main_thread::{get_main_thread_id, is_main_thread, main_thread_id, register_main_thread};
pub use time_unit::{parse_interval, TimeUnit};
pub use timer::{IntervalTimer, TimerBuilder, TimerHandle, TimerState};
