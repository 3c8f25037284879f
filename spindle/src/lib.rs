//! # Spindle - main-thread bookkeeping and interval timers
//!
//! Two small concurrency primitives:
//!
//! - **Main-thread registry**: record which thread is the application's
//!   entry thread and ask "am I on it?" from anywhere.
//! - **Interval timer**: run a callback on a dedicated worker thread after an
//!   interval, once or repeatedly, with prompt cancellation and a drop that
//!   joins the worker.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use spindle::IntervalTimer;
//! use std::time::Duration;
//!
//! #[spindle::main]
//! fn main() -> Result<(), spindle::Error> {
//!     assert!(spindle::is_main_thread());
//!
//!     let timer = IntervalTimer::new(Duration::from_millis(500), true, || {
//!         println!("tick");
//!     })?;
//!
//!     std::thread::sleep(Duration::from_secs(3));
//!     timer.unset_repeats(); // one more tick, then stop
//!     timer.wait();
//!     Ok(())
//! }
//! ```
//!
//! ## Configuration
//!
//! Timers can be described in `config/application.toml`:
//!
//! ```toml
//! [app]
//! heartbeat = "2s"
//!
//! [timers.heartbeat]
//! interval = "${app.heartbeat:1s}"
//! repeats = true
//! name = "heartbeat"
//! ```
//!
//! and started with `TimerBuilder::from_config(&config, "timers.heartbeat")`.
//! Environment variables with the `APP_` prefix override file values.

pub use spindle_macro::{main, main_thread};
pub use spindle_runtime;

pub use spindle_runtime::{
    get_main_thread_id, is_main_thread, load_toml_config, load_yaml_config, main_thread_id,
    parse_interval, register_main_thread, resolve_config_value, resolve_interval, Error,
    IntervalTimer, Result, TimeUnit, TimerBuilder, TimerHandle, TimerSettings, TimerState,
};
