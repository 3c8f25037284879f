mod builder;
mod handle;
mod interval;
mod signal;

pub use builder::TimerBuilder;
pub use handle::{TimerHandle, TimerState};
pub use interval::IntervalTimer;
