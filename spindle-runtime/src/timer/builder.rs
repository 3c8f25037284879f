use super::handle::{Shared, TimerHandle};
use super::interval::IntervalTimer;
use crate::config::TimerSettings;
use crate::error::Result;
use config::Config;
use std::time::Duration;
use tracing::info;

const DEFAULT_NAME: &str = "spindle-timer";

/// Builder for an [`IntervalTimer`]
#[derive(Debug, Clone)]
pub struct TimerBuilder {
    interval: Duration,
    repeats: bool,
    name: String,
}

impl TimerBuilder {
    /// One-shot timer named `spindle-timer` firing after `interval`
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            repeats: false,
            name: DEFAULT_NAME.to_string(),
        }
    }

    /// Build from deserialized settings, resolving `${...}` in the interval
    pub fn from_settings(settings: &TimerSettings, config: &Config) -> Result<Self> {
        let interval = settings.interval(config)?;
        let mut builder = Self::new(interval).repeats(settings.repeats);
        if let Some(name) = &settings.name {
            builder = builder.name(name.as_str());
        }
        Ok(builder)
    }

    /// Build from the config section at `key`
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use spindle_runtime::{load_toml_config, TimerBuilder};
    ///
    /// let config = load_toml_config("config/application.toml")?;
    /// let timer = TimerBuilder::from_config(&config, "timers.heartbeat")?
    ///     .spawn(|| println!("heartbeat"))?;
    /// # Ok::<(), spindle_runtime::Error>(())
    /// ```
    pub fn from_config(config: &Config, key: &str) -> Result<Self> {
        let settings = TimerSettings::from_config(config, key)?;
        info!(
            key,
            interval = %settings.interval,
            repeats = settings.repeats,
            "loaded timer settings"
        );
        Self::from_settings(&settings, config)
    }

    pub fn repeats(mut self, repeats: bool) -> Self {
        self.repeats = repeats;
        self
    }

    /// Name of the worker thread, also used in log fields.
    /// Must not contain NUL bytes.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Start the timer.
    pub fn spawn<F>(self, mut callback: F) -> Result<IntervalTimer>
    where
        F: FnMut() + Send + 'static,
    {
        self.spawn_with_handle(move |_: &TimerHandle| callback())
    }

    /// Start the timer, passing the callback a handle to its own timer.
    pub fn spawn_with_handle<F>(self, callback: F) -> Result<IntervalTimer>
    where
        F: FnMut(&TimerHandle) + Send + 'static,
    {
        IntervalTimer::start(Shared::new(self.name, self.interval, self.repeats), callback)
    }
}
