use thiserror::Error;

/// Errors raised while setting up a timer.
///
/// Once a timer is running, `cancel`, `unset_repeats` and `wait` never fail.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to spawn timer worker thread: {0}")]
    Spawn(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid interval: {0}")]
    InvalidInterval(String),

    #[error("Unresolved config placeholder: {0}")]
    UnresolvedPlaceholder(String),
}

pub type Result<T> = std::result::Result<T, Error>;
