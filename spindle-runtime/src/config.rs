use crate::error::{Error, Result};
use crate::time_unit::parse_interval;
use config::{Config, File, FileFormat};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Load config from a specific TOML file
pub fn load_toml_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let config = Config::builder()
        .add_source(File::from(path.as_ref()).format(FileFormat::Toml))
        .add_source(config::Environment::with_prefix("APP").separator("_"))
        .build()?;
    Ok(config)
}

/// Load config from a specific YAML file
pub fn load_yaml_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let config = Config::builder()
        .add_source(File::from(path.as_ref()).format(FileFormat::Yaml))
        .add_source(config::Environment::with_prefix("APP").separator("_"))
        .build()?;
    Ok(config)
}

/// Resolve config placeholder like ${app.interval} or ${app.interval:default}
pub fn resolve_config_value(value: &str, config: &Config) -> Result<String> {
    let Some(inner) = value
        .strip_prefix("${")
        .and_then(|rest| rest.strip_suffix('}'))
    else {
        return Ok(value.to_string());
    };

    // ${app.interval:10} falls back to "10"
    if let Some((key, default_value)) = inner.split_once(':') {
        match config.get_string(key) {
            Ok(resolved) => Ok(resolved),
            Err(_) => Ok(default_value.to_string()),
        }
    } else {
        config
            .get_string(inner)
            .map_err(|_| Error::UnresolvedPlaceholder(inner.to_string()))
    }
}

/// Resolve a possibly-placeholdered interval and parse it into a duration.
pub fn resolve_interval(value: &str, config: &Config) -> Result<Duration> {
    let resolved = resolve_config_value(value, config)?;
    parse_interval(&resolved)
}

/// Timer description as it appears in a config section.
///
/// ```toml
/// [timers.heartbeat]
/// interval = "500ms"
/// repeats = true
/// name = "heartbeat"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TimerSettings {
    pub interval: String,
    #[serde(default)]
    pub repeats: bool,
    #[serde(default)]
    pub name: Option<String>,
}

impl TimerSettings {
    /// Read the section at `key` (e.g. `timers.heartbeat`).
    pub fn from_config(config: &Config, key: &str) -> Result<Self> {
        Ok(config.get::<TimerSettings>(key)?)
    }

    /// The interval, with `${...}` placeholders resolved against `config`.
    pub fn interval(&self, config: &Config) -> Result<Duration> {
        resolve_interval(&self.interval, config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app_config() -> Config {
        Config::builder()
            .set_override("app.poll", "250ms")
            .unwrap()
            .set_override("timers.heartbeat.interval", "${app.poll}")
            .unwrap()
            .set_override("timers.heartbeat.repeats", true)
            .unwrap()
            .set_override("timers.once.interval", "2s")
            .unwrap()
            .build()
            .unwrap()
    }

    #[test]
    fn literal_values_pass_through() {
        let config = Config::default();
        assert_eq!(resolve_config_value("5s", &config).unwrap(), "5s");
    }

    #[test]
    fn placeholder_resolves_or_falls_back() {
        let config = app_config();
        assert_eq!(resolve_config_value("${app.poll}", &config).unwrap(), "250ms");
        assert_eq!(
            resolve_config_value("${app.missing:1s}", &config).unwrap(),
            "1s"
        );
        assert!(matches!(
            resolve_config_value("${app.missing}", &config),
            Err(Error::UnresolvedPlaceholder(key)) if key == "app.missing"
        ));
    }

    #[test]
    fn settings_read_from_section() {
        let config = app_config();

        let heartbeat = TimerSettings::from_config(&config, "timers.heartbeat").unwrap();
        assert!(heartbeat.repeats);
        assert_eq!(heartbeat.name, None);
        assert_eq!(
            heartbeat.interval(&config).unwrap(),
            Duration::from_millis(250)
        );

        let once = TimerSettings::from_config(&config, "timers.once").unwrap();
        assert!(!once.repeats);
        assert_eq!(once.interval(&config).unwrap(), Duration::from_secs(2));
    }

    #[test]
    fn missing_section_is_a_config_error() {
        let config = app_config();
        assert!(matches!(
            TimerSettings::from_config(&config, "timers.absent"),
            Err(Error::Config(_))
        ));
    }
}
