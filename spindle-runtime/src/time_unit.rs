use crate::error::{Error, Result};
use std::time::Duration;

/// Time unit for timer intervals
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    Milliseconds,
    Seconds,
    Minutes,
    Hours,
    Days,
}

impl TimeUnit {
    pub fn to_millis(&self, value: u64) -> u64 {
        match self {
            TimeUnit::Milliseconds => value,
            TimeUnit::Seconds => value.saturating_mul(1000),
            TimeUnit::Minutes => value.saturating_mul(60_000),
            TimeUnit::Hours => value.saturating_mul(3_600_000),
            TimeUnit::Days => value.saturating_mul(86_400_000),
        }
    }

    pub fn to_duration(&self, value: u64) -> Duration {
        Duration::from_millis(self.to_millis(value))
    }

    /// Parse a duration string like "5s", "10m", "2h", "500ms"
    /// Returns (value, TimeUnit) if successful
    ///
    /// Strict rules:
    /// - Only lowercase suffixes are accepted: "ms", "s", "m", "h", "d"
    /// - Format must be: <number><suffix> (e.g., "5s", "100ms")
    /// - No spaces allowed between number and suffix
    pub fn parse_duration(s: &str) -> Option<(u64, TimeUnit)> {
        let s = s.trim();

        let split_pos = s.find(|c: char| !c.is_ascii_digit())?;
        if split_pos == 0 {
            return None;
        }

        let (num_str, unit_str) = s.split_at(split_pos);
        let value = num_str.parse::<u64>().ok()?;

        let time_unit = match unit_str {
            "ms" => TimeUnit::Milliseconds,
            "s" => TimeUnit::Seconds,
            "m" => TimeUnit::Minutes,
            "h" => TimeUnit::Hours,
            "d" => TimeUnit::Days,
            _ => return None,
        };

        Some((value, time_unit))
    }
}

/// Parse an interval such as "500ms", "2s" or a bare number of milliseconds.
pub fn parse_interval(s: &str) -> Result<Duration> {
    if let Some((value, unit)) = TimeUnit::parse_duration(s) {
        return Ok(unit.to_duration(value));
    }

    s.trim()
        .parse::<u64>()
        .map(Duration::from_millis)
        .map_err(|_| Error::InvalidInterval(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_shorthand_suffixes() {
        assert_eq!(parse_interval("500ms").unwrap(), Duration::from_millis(500));
        assert_eq!(parse_interval("2s").unwrap(), Duration::from_secs(2));
        assert_eq!(parse_interval("1m").unwrap(), Duration::from_secs(60));
        assert_eq!(parse_interval("3h").unwrap(), Duration::from_secs(3 * 3600));
        assert_eq!(parse_interval("1d").unwrap(), Duration::from_secs(86_400));
    }

    #[test]
    fn bare_number_is_milliseconds() {
        assert_eq!(parse_interval("250").unwrap(), Duration::from_millis(250));
        assert_eq!(parse_interval(" 0 ").unwrap(), Duration::ZERO);
    }

    #[test]
    fn rejects_malformed_intervals() {
        for bad in ["", "s", "5S", "5 s", "5sec", "-1s", "1.5s", "ms500"] {
            assert!(
                matches!(parse_interval(bad), Err(Error::InvalidInterval(_))),
                "{:?} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn full_unit_names_are_not_interval_units() {
        for bad in ["5seconds", "2minutes", "1hours", "3days", "10milliseconds"] {
            assert!(
                matches!(parse_interval(bad), Err(Error::InvalidInterval(_))),
                "{:?} should be rejected",
                bad
            );
        }
    }
}
