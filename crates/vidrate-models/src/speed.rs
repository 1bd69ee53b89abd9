//! Playback speeds and per-speed watch times.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::duration::format_seconds;

/// Speeds shown when the caller does not ask for specific ones.
pub const DEFAULT_SPEEDS: [f64; 8] = [0.25, 0.5, 0.75, 1.25, 1.5, 1.75, 2.0, 3.0];

/// Speed parsing error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SpeedError {
    #[error("Speed must be a positive finite number, got {0}")]
    NotPositive(f64),

    #[error("Invalid speed value: {0}")]
    InvalidValue(String),

    #[error("Speed list is empty")]
    Empty,
}

/// A positive, finite playback speed multiplier.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct SpeedMultiplier(f64);

impl SpeedMultiplier {
    pub fn new(value: f64) -> Result<Self, SpeedError> {
        if value.is_finite() && value > 0.0 {
            Ok(Self(value))
        } else {
            Err(SpeedError::NotPositive(value))
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// The default display set.
    pub fn defaults() -> Vec<Self> {
        DEFAULT_SPEEDS.iter().map(|&v| Self(v)).collect()
    }
}

impl TryFrom<f64> for SpeedMultiplier {
    type Error = SpeedError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SpeedMultiplier> for f64 {
    fn from(speed: SpeedMultiplier) -> Self {
        speed.0
    }
}

impl fmt::Display for SpeedMultiplier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}×", self.0)
    }
}

/// Parse a comma-separated speed list such as `"1.5, 2"`.
pub fn parse_speed_list(raw: &str) -> Result<Vec<SpeedMultiplier>, SpeedError> {
    let speeds = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<f64>()
                .map_err(|_| SpeedError::InvalidValue(s.to_string()))
                .and_then(SpeedMultiplier::new)
        })
        .collect::<Result<Vec<_>, _>>()?;

    if speeds.is_empty() {
        return Err(SpeedError::Empty);
    }
    Ok(speeds)
}

/// Watch time of `seconds` of video played at `speed`.
pub fn watch_time(seconds: u64, speed: SpeedMultiplier) -> String {
    format_seconds(seconds as f64 / speed.value())
}

/// One row of the watch-time table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeedRow {
    pub speed: SpeedMultiplier,
    pub time: String,
}

/// Watch times for each speed. Empty when the duration is zero, since a
/// live or unknown-length video has nothing to show.
pub fn speed_table(seconds: u64, speeds: &[SpeedMultiplier]) -> Vec<SpeedRow> {
    if seconds == 0 {
        return Vec::new();
    }

    speeds
        .iter()
        .map(|&speed| SpeedRow {
            speed,
            time: watch_time(seconds, speed),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn speed(v: f64) -> SpeedMultiplier {
        SpeedMultiplier::new(v).unwrap()
    }

    /// Decode `[Hh ]Mm Ss` back into seconds.
    fn decode(rendered: &str) -> u64 {
        rendered
            .split_whitespace()
            .map(|part| {
                let (num, unit) = part.split_at(part.len() - 1);
                let n: u64 = num.parse().unwrap();
                match unit {
                    "h" => n * 3600,
                    "m" => n * 60,
                    "s" => n,
                    other => panic!("unexpected unit {}", other),
                }
            })
            .sum()
    }

    #[test]
    fn test_speed_validation() {
        assert!(SpeedMultiplier::new(1.5).is_ok());
        assert!(SpeedMultiplier::new(0.01).is_ok());
        assert_eq!(SpeedMultiplier::new(0.0), Err(SpeedError::NotPositive(0.0)));
        assert!(SpeedMultiplier::new(-1.0).is_err());
        assert!(SpeedMultiplier::new(f64::NAN).is_err());
        assert!(SpeedMultiplier::new(f64::INFINITY).is_err());
    }

    #[test]
    fn test_watch_time() {
        assert_eq!(watch_time(213, speed(2.0)), "1m 46s");
        assert_eq!(watch_time(3723, speed(1.0)), "1h 2m 3s");
        assert_eq!(watch_time(600, speed(0.5)), "20m 0s");
        assert_eq!(watch_time(0, speed(2.0)), "Invalid time");
    }

    #[test]
    fn test_scaling_property() {
        for seconds in [1u64, 7, 59, 213, 2214, 3723, 86_399, 123_457] {
            for &k in DEFAULT_SPEEDS.iter().chain([0.3, 1.1, 7.0].iter()) {
                let rendered = watch_time(seconds, speed(k));
                let expected = (seconds as f64 / k).floor() as u64;
                if expected == 0 {
                    assert_eq!(rendered, "0m 0s");
                } else {
                    assert_eq!(decode(&rendered), expected, "{}s at {}x", seconds, k);
                }
            }
        }
    }

    #[test]
    fn test_speed_table_defaults() {
        let table = speed_table(213, &SpeedMultiplier::defaults());
        assert_eq!(table.len(), DEFAULT_SPEEDS.len());

        let at_two = table.iter().find(|row| row.speed.value() == 2.0).unwrap();
        assert_eq!(at_two.time, "1m 46s");

        let quarter = &table[0];
        assert_eq!(quarter.speed.value(), 0.25);
        assert_eq!(quarter.time, "14m 12s");
    }

    #[test]
    fn test_speed_table_zero_duration() {
        assert!(speed_table(0, &SpeedMultiplier::defaults()).is_empty());
    }

    #[test]
    fn test_parse_speed_list() {
        let speeds = parse_speed_list("1.5, 2,3").unwrap();
        assert_eq!(speeds, vec![speed(1.5), speed(2.0), speed(3.0)]);

        assert_eq!(parse_speed_list(""), Err(SpeedError::Empty));
        assert_eq!(parse_speed_list(" , "), Err(SpeedError::Empty));
        assert_eq!(
            parse_speed_list("2,fast"),
            Err(SpeedError::InvalidValue("fast".to_string()))
        );
        assert!(matches!(parse_speed_list("1,-2"), Err(SpeedError::NotPositive(_))));
    }

    #[test]
    fn test_speed_serde() {
        let row = SpeedRow {
            speed: speed(1.25),
            time: "1m 0s".to_string(),
        };
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json, serde_json::json!({ "speed": 1.25, "time": "1m 0s" }));

        assert!(serde_json::from_str::<SpeedMultiplier>("0").is_err());
        assert_eq!(serde_json::from_str::<SpeedMultiplier>("2").unwrap(), speed(2.0));
    }
}
