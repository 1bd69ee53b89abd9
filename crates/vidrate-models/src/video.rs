//! Video details and the watch-time report built from them.

use serde::{Deserialize, Serialize};

use crate::duration::{iso_to_clock, parse_duration};
use crate::speed::{speed_table, SpeedMultiplier, SpeedRow};

/// Metadata returned by a lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoDetails {
    /// Video title
    pub title: String,

    /// Best available thumbnail URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,

    /// ISO-8601 duration as reported by the platform (e.g. `PT3M33S`)
    pub duration: String,
}

impl VideoDetails {
    /// Total length in seconds, `0` when live or unparseable.
    pub fn duration_secs(&self) -> u64 {
        parse_duration(&self.duration)
    }

    /// Original length as `HH:MM:SS`.
    pub fn original_clock(&self) -> Option<String> {
        iso_to_clock(Some(self.duration.as_str()))
    }

    /// Watch times at the given speeds.
    pub fn speed_table(&self, speeds: &[SpeedMultiplier]) -> Vec<SpeedRow> {
        speed_table(self.duration_secs(), speeds)
    }

    /// Build the full report for display.
    pub fn watch_time_report(&self, speeds: &[SpeedMultiplier]) -> WatchTimeReport {
        WatchTimeReport {
            title: self.title.clone(),
            thumbnail: self.thumbnail.clone(),
            duration: self.duration.clone(),
            original: self.original_clock(),
            speeds: self.speed_table(speeds),
        }
    }
}

/// Video details plus the original length and per-speed watch times.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WatchTimeReport {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    pub duration: String,
    /// `HH:MM:SS`, absent when the duration could not be read
    pub original: Option<String>,
    pub speeds: Vec<SpeedRow>,
}
