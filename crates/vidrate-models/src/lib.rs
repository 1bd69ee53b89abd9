//! Shared models for Vidrate.
//!
//! This crate provides:
//! - Video reference extraction from user-pasted URLs
//! - ISO-8601 duration parsing and watch-time formatting
//! - Playback speeds and per-speed watch-time tables
//! - Presentation state for the watch-time page

pub mod duration;
pub mod speed;
pub mod video;
pub mod video_ref;
pub mod view;

// Re-export common types
pub use duration::{format_clock, format_seconds, iso_to_clock, parse_duration, INVALID_TIME};
pub use speed::{speed_table, watch_time, SpeedError, SpeedMultiplier, SpeedRow, DEFAULT_SPEEDS};
pub use video::{VideoDetails, WatchTimeReport};
pub use video_ref::{extract_video_ref, VideoRef};
pub use view::{LookupFailure, LookupTicket, LookupTracker, Theme, WatchTimeView};
