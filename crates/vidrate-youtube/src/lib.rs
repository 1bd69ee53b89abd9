//! Client for the YouTube Data API v3.
//!
//! Fetches title, thumbnail and duration for a single video. Calls are made
//! once; failures are classified into [`YoutubeError`] and never retried.

pub mod client;
pub mod error;
pub mod types;

pub use client::{YoutubeClient, YoutubeConfig, API_KEY_ENV};
pub use error::{YoutubeError, YoutubeResult};
