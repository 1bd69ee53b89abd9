//! YouTube Data API HTTP client.

use std::time::Duration;

use reqwest::Client;
use tracing::{debug, warn};
use vidrate_models::{VideoDetails, VideoRef};

use crate::error::{YoutubeError, YoutubeResult};
use crate::types::{ErrorResponse, VideoListResponse};

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "YOUTUBE_API_KEY";

const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";

/// Configuration for the YouTube client.
#[derive(Debug, Clone)]
pub struct YoutubeConfig {
    /// Base URL of the Data API
    pub base_url: String,
    /// Fixed API key; when `None` the key is read from the environment on
    /// every request
    pub api_key: Option<String>,
    /// Request timeout
    pub timeout: Duration,
}

impl Default for YoutubeConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            timeout: Duration::from_secs(10),
        }
    }
}

impl YoutubeConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("YOUTUBE_API_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            api_key: None,
            timeout: Duration::from_secs(
                std::env::var("YOUTUBE_API_TIMEOUT")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(10),
            ),
        }
    }

    /// Point the client at another API root (used with stub servers).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }
}

/// Client for the YouTube Data API.
#[derive(Debug, Clone)]
pub struct YoutubeClient {
    http: Client,
    config: YoutubeConfig,
}

impl YoutubeClient {
    /// Create a new client.
    pub fn new(config: YoutubeConfig) -> YoutubeResult<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("vidrate-youtube/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(YoutubeError::Network)?;

        Ok(Self { http, config })
    }

    /// Create from environment variables.
    pub fn from_env() -> YoutubeResult<Self> {
        Self::new(YoutubeConfig::from_env())
    }

    pub fn config(&self) -> &YoutubeConfig {
        &self.config
    }

    /// Key sent with the next request. A missing key is not an error here;
    /// the API rejects the call and that rejection is reported instead.
    fn api_key(&self) -> String {
        self.config
            .api_key
            .clone()
            .or_else(|| std::env::var(API_KEY_ENV).ok())
            .unwrap_or_default()
    }

    /// Fetch title, thumbnail and duration of one video.
    pub async fn fetch_video(&self, video: &VideoRef) -> YoutubeResult<VideoDetails> {
        let url = format!("{}/videos", self.config.base_url.trim_end_matches('/'));
        let key = self.api_key();

        debug!(video_id = %video, "Fetching video details");

        let response = self
            .http
            .get(&url)
            .query(&[
                ("part", "snippet,contentDetails"),
                ("id", video.as_str()),
                ("key", key.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            let message = ErrorResponse::message_from(&body);
            warn!(
                video_id = %video,
                status = status.as_u16(),
                error_message = message.as_deref().unwrap_or_default(),
                "YouTube API returned an error"
            );
            return Err(YoutubeError::api(status.as_u16(), message));
        }

        let list: VideoListResponse = serde_json::from_slice(&body)?;

        list.items
            .into_iter()
            .next()
            .map(VideoDetails::from)
            .ok_or_else(|| YoutubeError::NotFound(video.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = YoutubeConfig::default();
        assert_eq!(config.base_url, "https://www.googleapis.com/youtube/v3");
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_explicit_key_wins() {
        let client =
            YoutubeClient::new(YoutubeConfig::default().with_api_key("explicit")).unwrap();
        assert_eq!(client.api_key(), "explicit");
    }
}
