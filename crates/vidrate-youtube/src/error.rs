//! YouTube client error types.

use thiserror::Error;

pub type YoutubeResult<T> = Result<T, YoutubeError>;

/// Message used when an API error body carries none.
pub const DEFAULT_API_ERROR: &str = "YouTube API error";

#[derive(Debug, Error)]
pub enum YoutubeError {
    #[error("Video not found: {0}")]
    NotFound(String),

    /// The API answered with an error status.
    #[error("YouTube API returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl YoutubeError {
    pub fn api(status: u16, message: Option<String>) -> Self {
        Self::Api {
            status,
            message: message
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| DEFAULT_API_ERROR.to_string()),
        }
    }

    /// Short label for logs and metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            YoutubeError::NotFound(_) => "not_found",
            YoutubeError::Api { .. } => "api_error",
            YoutubeError::Network(_) => "network_error",
            YoutubeError::Json(_) => "invalid_response",
        }
    }
}
