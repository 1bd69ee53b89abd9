//! API error types.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use vidrate_models::SpeedError;
use vidrate_youtube::YoutubeError;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("YouTube video URL is required.")]
    MissingInput,

    #[error("Invalid YouTube video URL.")]
    UnrecognizedUrl,

    #[error("Invalid playback speed list.")]
    InvalidSpeeds(#[source] SpeedError),

    #[error("Video not found.")]
    UpstreamNotFound,

    /// Error reported by the platform, passed through as-is.
    #[error("{message}")]
    Upstream { status: u16, message: String },

    #[error("Failed to fetch video details.")]
    Network(String),
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingInput | ApiError::UnrecognizedUrl | ApiError::InvalidSpeeds(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::UpstreamNotFound => StatusCode::NOT_FOUND,
            ApiError::Upstream { status, .. } => StatusCode::from_u16(*status)
                .ok()
                .filter(|s| s.is_client_error() || s.is_server_error())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            ApiError::Network(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Short label for metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::MissingInput => "missing_input",
            ApiError::UnrecognizedUrl => "unrecognized_url",
            ApiError::InvalidSpeeds(_) => "invalid_speeds",
            ApiError::UpstreamNotFound => "upstream_not_found",
            ApiError::Upstream { .. } => "upstream_error",
            ApiError::Network(_) => "network_error",
        }
    }
}

impl From<YoutubeError> for ApiError {
    fn from(err: YoutubeError) -> Self {
        match err {
            YoutubeError::NotFound(_) => ApiError::UpstreamNotFound,
            YoutubeError::Api { status, message } => ApiError::Upstream { status, message },
            YoutubeError::Network(e) => ApiError::Network(e.to_string()),
            YoutubeError::Json(e) => ApiError::Network(e.to_string()),
        }
    }
}

/// Error body returned to the UI.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        // Display never includes transport details, only the user-facing text
        let body = ErrorResponse {
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
