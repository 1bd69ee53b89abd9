//! YouTube Data API response types.
//!
//! Only the fields read by the client are modelled; everything else in the
//! payload is ignored.

use serde::Deserialize;
use vidrate_models::VideoDetails;

/// Response of `GET /videos`.
#[derive(Debug, Clone, Deserialize)]
pub struct VideoListResponse {
    #[serde(default)]
    pub items: Vec<VideoItem>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoItem {
    pub snippet: Snippet,
    pub content_details: ContentDetails,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Snippet {
    pub title: String,
    #[serde(default)]
    pub thumbnails: Thumbnails,
}

/// Named thumbnail variants.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Thumbnails {
    pub default: Option<Thumbnail>,
    pub medium: Option<Thumbnail>,
    pub high: Option<Thumbnail>,
}

impl Thumbnails {
    /// Highest resolution variant present: high, then medium, then default.
    pub fn best(&self) -> Option<&str> {
        self.high
            .as_ref()
            .or(self.medium.as_ref())
            .or(self.default.as_ref())
            .map(|t| t.url.as_str())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Thumbnail {
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContentDetails {
    /// ISO-8601 duration, `P0D` for live streams
    #[serde(default)]
    pub duration: String,
}

impl From<VideoItem> for VideoDetails {
    fn from(item: VideoItem) -> Self {
        let thumbnail = item.snippet.thumbnails.best().map(str::to_string);
        VideoDetails {
            title: item.snippet.title,
            thumbnail,
            duration: item.content_details.duration,
        }
    }
}

/// Error envelope returned with non-2xx statuses.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorResponse {
    pub error: Option<ErrorBody>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    pub code: Option<u16>,
    pub message: Option<String>,
}

impl ErrorResponse {
    /// Extract the message from a raw error body, if there is one.
    pub fn message_from(body: &[u8]) -> Option<String> {
        serde_json::from_slice::<ErrorResponse>(body)
            .ok()
            .and_then(|e| e.error)
            .and_then(|e| e.message)
    }
}
