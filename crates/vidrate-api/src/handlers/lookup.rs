//! Video lookup handlers.
//!
//! `GET /lookup?url=` proxies a single metadata lookup to YouTube and returns
//! `{title, thumbnail, duration}`. `GET /watch-time?url=&speeds=` performs the
//! same lookup and adds the original length and per-speed watch times.

use std::time::Instant;

use axum::extract::{Query, State};
use axum::Json;
use tracing::{info, warn};
use vidrate_models::speed::parse_speed_list;
use vidrate_models::{extract_video_ref, SpeedMultiplier, VideoDetails, VideoRef, WatchTimeReport};

use crate::error::{ApiError, ApiResult};
use crate::metrics;
use crate::state::AppState;

/// Query string of the lookup endpoints.
#[derive(Debug, Default, PartialEq)]
pub struct LookupQuery {
    /// Raw user-pasted video URL
    pub url: Option<String>,
    /// Comma-separated playback speeds (`/watch-time` only)
    pub speeds: Option<String>,
}

impl LookupQuery {
    /// Build from decoded query pairs. A repeated key keeps its first value.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "url" => &mut query.url,
                "speeds" => &mut query.speeds,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        query
    }
}

/// Resolve the `url` parameter to a video reference.
///
/// Missing and unrecognized URLs are distinct errors so the UI can tell them
/// apart.
pub fn resolve_video_ref(url: Option<&str>) -> ApiResult<VideoRef> {
    let url = url.filter(|u| !u.is_empty()).ok_or(ApiError::MissingInput)?;
    extract_video_ref(url).ok_or(ApiError::UnrecognizedUrl)
}

/// Fetch details for one video, mapping every failure into an [`ApiError`].
async fn fetch_details(state: &AppState, video: &VideoRef) -> ApiResult<VideoDetails> {
    let start = Instant::now();
    let result = state.youtube.fetch_video(video).await;
    let elapsed = start.elapsed().as_secs_f64();

    match result {
        Ok(details) => {
            metrics::record_lookup("ok", elapsed);
            info!(video_id = %video, duration = %details.duration, "Video lookup succeeded");
            Ok(details)
        }
        Err(e) => {
            metrics::record_lookup(e.kind(), elapsed);
            warn!(video_id = %video, error = %e, "Video lookup failed");
            Err(e.into())
        }
    }
}

/// Look up title, thumbnail and duration of a video.
pub async fn lookup(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> ApiResult<Json<VideoDetails>> {
    let query = LookupQuery::from_pairs(pairs);
    let video = resolve_video_ref(query.url.as_deref())?;
    let details = fetch_details(&state, &video).await?;
    Ok(Json(details))
}

/// Look up a video and compute its watch time at each requested speed.
pub async fn watch_time(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> ApiResult<Json<WatchTimeReport>> {
    let query = LookupQuery::from_pairs(pairs);
    let video = resolve_video_ref(query.url.as_deref())?;

    let speeds = match query.speeds.as_deref() {
        Some(raw) => parse_speed_list(raw).map_err(ApiError::InvalidSpeeds)?,
        None => SpeedMultiplier::defaults(),
    };

    let details = fetch_details(&state, &video).await?;
    Ok(Json(details.watch_time_report(&speeds)))
}
