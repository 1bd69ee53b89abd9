//! Axum HTTP API server.
//!
//! Serves video lookups backed by the YouTube Data API, plus watch times at
//! common playback speeds, health checks and Prometheus metrics.

pub mod config;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod middleware;
pub mod routes;
pub mod state;

pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
pub use routes::create_router;
pub use state::AppState;
