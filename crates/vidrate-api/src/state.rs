//! Application state.

use std::sync::Arc;

use vidrate_youtube::{YoutubeClient, YoutubeResult};

use crate::config::ApiConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: ApiConfig,
    pub youtube: Arc<YoutubeClient>,
}

impl AppState {
    /// Create new application state.
    pub fn new(config: ApiConfig) -> YoutubeResult<Self> {
        let youtube = YoutubeClient::from_env()?;
        Ok(Self::with_client(config, youtube))
    }

    /// Create state around an already configured client.
    pub fn with_client(config: ApiConfig, youtube: YoutubeClient) -> Self {
        Self {
            config,
            youtube: Arc::new(youtube),
        }
    }
}
