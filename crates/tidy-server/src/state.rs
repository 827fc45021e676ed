//! Application state shared across all handlers.

use std::sync::Arc;
use std::time::Instant;

use tidy_core::TidyConfig;
use tidy_css::CssPipeline;
use tidy_session::SessionManager;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: TidyConfig,
    pub pipeline: CssPipeline,
    pub sessions: Arc<SessionManager>,
    pub start_time: Instant,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_config(TidyConfig::default())
    }

    pub fn with_config(config: TidyConfig) -> Self {
        Self {
            pipeline: CssPipeline::new(config.css.auto_correct),
            sessions: Arc::new(SessionManager::new(config.clone())),
            config,
            start_time: Instant::now(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
