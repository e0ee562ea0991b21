//! Application state shared across all route handlers.

use std::sync::Arc;
use std::time::Instant;

use mindscope_chat::ChatOrchestrator;
use mindscope_core::config::MindscopeConfig;

/// Shared application state.
///
/// Cloned per request; the session itself lives inside the orchestrator.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration, fixed after startup.
    pub config: Arc<MindscopeConfig>,
    /// Owner of the chat session.
    pub orchestrator: Arc<ChatOrchestrator>,
    /// Server start time for uptime calculation.
    pub start_time: Instant,
}

impl AppState {
    pub fn new(config: MindscopeConfig, orchestrator: ChatOrchestrator) -> Self {
        Self {
            config: Arc::new(config),
            orchestrator: Arc::new(orchestrator),
            start_time: Instant::now(),
        }
    }
}
