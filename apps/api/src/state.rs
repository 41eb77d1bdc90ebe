use std::sync::Arc;

use crate::config::Config;
use crate::preview::session::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// In-memory live-preview sessions. Nothing here outlives the process.
    pub sessions: Arc<SessionStore>,
}
