use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
/// Holds configuration only; documents always travel in the request body.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Config,
}
