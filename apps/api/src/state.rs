use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::CompletionBackend;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The completion backend behind a trait object so tests and future
    /// providers can swap it without touching handler code.
    pub llm: Arc<dyn CompletionBackend>,
    pub config: Config,
}
