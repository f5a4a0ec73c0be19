pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::generation::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Generation API
        .route("/api/v1/prompts", post(handlers::handle_generate))
        .route("/api/v1/prompts/export", post(handlers::handle_export))
        .route("/api/v1/topics/surprise", get(handlers::handle_surprise))
        .with_state(state)
}
