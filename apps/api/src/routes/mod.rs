pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::state::AppState;

/// Upload cap for multipart bodies.
const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Analysis API
        .route("/api/v1/analyses", post(handlers::handle_analyze))
        .route("/api/v1/analyses/history", get(handlers::handle_history))
        .route("/api/v1/analyses/:id", get(handlers::handle_get_analysis))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .with_state(state)
}
