use std::sync::Arc;

use sqlx::PgPool;

use crate::analysis::AtsEngine;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    /// Scoring engine. Pattern tables compile once at startup; after that it
    /// is pure and lock-free.
    pub engine: Arc<AtsEngine>,
}
