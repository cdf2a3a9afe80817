pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers as analysis;
use crate::catalog::handlers as catalog;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Role API
        .route("/api/v1/roles", get(catalog::handle_list_roles))
        .route("/api/v1/roles/:id", get(catalog::handle_get_role))
        // Analysis API
        .route("/api/v1/analyze", post(analysis::handle_analyze))
        .route("/api/v1/extract", post(analysis::handle_extract))
        .layer(DefaultBodyLimit::max(upload_limit))
        .with_state(state)
}
