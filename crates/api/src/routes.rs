use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};

/// Creates all API routes with state
pub fn create_api_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/hostname", get(handlers::get_hostname))
        .route("/callerinfo", get(handlers::get_caller_info))
        .with_state(state)
}
