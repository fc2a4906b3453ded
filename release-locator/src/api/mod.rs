use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::service::release::latest_release_handler;
use crate::utils::state::AppState;

/// There is no routing: every path and method lands on the same handler.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .fallback(latest_release_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
