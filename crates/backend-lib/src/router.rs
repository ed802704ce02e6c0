// ============================
// backend-lib/src/router.rs
// ============================
//! HTTP router.
use axum::{middleware, routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware::{cors_layer, require_valid_request, security_headers};
use crate::AppState;

/// Create the router: a single `GET /`. The request gate wraps the whole
/// router, fallback included, so any path or method without a valid key gets
/// 401. Security headers, CORS and request tracing apply to every response.
pub fn create_router(state: AppState) -> Router {
    let cors = cors_layer(&state.settings);

    Router::new()
        .route("/", get(handlers::generate_passwords))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            require_valid_request,
        ))
        .layer(middleware::from_fn(security_headers))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
