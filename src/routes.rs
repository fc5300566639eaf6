//! Router configuration.
//!
//! # Route Structure
//!
//! - `POST /v1/shortener`  - Create a short link
//! - `POST /api/shorten`   - Alias used by the bundled frontend
//! - `GET  /r/{code}`      - Redirect to the destination URL
//! - `GET  /v1/links`      - List all links, newest first
//! - `GET  /health`        - Component health report
//! - fallback              - Static frontend served from `web/`
//!
//! Wrong-method requests on registered paths get 405 from axum's method
//! routing.

use axum::routing::{get, post};
use axum::Router;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::api::handlers::{
    empty_code_handler, health_handler, links_handler, redirect_handler, shorten_handler,
};
use crate::state::AppState;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/v1/shortener", post(shorten_handler))
        .route("/api/shorten", post(shorten_handler))
        .route("/v1/links", get(links_handler))
        .route("/r/{code}", get(redirect_handler))
        .route("/r/", get(empty_code_handler))
        .route("/health", get(health_handler))
        .fallback_service(ServeDir::new("web"))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
