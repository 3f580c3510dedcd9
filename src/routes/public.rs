use crate::AppState;
use axum::{Router, routing::get};

/// Public Router Module
///
/// Defines endpoints that are **unauthenticated** and accessible to any client.
/// Everything carrying session or navigation data lives behind the
/// authenticated router; the public surface is deliberately minimal so that an
/// unauthenticated client learns nothing about the menu configuration or the
/// route guard table.
pub fn public_routes() -> Router<AppState> {
    Router::new()
        // GET /health
        // A simple, unauthenticated endpoint used for monitoring and load balancer checks.
        // Returns "ok" immediately to verify the service is running and responsive.
        .route("/health", get(|| async { "ok" }))
}
