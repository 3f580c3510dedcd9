use crate::{AppState, handlers};
use axum::{
    Router,
    routing::{get, post},
};

/// Authenticated Router Module
///
/// Defines the routes accessible to any client that has resolved a session.
/// This module carries the whole access-control surface: session profile,
/// derived navigation, and the route guard.
///
/// Access Control Strategy:
/// Every handler in this module relies on the `AuthSession` extractor middleware
/// being present on the router layer above this module. This guarantees that all
/// handlers receive a validated, normalized session; handlers never see a raw
/// permission list straight from the wire.
pub fn authenticated_routes() -> Router<AppState> {
    Router::<AppState>::new()
        // GET /me
        // Retrieves the currently authenticated user's session profile
        // (role, display name, permission list).
        .route("/me", get(handlers::get_me))
        // GET /menu
        // Derives the four visible navigation groups (main, expenses, account,
        // company) from the session's permission list and role. Items whose
        // permission is absent are dropped silently.
        .route("/menu", get(handlers::get_menu))
        // GET /access/check?route=/expenses
        // The route guard: evaluates whether the session may navigate to the
        // given front-end path. Unknown routes answer `allowed: false`
        // (fail closed) rather than erroring.
        .route("/access/check", get(handlers::check_access))
        // POST /logout
        // Destroys the persisted session for the presented bearer token.
        .route("/logout", post(handlers::logout))
}
