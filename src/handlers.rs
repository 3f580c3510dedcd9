use crate::{
    access::{has_route_access, required_permission},
    auth::AuthSession,
    models::{AccessCheckResponse, MenuSet, SessionProfile},
    nav::generate_menu_items,
    session::SessionState,
};
use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use serde::Deserialize;

// --- Query Structs ---

/// AccessCheckParams
///
/// Query parameters for the route guard endpoint (GET /access/check). Bound by
/// Axum's Query extractor; the route is the front-end path the client is about
/// to navigate to.
#[derive(Deserialize, utoipa::IntoParams)]
pub struct AccessCheckParams {
    /// The front-end route to check, e.g. "/expenses".
    pub route: String,
}

// --- Handlers ---

/// get_menu
///
/// [Authenticated Route] Derives the four visible navigation groups for the
/// requesting session. Pure derivation over the compiled-in menu tables, using
/// the same filter the route guard agrees with, so a visible entry is always a
/// navigable entry.
///
/// The menu is not reactive: after a session change (fresh login, permission
/// refetch) the front-end simply requests it again.
#[utoipa::path(
    get,
    path = "/menu",
    responses((status = 200, description = "Visible navigation groups", body = MenuSet))
)]
pub async fn get_menu(AuthSession { session, .. }: AuthSession) -> Json<MenuSet> {
    let menu = generate_menu_items(&session.permissions, &session.role);
    Json(menu)
}

/// check_access
///
/// [Authenticated Route] Evaluates the route guard for a single front-end path.
/// Stateless and idempotent; the front-end calls this before completing a
/// navigation. Unknown routes are denied (fail closed), which is a designed
/// default-deny answer, not an error, hence 200 with `allowed: false` rather
/// than a 4xx.
#[utoipa::path(
    get,
    path = "/access/check",
    params(AccessCheckParams),
    responses((status = 200, description = "Access decision", body = AccessCheckResponse))
)]
pub async fn check_access(
    AuthSession { session, .. }: AuthSession,
    Query(params): Query<AccessCheckParams>,
) -> Json<AccessCheckResponse> {
    let allowed = has_route_access(&params.route, &session.permissions);

    if !allowed {
        tracing::debug!(
            route = %params.route,
            required = required_permission(&params.route).unwrap_or("<untabled>"),
            role = %session.role,
            "route access denied"
        );
    }

    Json(AccessCheckResponse {
        route: params.route,
        allowed,
    })
}

/// get_me
///
/// [Authenticated Route] Provides the authenticated user's session profile.
/// The front-end uses this to seed its header (display name) and to mirror the
/// permission list into its own session storage.
#[utoipa::path(
    get,
    path = "/me",
    responses((status = 200, description = "Session profile", body = SessionProfile))
)]
pub async fn get_me(AuthSession { session, .. }: AuthSession) -> Json<SessionProfile> {
    Json(SessionProfile {
        role: session.role,
        display_name: session.display_name,
        permissions: session.permissions,
    })
}

/// logout
///
/// [Authenticated Route] Destroys the persisted session for the presented
/// token. The next request with the same token resolves from the permissions
/// backend again (or fails closed if the backend no longer recognizes it).
#[utoipa::path(
    post,
    path = "/logout",
    responses((status = 204, description = "Session removed"))
)]
pub async fn logout(
    AuthSession { token, .. }: AuthSession,
    State(store): State<SessionState>,
) -> StatusCode {
    store.remove(&token).await;
    StatusCode::NO_CONTENT
}
