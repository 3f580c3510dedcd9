use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use utoipa::ToSchema;

// --- Core Session Schemas ---

/// UserSession
///
/// The resolved, normalized session for one bearer token. Written once after a
/// successful permission fetch (or restored from the session store), read by
/// the menu deriver and the route access checker. The permission list is
/// guaranteed normalized (plain non-empty strings, no duplicates) by the
/// session layer before this struct is constructed.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct UserSession {
    /// Flat capability strings (e.g. "clients", "expenses_review"); "*" grants everything.
    pub permissions: Vec<String>,
    /// Coarse user category ('admin', 'manager', 'sales', ...). Only used for the
    /// dashboard display rewrite, never for access decisions.
    pub role: String,
    /// Human-readable name shown in the portal header.
    pub display_name: String,
    /// When this session was established (login or permission fetch).
    #[ts(type = "string")]
    pub established_at: DateTime<Utc>,
}

/// PermissionsResponse
///
/// Wire shape of the upstream `GET /auth/user-permissions` endpoint. This is the
/// only place the raw, unvalidated permission list enters the system; the session
/// layer normalizes it before anything downstream sees it.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct PermissionsResponse {
    pub permissions: Vec<String>,
    pub role: String,
    pub display_name: String,
}

// --- Navigation Schemas (Output) ---

/// MenuItem
///
/// One navigable entry in a derived menu group. A copy of the compiled-in
/// configuration record, possibly rewritten (dashboard entry for non-admins).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct MenuItem {
    /// Display label shown in the sidebar.
    pub text: String,
    /// The single permission string gating this entry.
    pub permission: String,
    /// Front-end route this entry navigates to.
    pub path: String,
    /// Accent color used by the sidebar renderer.
    pub color: String,
}

/// MenuSet
///
/// The four fixed navigation sections, each filtered down to what the session's
/// permissions allow. Relative order within each group matches the static
/// configuration (stable filter, no re-sort).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct MenuSet {
    pub main_menu: Vec<MenuItem>,
    pub expenses_menu: Vec<MenuItem>,
    pub account_menu: Vec<MenuItem>,
    pub company_menu: Vec<MenuItem>,
}

/// AccessCheckResponse
///
/// Output schema for the route guard endpoint (GET /access/check).
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct AccessCheckResponse {
    /// The route that was checked, echoed back for client-side correlation.
    pub route: String,
    /// The access decision. False for unknown routes (fail closed).
    pub allowed: bool,
}

/// SessionProfile
///
/// Output schema for the authenticated user's profile (GET /me). The front-end
/// uses this to seed its own session store after login.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct SessionProfile {
    pub role: String,
    pub display_name: String,
    pub permissions: Vec<String>,
}

// --- Map Collaborator Boundary ---

/// MapPoint
///
/// The boundary shape consumed by the map-rendering collaborator (location and
/// attendance visualizations). This service only defines the contract; it never
/// renders anything.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct MapPoint {
    pub latitude: f64,
    pub longitude: f64,
    /// Marker label (e.g. an employee or client name).
    pub label: String,
}
