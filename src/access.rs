use crate::nav::has_full_access;

// --- Static Route Guard Table ---

/// Route → permission table.
///
/// Stored explicitly in the route→permission direction (injective by
/// construction: each route appears exactly once), so lookups never depend on a
/// reverse scan over a permission→path map being one-to-one. Two routes may
/// legitimately share a guarding permission, as `/reports` and `/dashboard` do.
///
/// Every path in the nav module's menu tables must have an entry here;
/// otherwise a user could see a menu entry they are not allowed to open.
pub const ROUTE_PERMISSIONS: &[(&str, &str)] = &[
    ("/reports", "dashboard"),
    ("/dashboard", "dashboard"),
    ("/clients", "clients"),
    ("/projects", "projects"),
    ("/team", "team"),
    ("/meetings", "meetings"),
    ("/expenses", "expenses_view"),
    ("/review-expenses", "expenses_review"),
    ("/expense-categories", "categories"),
    ("/my-leaves", "my_leaves"),
    ("/attendance", "attendance"),
    ("/employees", "employees"),
    ("/leaves", "leaves"),
    ("/holidays", "holidays"),
];

/// has_route_access
///
/// Stateless access predicate evaluated per navigation attempt. Decision order:
/// 1. The wildcard `"*"` short-circuits to allow, before any table lookup
///    (so even untabled routes are reachable for unrestricted sessions).
/// 2. A route absent from the table is denied — unknown routes are
///    inaccessible by default (fail closed).
/// 3. Otherwise the session must hold the guarding permission, exact string
///    match. Expense sub-permissions get no prefix treatment here either.
///
/// Idempotent: same inputs always give the same answer; there is no
/// pending/denied/granted state to track.
pub fn has_route_access(route: &str, permissions: &[String]) -> bool {
    if has_full_access(permissions) {
        return true;
    }

    match ROUTE_PERMISSIONS.iter().find(|(path, _)| *path == route) {
        Some((_, required)) => permissions.iter().any(|p| p == required),
        None => false,
    }
}

/// required_permission
///
/// The permission string guarding a route, if the route is known. Exposed for
/// diagnostics (the access-check handler logs it on denial).
pub fn required_permission(route: &str) -> Option<&'static str> {
    ROUTE_PERMISSIONS
        .iter()
        .find(|(path, _)| *path == route)
        .map(|(_, required)| *required)
}
