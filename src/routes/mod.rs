/// Router Module Index
///
/// Organizes the application's routing logic into security-segregated modules,
/// enforcing a Defense-in-Depth strategy. This structure ensures that
/// access control is applied explicitly at the module level (via Axum layers),
/// preventing accidental exposure of protected endpoints.

/// Routes accessible to all clients (health checks, no session required).
pub mod public;

/// Routes protected by the `AuthSession` extractor middleware.
/// Requires a resolvable session (persisted or freshly fetched).
pub mod authenticated;
