use axum::{
    extract::{FromRef, FromRequestParts},
    http::{StatusCode, header, request::Parts},
};
use chrono::Utc;

use crate::{
    config::{AppConfig, Env},
    models::UserSession,
    session::{PermissionsState, SessionState, normalize_permissions, resolve_session},
};

/// AuthSession Extractor Result
///
/// The resolved session of an authenticated request, paired with the bearer
/// token it was resolved from. Handlers use the session for menu derivation
/// and access checks, and the token for session-lifecycle operations (logout).
#[derive(Debug, Clone)]
pub struct AuthSession {
    /// The opaque bearer token presented by the client. Never validated locally;
    /// the upstream permissions backend is the authority on what it means.
    pub token: String,
    /// The normalized session: permissions, role, display name.
    pub session: UserSession,
}

/// AuthSession Extractor Implementation
///
/// Implements Axum's FromRequestParts trait, making AuthSession usable as a
/// function argument in any authenticated handler. This keeps session
/// resolution (extractor) cleanly separated from business logic (the handler).
///
/// The process:
/// 1. Dependency Resolution: Session store, permissions client, and AppConfig
///    from the application state.
/// 2. Local Bypass: Development-time sessions fabricated from the
///    'x-permissions' / 'x-role' headers, guarded by the Env check.
/// 3. Token Extraction: Standard Bearer token from the Authorization header.
/// 4. Session Resolution: Persisted store first, permissions backend on miss.
///
/// Rejection: Returns StatusCode::UNAUTHORIZED (401) on any failure. Absence
/// of a resolvable session always fails closed.
impl<S> FromRequestParts<S> for AuthSession
where
    S: Send + Sync,
    // Allows the extractor to pull the session store from the app state.
    SessionState: FromRef<S>,
    // Allows the extractor to pull the permissions backend client.
    PermissionsState: FromRef<S>,
    // Allows the extractor to pull the AppConfig (for the Env check).
    AppConfig: FromRef<S>,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        // 1. Dependency Resolution
        let store = SessionState::from_ref(state);
        let api = PermissionsState::from_ref(state);
        let config = AppConfig::from_ref(state);

        // 2. Local Development Bypass Check
        // In Env::Local, a session can be fabricated directly from headers:
        // 'x-permissions' carries a comma-separated permission list and the
        // optional 'x-role' names the role. This accelerates front-end
        // development but is guarded by the Env check.
        if config.env == Env::Local {
            if let Some(perms_header) = parts.headers.get("x-permissions") {
                if let Ok(raw) = perms_header.to_str() {
                    let permissions = normalize_permissions(
                        raw.split(',').map(|p| p.to_string()).collect(),
                    );
                    let role = parts
                        .headers
                        .get("x-role")
                        .and_then(|value| value.to_str().ok())
                        .unwrap_or("sales")
                        .to_string();

                    return Ok(AuthSession {
                        token: "dev-bypass".to_string(),
                        session: UserSession {
                            permissions,
                            role,
                            display_name: "Dev Bypass".to_string(),
                            established_at: Utc::now(),
                        },
                    });
                }
            }
        }
        // If Env is Production, or no bypass header was supplied, execution
        // falls through to the standard bearer-token resolution flow.

        // 3. Token Extraction
        // Retrieve the Authorization header and ensure it is prefixed with "Bearer ".
        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or(StatusCode::UNAUTHORIZED)?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or(StatusCode::UNAUTHORIZED)?;

        // 4. Session Resolution (store first, backend on miss)
        // If neither source yields a session, the request fails closed with 401.
        let session = resolve_session(store.as_ref(), api.as_ref(), token)
            .await
            .ok_or(StatusCode::UNAUTHORIZED)?;

        Ok(AuthSession {
            token: token.to_string(),
            session,
        })
    }
}
