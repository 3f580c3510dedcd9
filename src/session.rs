use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::models::{PermissionsResponse, UserSession};

// 1. SessionStore Contract

/// SessionStore
///
/// Abstract contract for the persisted session layer: an opaque key-value store
/// from bearer token to resolved session. A store hit is authoritative — the
/// upstream permissions backend is only consulted on a miss. The trait boundary
/// lets tests swap in a pre-seeded store without any persistence running.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Returns the persisted session for a token, if one exists.
    async fn get(&self, token: &str) -> Option<UserSession>;

    /// Persists (or overwrites) the session for a token. Overwriting is
    /// idempotent; a superseded fetch needs no rollback.
    async fn put(&self, token: &str, session: UserSession);

    /// Removes the session for a token. Called at logout.
    async fn remove(&self, token: &str);
}

/// SessionState
///
/// The concrete type used to share the session store across the application state.
pub type SessionState = Arc<dyn SessionStore>;

/// MemorySessionStore
///
/// In-process implementation backed by a RwLock'd HashMap. Sessions live for the
/// lifetime of the server process, mirroring the browser-session scope of the
/// front-end's storage: created at login, destroyed at logout or restart.
#[derive(Default)]
pub struct MemorySessionStore {
    sessions: RwLock<HashMap<String, UserSession>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn get(&self, token: &str) -> Option<UserSession> {
        self.sessions.read().await.get(token).cloned()
    }

    async fn put(&self, token: &str, session: UserSession) {
        self.sessions
            .write()
            .await
            .insert(token.to_string(), session);
    }

    async fn remove(&self, token: &str) {
        self.sessions.write().await.remove(token);
    }
}

// 2. PermissionsApi Contract

/// PermissionsApi
///
/// Abstract contract for the upstream permissions backend. The single yielding
/// operation deliberately returns Option rather than Result: a failed fetch
/// (network error, non-2xx, malformed body) means "no permissions available",
/// and every caller's default posture is fail-closed (no menu items, no route
/// access), not an error page.
#[async_trait]
pub trait PermissionsApi: Send + Sync {
    /// Fetches the raw permission payload for a bearer token. None on any failure.
    async fn fetch_permissions(&self, token: &str) -> Option<PermissionsResponse>;
}

/// PermissionsState
///
/// The concrete type used to share the permissions client across the application state.
pub type PermissionsState = Arc<dyn PermissionsApi>;

/// HttpPermissionsClient
///
/// The real implementation: calls `GET {base}/auth/user-permissions` with the
/// session's bearer token. All failure modes collapse to None, with the cause
/// logged for operators.
#[derive(Clone)]
pub struct HttpPermissionsClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpPermissionsClient {
    /// Constructs the client against the configured backend base URL. The
    /// timeout bounds session resolution latency on an unresponsive upstream.
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl PermissionsApi for HttpPermissionsClient {
    async fn fetch_permissions(&self, token: &str) -> Option<PermissionsResponse> {
        let url = format!("{}/auth/user-permissions", self.base_url);

        let response = match self.client.get(&url).bearer_auth(token).send().await {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!("permissions fetch failed: {:?}", e);
                return None;
            }
        };

        if !response.status().is_success() {
            // Any non-2xx is treated as "no permissions available", not an error.
            tracing::warn!("permissions fetch returned {}", response.status());
            return None;
        }

        match response.json::<PermissionsResponse>().await {
            Ok(payload) => Some(payload),
            Err(e) => {
                tracing::warn!("permissions payload malformed: {:?}", e);
                None
            }
        }
    }
}

// 3. The Mock Implementation (For Tests)

/// MockPermissionsApi
///
/// A mock implementation of `PermissionsApi` used for unit and integration
/// testing. It answers every token with a canned payload (or simulated failure)
/// and counts fetches, so tests can assert that a persisted session short-circuits
/// the upstream call.
pub struct MockPermissionsApi {
    /// The canned payload; None simulates an unreachable/denying backend.
    pub response: Option<PermissionsResponse>,
    /// Number of fetch_permissions calls observed.
    pub calls: std::sync::atomic::AtomicUsize,
}

impl MockPermissionsApi {
    pub fn granting(permissions: &[&str], role: &str, display_name: &str) -> Self {
        Self {
            response: Some(PermissionsResponse {
                permissions: permissions.iter().map(|p| p.to_string()).collect(),
                role: role.to_string(),
                display_name: display_name.to_string(),
            }),
            calls: std::sync::atomic::AtomicUsize::new(0),
        }
    }

    pub fn unavailable() -> Self {
        Self {
            response: None,
            calls: std::sync::atomic::AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(std::sync::atomic::Ordering::SeqCst)
    }
}

#[async_trait]
impl PermissionsApi for MockPermissionsApi {
    async fn fetch_permissions(&self, _token: &str) -> Option<PermissionsResponse> {
        self.calls.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        self.response.clone()
    }
}

// 4. Boundary Normalization & Resolution

/// normalize_permissions
///
/// Validates the loosely-typed permission list arriving from the wire before it
/// reaches the pure derivation functions: empty/whitespace entries are dropped
/// and duplicates removed, preserving first-seen order. Downstream contracts
/// (plain non-empty strings, set semantics) are guaranteed here, not assumed.
pub fn normalize_permissions(raw: Vec<String>) -> Vec<String> {
    let mut seen: Vec<String> = Vec::with_capacity(raw.len());
    for entry in raw {
        let trimmed = entry.trim();
        if trimmed.is_empty() {
            continue;
        }
        if !seen.iter().any(|p| p == trimmed) {
            seen.push(trimmed.to_string());
        }
    }
    seen
}

/// resolve_session
///
/// The session establishment flow. Two sources, tried in order:
/// 1. The persisted store, authoritative if present.
/// 2. The upstream permissions endpoint; on success the normalized result is
///    persisted for future loads.
///
/// Returns None when neither source yields a session. Callers must treat that
/// as "show nothing / allow nothing", never as a fatal error.
pub async fn resolve_session(
    store: &dyn SessionStore,
    api: &dyn PermissionsApi,
    token: &str,
) -> Option<UserSession> {
    if let Some(session) = store.get(token).await {
        return Some(session);
    }

    let payload = api.fetch_permissions(token).await?;

    let session = UserSession {
        permissions: normalize_permissions(payload.permissions),
        role: payload.role,
        display_name: payload.display_name,
        established_at: Utc::now(),
    };

    store.put(token, session.clone()).await;
    tracing::info!(role = %session.role, "session established from permissions backend");

    Some(session)
}
