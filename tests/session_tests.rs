use chrono::Utc;
use ops_portal::models::UserSession;
use ops_portal::session::{
    MemorySessionStore, MockPermissionsApi, SessionStore, normalize_permissions, resolve_session,
};

fn seeded_session(permissions: &[&str], role: &str) -> UserSession {
    UserSession {
        permissions: permissions.iter().map(|p| p.to_string()).collect(),
        role: role.to_string(),
        display_name: "Seeded".to_string(),
        established_at: Utc::now(),
    }
}

// --- Normalization Boundary ---

#[test]
fn test_normalize_drops_empty_and_whitespace_entries() {
    let raw = vec![
        "clients".to_string(),
        "".to_string(),
        "   ".to_string(),
        "projects".to_string(),
    ];
    assert_eq!(normalize_permissions(raw), vec!["clients", "projects"]);
}

#[test]
fn test_normalize_dedupes_preserving_first_seen_order() {
    let raw = vec![
        "expenses_view".to_string(),
        "clients".to_string(),
        "expenses_view".to_string(),
        "clients".to_string(),
    ];
    assert_eq!(normalize_permissions(raw), vec!["expenses_view", "clients"]);
}

#[test]
fn test_normalize_trims_surrounding_whitespace() {
    // Boundary hygiene for comma-split header input in the dev bypass.
    let raw = vec![" clients ".to_string(), "clients".to_string()];
    assert_eq!(normalize_permissions(raw), vec!["clients"]);
}

// --- Resolution Flow ---

#[tokio::test]
async fn test_persisted_session_is_authoritative() {
    let store = MemorySessionStore::new();
    store.put("tok-1", seeded_session(&["clients"], "sales")).await;

    // The backend would grant more, but a store hit must win without a fetch.
    let api = MockPermissionsApi::granting(&["*"], "admin", "Backend");

    let session = resolve_session(&store, &api, "tok-1")
        .await
        .expect("seeded session must resolve");

    assert_eq!(session.permissions, vec!["clients"]);
    assert_eq!(session.role, "sales");
    assert_eq!(api.call_count(), 0);
}

#[tokio::test]
async fn test_store_miss_fetches_normalizes_and_persists() {
    let store = MemorySessionStore::new();
    let api = MockPermissionsApi::granting(
        &["clients", "clients", "", "expenses_view"],
        "sales",
        "Ada",
    );

    let session = resolve_session(&store, &api, "tok-2")
        .await
        .expect("fetch must establish a session");

    // Normalized at the boundary before anything downstream sees it.
    assert_eq!(session.permissions, vec!["clients", "expenses_view"]);
    assert_eq!(session.display_name, "Ada");

    // Persisted for future loads: a second resolve is a store hit.
    let again = resolve_session(&store, &api, "tok-2")
        .await
        .expect("persisted session must resolve");
    assert_eq!(again.permissions, session.permissions);
    assert_eq!(api.call_count(), 1);
}

#[tokio::test]
async fn test_fetch_failure_yields_no_session() {
    // Fail closed: an unreachable backend means no permissions, not an error.
    let store = MemorySessionStore::new();
    let api = MockPermissionsApi::unavailable();

    assert!(resolve_session(&store, &api, "tok-3").await.is_none());
    // Nothing was persisted either.
    assert!(store.get("tok-3").await.is_none());
}

#[tokio::test]
async fn test_refetch_overwrite_is_idempotent() {
    let store = MemorySessionStore::new();

    store.put("tok-4", seeded_session(&["clients"], "sales")).await;
    store.put("tok-4", seeded_session(&["clients"], "sales")).await;

    let session = store.get("tok-4").await.expect("session present");
    assert_eq!(session.permissions, vec!["clients"]);
}

#[tokio::test]
async fn test_remove_destroys_session() {
    let store = MemorySessionStore::new();
    store.put("tok-5", seeded_session(&["*"], "admin")).await;

    store.remove("tok-5").await;
    assert!(store.get("tok-5").await.is_none());

    // Removing an absent token is a no-op, not an error.
    store.remove("tok-5").await;
}

#[tokio::test]
async fn test_tokens_are_isolated() {
    let store = MemorySessionStore::new();
    store.put("alice", seeded_session(&["clients"], "sales")).await;
    store.put("bob", seeded_session(&["*"], "admin")).await;

    assert_eq!(
        store.get("alice").await.expect("alice present").role,
        "sales"
    );
    assert_eq!(store.get("bob").await.expect("bob present").role, "admin");
    assert!(store.get("carol").await.is_none());
}
