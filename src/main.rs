use ops_portal::{
    AppState,
    config::{AppConfig, Env},
    create_router,
    session::{HttpPermissionsClient, MemorySessionStore, PermissionsState, SessionState},
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// main
///
/// The asynchronous entry point for the application, responsible for initializing
/// all core components: Configuration, Logging, Session Store, Permissions Client,
/// and the HTTP Server.
#[tokio::main]
async fn main() {
    // 1. Configuration & Environment Loading (Fail-Fast)
    // Loads .env file settings before configuration can be read.
    dotenv::dotenv().ok();
    // AppConfig::load() implements the fail-fast principle for missing Production settings.
    let config = AppConfig::load();

    // 2. Logging Filter Setup
    // Sets the default log level. It prioritizes the RUST_LOG environment variable,
    // falling back to sensible defaults for local development.
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "ops_portal=debug,tower_http=info,axum=trace".into());

    // 3. Initialize Logging based on Environment
    // The structured logging format is dynamically selected based on the APP_ENV.
    match config.env {
        Env::Local => {
            // LOCAL: Pretty print output for human readability during local debugging.
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().pretty())
                .init();
        }
        Env::Production => {
            // PROD: JSON format output for ingestion by centralized log aggregators.
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
    }

    tracing::info!("Application starting in {:?} mode", config.env);

    // 4. Session Store Initialization
    // In-process token→session store, wrapped in an Arc for thread-safe sharing.
    // Sessions live for the server process lifetime: established at first
    // resolution, destroyed at logout.
    let sessions = Arc::new(MemorySessionStore::new()) as SessionState;

    // 5. Permissions Client Initialization
    // The reqwest-backed client for the upstream GET /auth/user-permissions
    // endpoint, bounded by the configured timeout.
    let permissions_client =
        HttpPermissionsClient::new(&config.permissions_api_url, config.permissions_api_timeout);
    let permissions_api = Arc::new(permissions_client) as PermissionsState;

    tracing::info!("Permissions backend: {}", config.permissions_api_url);

    // 6. Unified State Assembly
    // Bundles all initialized dependencies into the shared AppState.
    let app_state = AppState {
        sessions,
        permissions_api,
        config: config.clone(),
    };

    // 7. Router and Server Startup
    let app = create_router(app_state);

    // Binds the TCP listener and initiates the HTTP server.
    let listener = TcpListener::bind(&config.bind_addr)
        .await
        .expect("FATAL: Failed to bind listener. Check BIND_ADDR.");

    tracing::info!("HTTP server bound successfully.");
    tracing::info!("Listening on {}", config.bind_addr);
    tracing::info!("API Documentation (Swagger UI) available at: /swagger-ui");

    // The long-running Axum server process.
    axum::serve(listener, app).await.unwrap();
}
