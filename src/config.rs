use std::env;
use std::time::Duration;

/// AppConfig
///
/// Holds the application's entire configuration state. This struct is designed to be
/// immutable once loaded, ensuring consistency across all threads and services
/// (e.g., Session Store, Permissions Client). It is pulled into the application state
/// via FromRef, embodying the "immutable AppConfig" part of the Unified State Pattern.
#[derive(Clone)]
pub struct AppConfig {
    // Address the HTTP server binds to.
    pub bind_addr: String,
    // Base URL of the upstream permissions backend (the service answering
    // GET /auth/user-permissions).
    pub permissions_api_url: String,
    // Per-request timeout for the permissions fetch. A slow upstream must not
    // hang session resolution indefinitely.
    pub permissions_api_timeout: Duration,
    // Runtime environment marker. Controls feature activation (e.g., Dev Bypass).
    pub env: Env,
}

/// Env
///
/// Defines the runtime context, used to switch between development utilities
/// (header-based session bypass, pretty logs) and secure, production-grade
/// behavior (bearer-token sessions only, JSON logs).
#[derive(Clone, PartialEq, Debug)]
pub enum Env {
    Local,
    Production,
}

impl Default for AppConfig {
    /// default
    ///
    /// Provides a safe, non-panicking AppConfig instance primarily used for test setup.
    /// This allows us to instantiate the configuration without needing to set environment
    /// variables for lightweight unit or integration testing state scaffolding.
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:3000".to_string(),
            permissions_api_url: "http://localhost:8080".to_string(),
            permissions_api_timeout: Duration::from_secs(5),
            env: Env::Local,
        }
    }
}

impl AppConfig {
    /// load
    ///
    /// The canonical function for initializing the application configuration at startup.
    /// It reads all parameters from environment variables and implements the **fail-fast**
    /// principle.
    ///
    /// # Panics
    /// Panics if a critical environment variable required for the current runtime
    /// environment (especially Production) is not found. This prevents the application
    /// from starting with an incomplete configuration: a portal gateway without a
    /// permissions backend URL could only ever fail closed on every request.
    pub fn load() -> Self {
        let env_str = env::var("APP_ENV").unwrap_or_else(|_| "local".to_string());
        let env = match env_str.as_str() {
            "production" => Env::Production,
            _ => Env::Local,
        };

        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());

        // Permissions API Resolution
        // The production URL is mandatory and must be explicitly set.
        let permissions_api_url = match env {
            Env::Production => env::var("PERMISSIONS_API_URL")
                .expect("FATAL: PERMISSIONS_API_URL must be set in production."),
            // In local, fall back to the conventional docker-compose port.
            _ => env::var("PERMISSIONS_API_URL")
                .unwrap_or_else(|_| "http://localhost:8080".to_string()),
        };

        let permissions_api_timeout = env::var("PERMISSIONS_API_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or_else(|| Duration::from_secs(5));

        Self {
            bind_addr,
            permissions_api_url,
            permissions_api_timeout,
            env,
        }
    }
}
