use ops_portal::config::{AppConfig, Env};
use serial_test::serial;
use std::env;
use std::time::Duration;

// These tests mutate process-wide environment variables, so they must not run
// concurrently with each other.

fn clear_config_env() {
    unsafe {
        env::remove_var("APP_ENV");
        env::remove_var("BIND_ADDR");
        env::remove_var("PERMISSIONS_API_URL");
        env::remove_var("PERMISSIONS_API_TIMEOUT_SECS");
    }
}

#[test]
#[serial]
fn test_load_defaults_to_local() {
    clear_config_env();

    let config = AppConfig::load();
    assert_eq!(config.env, Env::Local);
    assert_eq!(config.bind_addr, "0.0.0.0:3000");
    assert_eq!(config.permissions_api_url, "http://localhost:8080");
    assert_eq!(config.permissions_api_timeout, Duration::from_secs(5));
}

#[test]
#[serial]
fn test_load_reads_explicit_settings() {
    clear_config_env();
    unsafe {
        env::set_var("APP_ENV", "production");
        env::set_var("BIND_ADDR", "0.0.0.0:8443");
        env::set_var("PERMISSIONS_API_URL", "https://auth.example.com");
        env::set_var("PERMISSIONS_API_TIMEOUT_SECS", "2");
    }

    let config = AppConfig::load();
    assert_eq!(config.env, Env::Production);
    assert_eq!(config.bind_addr, "0.0.0.0:8443");
    assert_eq!(config.permissions_api_url, "https://auth.example.com");
    assert_eq!(config.permissions_api_timeout, Duration::from_secs(2));

    clear_config_env();
}

#[test]
#[serial]
fn test_unparseable_timeout_falls_back() {
    clear_config_env();
    unsafe {
        env::set_var("PERMISSIONS_API_TIMEOUT_SECS", "soon");
    }

    let config = AppConfig::load();
    assert_eq!(config.permissions_api_timeout, Duration::from_secs(5));

    clear_config_env();
}

#[test]
fn test_default_is_local_and_non_panicking() {
    let config = AppConfig::default();
    assert_eq!(config.env, Env::Local);
    assert!(!config.permissions_api_url.is_empty());
}
