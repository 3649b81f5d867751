//! Environment variable configuration tests
//!
//! These tests modify environment variables and must run sequentially:
//!
//! ```bash
//! cargo test -p uicb-infrastructure --test unit config_env -- --test-threads=1 --ignored
//! ```

use std::env;
use std::path::PathBuf;

use tempfile::TempDir;
use uicb_infrastructure::config::ConfigLoader;

/// Helper to set env var safely
fn set_env(key: &str, value: &str) {
    // SAFETY: Tests must run with --test-threads=1
    unsafe {
        env::set_var(key, value);
    }
}

/// Helper to remove env var safely
fn remove_env(key: &str) {
    // SAFETY: Tests must run with --test-threads=1
    unsafe {
        env::remove_var(key);
    }
}

#[test]
#[ignore = "requires --test-threads=1 due to env var mutations"]
fn test_nested_env_keys_keep_underscores() {
    let temp_dir = TempDir::new().expect("temp dir");
    set_env("UICB_CATALOG__BASE_DIR", "/from/env");
    set_env("UICB_CATALOG__STRICT_SCAN", "true");

    let config = ConfigLoader::new()
        .with_config_path(temp_dir.path().join("absent.toml"))
        .load()
        .expect("Should load config");

    remove_env("UICB_CATALOG__BASE_DIR");
    remove_env("UICB_CATALOG__STRICT_SCAN");

    assert_eq!(config.catalog.base_dir, PathBuf::from("/from/env"));
    assert!(config.catalog.strict_scan);
}

#[test]
#[ignore = "requires --test-threads=1 due to env var mutations"]
fn test_env_overrides_file() {
    let temp_dir = TempDir::new().expect("temp dir");
    let config_path = temp_dir.path().join("uicb.toml");
    std::fs::write(&config_path, "[logging]\nlevel = \"warn\"\n").expect("write config");
    set_env("UICB_LOGGING__LEVEL", "debug");

    let config = ConfigLoader::new()
        .with_config_path(&config_path)
        .load()
        .expect("Should load config");

    remove_env("UICB_LOGGING__LEVEL");

    assert_eq!(config.logging.level, "debug");
}

#[test]
#[ignore = "requires --test-threads=1 due to env var mutations"]
fn test_custom_env_prefix() {
    let temp_dir = TempDir::new().expect("temp dir");
    set_env("UICBTEST_SERVER__NAME", "custom-name");

    let config = ConfigLoader::new()
        .with_env_prefix("UICBTEST")
        .with_config_path(temp_dir.path().join("absent.toml"))
        .load()
        .expect("Should load config");

    remove_env("UICBTEST_SERVER__NAME");

    assert_eq!(config.server.name, "custom-name");
}
