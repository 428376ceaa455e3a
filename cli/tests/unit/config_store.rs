//! Unit tests for the YAML config store and the config service.
//!
//! Tests that touch `DEVHOST_CONFIG` run serially because the process
//! environment is shared.

#![allow(clippy::expect_used, unsafe_code)]

use std::path::PathBuf;

use devhost_cli::application::ports::ConfigStore;
use devhost_cli::application::services::config_service::{self, ConfigOverrides};
use devhost_cli::domain::{ConfigError, DevhostConfig};
use devhost_cli::infra::config::{CONFIG_ENV, YamlConfigStore};
use serial_test::serial;
use tempfile::TempDir;

#[test]
#[serial]
fn test_config_path_follows_env_override() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("custom.yaml");
    // SAFETY: serialized with every other test touching the environment.
    unsafe { std::env::set_var(CONFIG_ENV, &path) };

    let resolved = YamlConfigStore::default().path().expect("path");

    unsafe { std::env::remove_var(CONFIG_ENV) };
    assert_eq!(resolved, path);
}

#[test]
#[serial]
fn test_config_path_defaults_under_home() {
    unsafe { std::env::remove_var(CONFIG_ENV) };
    let path = YamlConfigStore::default().path().expect("path");
    assert!(path.ends_with(".devhost/config.yaml"), "got {}", path.display());
}

#[test]
fn test_partial_file_fills_in_defaults() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "tld: localhost\n").expect("write");

    let config = YamlConfigStore::with_path(path).load().expect("load");

    assert_eq!(config.tld, "localhost");
    assert_eq!(config.vhost_dir, DevhostConfig::default().vhost_dir);
}

#[test]
fn test_set_value_persists_valid_setting() {
    let dir = TempDir::new().expect("temp dir");
    let store = YamlConfigStore::with_path(dir.path().join("config.yaml"));

    config_service::set_value(&store, "vhost_dir", "/usr/local/etc/nginx/servers").expect("set");

    let reloaded = store.load().expect("load");
    assert_eq!(
        reloaded.vhost_dir,
        PathBuf::from("/usr/local/etc/nginx/servers")
    );
}

#[test]
fn test_set_value_invalid_writes_nothing() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("config.yaml");
    let store = YamlConfigStore::with_path(path.clone());

    let err = config_service::set_value(&store, "colour", "blue").expect_err("should fail");

    assert!(matches!(
        err.downcast_ref::<ConfigError>(),
        Some(ConfigError::UnknownKey { .. })
    ));
    assert!(!path.exists());
}

#[test]
fn test_overrides_take_precedence_over_stored_values() {
    let dir = TempDir::new().expect("temp dir");
    let store = YamlConfigStore::with_path(dir.path().join("config.yaml"));
    config_service::set_value(&store, "projects_root", "/srv/apps").expect("set");

    let config = ConfigOverrides {
        projects_root: Some(PathBuf::from("/tmp/apps")),
        hosts_file: Some(PathBuf::from("/tmp/hosts")),
        ..ConfigOverrides::default()
    }
    .apply(config_service::load_config(&store).expect("load"))
    .expect("absolute overrides");

    assert_eq!(config.projects_root, PathBuf::from("/tmp/apps"));
    assert_eq!(config.hosts_file, PathBuf::from("/tmp/hosts"));
}

#[test]
fn test_relative_override_is_rejected_like_config_set() {
    let dir = TempDir::new().expect("temp dir");
    let store = YamlConfigStore::with_path(dir.path().join("config.yaml"));

    let err = ConfigOverrides {
        projects_root: Some(PathBuf::from("apps")),
        ..ConfigOverrides::default()
    }
    .apply(config_service::load_config(&store).expect("load"))
    .expect_err("relative root accepted");

    assert!(matches!(
        err.downcast_ref::<ConfigError>(),
        Some(ConfigError::InvalidValue { key, .. }) if key == "projects_root"
    ));
}
