//! Application service: configuration use-cases.

use std::path::PathBuf;

use anyhow::Result;

use crate::application::ports::ConfigStore;
use crate::domain::{DevhostConfig, validate_config_value};

/// Load configuration.
///
/// # Errors
///
/// Returns an error if the stored configuration cannot be read or parsed.
pub fn load_config(store: &impl ConfigStore) -> Result<DevhostConfig> {
    store.load()
}

/// Validate `key = value`, apply it to the stored configuration and save.
///
/// # Errors
///
/// Returns an error if the key or value is invalid, or on store failure.
/// Nothing is written when validation fails.
pub fn set_value(store: &impl ConfigStore, key: &str, value: &str) -> Result<DevhostConfig> {
    let mut config = store.load()?;
    config.set(key, value)?;
    store.save(&config)?;
    Ok(config)
}

/// Per-invocation overrides from command-line flags. Never persisted.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub projects_root: Option<PathBuf>,
    pub vhost_dir: Option<PathBuf>,
    pub hosts_file: Option<PathBuf>,
}

impl ConfigOverrides {
    /// Apply the overrides that are set on top of `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if an override is not an absolute path, the same
    /// check `config set` applies to the stored values.
    pub fn apply(self, mut config: DevhostConfig) -> Result<DevhostConfig> {
        if let Some(root) = self.projects_root {
            config.projects_root = checked_path("projects_root", root)?;
        }
        if let Some(dir) = self.vhost_dir {
            config.vhost_dir = checked_path("vhost_dir", dir)?;
        }
        if let Some(file) = self.hosts_file {
            config.hosts_file = checked_path("hosts_file", file)?;
        }
        Ok(config)
    }
}

fn checked_path(key: &str, path: PathBuf) -> Result<PathBuf> {
    validate_config_value(key, &path.to_string_lossy())?;
    Ok(path)
}
