//! Domain types and validators for devhost configuration.
//!
//! Pure functions only: no filesystem access, no async.

use std::net::IpAddr;
use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::domain::error::ConfigError;
use crate::domain::project::is_valid_label;

// ── Constants ────────────────────────────────────────────────────────────────

pub const VALID_CONFIG_KEYS: &[&str] = &[
    "projects_root",
    "vhost_dir",
    "hosts_file",
    "fpm_socket",
    "error_log",
    "access_log",
    "composer",
    "tld",
    "loopback",
];

const PATH_KEYS: &[&str] = &[
    "projects_root",
    "vhost_dir",
    "hosts_file",
    "fpm_socket",
    "error_log",
    "access_log",
];

// ── Config schema ────────────────────────────────────────────────────────────

/// Top-level configuration stored in `~/.devhost/config.yaml`.
///
/// Every field has a default, so an empty or partial file is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DevhostConfig {
    /// Directory whose immediate subdirectories are projects.
    pub projects_root: PathBuf,
    /// nginx directory receiving one virtual-host file per project.
    pub vhost_dir: PathBuf,
    /// Hostname-resolution file that `<name>.<tld>` entries are added to.
    pub hosts_file: PathBuf,
    /// PHP-FPM unix socket the generated vhosts proxy to.
    pub fpm_socket: PathBuf,
    /// nginx error log shared by all generated vhosts.
    pub error_log: PathBuf,
    /// nginx access log shared by all generated vhosts.
    pub access_log: PathBuf,
    /// Dependency-manager executable.
    pub composer: String,
    /// Top-level domain appended to project names.
    pub tld: String,
    /// Address written in front of each hostname entry.
    pub loopback: String,
}

impl Default for DevhostConfig {
    fn default() -> Self {
        Self {
            projects_root: default_projects_root(),
            vhost_dir: PathBuf::from("/etc/nginx/sites-enabled"),
            hosts_file: PathBuf::from("/etc/hosts"),
            fpm_socket: PathBuf::from("/var/run/php/php8.2-fpm.sock"),
            error_log: PathBuf::from("/var/log/nginx/devhost-error.log"),
            access_log: PathBuf::from("/var/log/nginx/devhost-access.log"),
            composer: "composer".to_string(),
            tld: "test".to_string(),
            loopback: "127.0.0.1".to_string(),
        }
    }
}

fn default_projects_root() -> PathBuf {
    dirs::home_dir().map_or_else(|| PathBuf::from("apps"), |home| home.join("apps"))
}

impl DevhostConfig {
    /// Read a setting by key, rendered as a display string.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        let path = |p: &Path| p.display().to_string();
        match key {
            "projects_root" => Some(path(&self.projects_root)),
            "vhost_dir" => Some(path(&self.vhost_dir)),
            "hosts_file" => Some(path(&self.hosts_file)),
            "fpm_socket" => Some(path(&self.fpm_socket)),
            "error_log" => Some(path(&self.error_log)),
            "access_log" => Some(path(&self.access_log)),
            "composer" => Some(self.composer.clone()),
            "tld" => Some(self.tld.clone()),
            "loopback" => Some(self.loopback.clone()),
            _ => None,
        }
    }

    /// Validate and apply a single setting.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown or the value is invalid for it.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        validate_config_key(key)?;
        validate_config_value(key, value)?;
        match key {
            "projects_root" => self.projects_root = PathBuf::from(value),
            "vhost_dir" => self.vhost_dir = PathBuf::from(value),
            "hosts_file" => self.hosts_file = PathBuf::from(value),
            "fpm_socket" => self.fpm_socket = PathBuf::from(value),
            "error_log" => self.error_log = PathBuf::from(value),
            "access_log" => self.access_log = PathBuf::from(value),
            "composer" => self.composer = value.to_string(),
            "tld" => self.tld = value.to_string(),
            "loopback" => self.loopback = value.to_string(),
            _ => anyhow::bail!("Unknown setting: {key}"),
        }
        Ok(())
    }
}

// ── Validators ───────────────────────────────────────────────────────────────

/// Validates a configuration key against the whitelist.
///
/// # Errors
///
/// Returns an error if the key is not in the allowed list.
pub fn validate_config_key(key: &str) -> Result<()> {
    if !VALID_CONFIG_KEYS.contains(&key) {
        return Err(ConfigError::UnknownKey {
            key: key.to_string(),
            valid: VALID_CONFIG_KEYS.join(", "),
        }
        .into());
    }
    Ok(())
}

/// Validates a configuration value for the given key.
///
/// # Errors
///
/// Returns an error if the value is not valid for the key.
pub fn validate_config_value(key: &str, value: &str) -> Result<()> {
    let expected = if PATH_KEYS.contains(&key) {
        (!Path::new(value).is_absolute()).then_some("Expected an absolute path.")
    } else {
        match key {
            "composer" => (value.is_empty() || value.chars().any(char::is_whitespace))
                .then_some("Expected a program name or path without spaces."),
            "tld" => (!is_valid_label(value))
                .then_some("Expected a lowercase DNS label, e.g. 'test'."),
            "loopback" => value
                .parse::<IpAddr>()
                .is_err()
                .then_some("Expected an IP address, e.g. '127.0.0.1'."),
            _ => None,
        }
    };
    if let Some(expected) = expected {
        return Err(ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
            expected: expected.to_string(),
        }
        .into());
    }
    Ok(())
}

// ── Unit tests ───────────────────────────────────────────────────────────────
