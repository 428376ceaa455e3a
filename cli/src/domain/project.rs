//! Project identity and derived paths.
//!
//! A project is a directory under the projects root. Its name is the
//! virtual-host filename and, lowercased, the hostname label. Names that
//! could break out of an nginx directive or a hosts-file line (whitespace,
//! `;`, braces, `#`, quotes) or that are dot entries are refused.

use std::path::PathBuf;
use std::sync::LazyLock;

use anyhow::Result;
use regex::Regex;
use serde::Serialize;

use crate::domain::config::DevhostConfig;
use crate::domain::error::ProjectError;

/// A single DNS label: lowercase alphanumerics and inner hyphens, 1–63 chars.
pub static LABEL_RE: LazyLock<Regex> = LazyLock::new(|| {
    // Safety: this is a compile-time constant pattern and cannot fail.
    #[allow(clippy::expect_used)]
    Regex::new(r"^[a-z0-9]([a-z0-9-]{0,61}[a-z0-9])?$").expect("valid regex")
});

/// A directory name safe to use as a vhost filename and hostname label.
static PROJECT_NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    // Safety: this is a compile-time constant pattern and cannot fail.
    #[allow(clippy::expect_used)]
    Regex::new(r"^[A-Za-z0-9][A-Za-z0-9._-]{0,254}$").expect("valid regex")
});

/// Directory name Composer installs dependencies into.
pub const VENDOR_DIR: &str = "vendor";

/// Returns `true` if `value` is a single lowercase DNS label.
#[must_use]
pub fn is_valid_label(value: &str) -> bool {
    LABEL_RE.is_match(value)
}

/// Returns `true` if `name` can be provisioned as-is.
///
/// Empty dot-separated parts (`a..b`, `blog.`) are refused since they
/// would yield an invalid hostname.
#[must_use]
pub fn is_valid_project_name(name: &str) -> bool {
    PROJECT_NAME_RE.is_match(name) && !name.contains("..") && !name.ends_with('.')
}

/// Validates a project directory name.
///
/// # Errors
///
/// Returns [`ProjectError::InvalidName`] if the name is unsafe for the vhost
/// file or the hosts file.
pub fn validate_project_name(name: &str) -> Result<()> {
    if !is_valid_project_name(name) {
        return Err(ProjectError::InvalidName(name.to_string()).into());
    }
    Ok(())
}

/// In-memory view of one project for the duration of a provisioning pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    /// Directory name, also the vhost filename.
    pub name: String,
    /// `projects_root / name`.
    pub path: PathBuf,
    /// `vhost_dir / name`.
    pub vhost_path: PathBuf,
    /// `path / vendor`.
    pub vendor_path: PathBuf,
    /// Lowercased `name.tld`.
    pub hostname: String,
}

impl Project {
    /// Derive all project attributes from its name and the configuration.
    ///
    /// Does not validate `name`; call [`validate_project_name`] first.
    #[must_use]
    pub fn new(name: &str, config: &DevhostConfig) -> Self {
        let path = config.projects_root.join(name);
        Self {
            name: name.to_string(),
            vhost_path: config.vhost_dir.join(name),
            vendor_path: path.join(VENDOR_DIR),
            hostname: format!("{}.{}", name.to_ascii_lowercase(), config.tld),
            path,
        }
    }
}

/// Observed provisioning state of a project, as shown by `devhost status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectStatus {
    pub project: String,
    pub hostname: String,
    /// Name passes validation; invalid projects are never provisioned.
    pub valid_name: bool,
    /// A virtual-host file with the project's name exists.
    pub configured: bool,
    /// The hosts file maps `hostname`.
    pub host_registered: bool,
    /// `vendor` exists under the project directory.
    pub vendor_present: bool,
}
