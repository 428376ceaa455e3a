//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain`, never from `crate::infra`,
//! `crate::commands`, or `crate::output`.

use std::path::{Path, PathBuf};
use std::process::ExitStatus;

use anyhow::Result;

use crate::domain::{DevhostConfig, Project};

// ── Host Filesystem Ports ─────────────────────────────────────────────────────

/// Enumerates projects under a root directory.
pub trait ProjectScanner {
    /// List the names of the immediate subdirectories of `root`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::ScanError::NotADirectory`] if `root` does not
    /// exist or is not a directory.
    fn list_project_names(&self, root: &Path) -> Result<Vec<String>>;
}

/// The virtual-host directory, where a file named after a project marks it
/// as provisioned.
pub trait VhostStore {
    /// Returns `true` iff a regular file named exactly `name` exists in the
    /// vhost directory. A same-named directory does not count.
    fn has_config(&self, name: &str) -> bool;
    /// Create or truncate the vhost file for `name` and write `content`.
    fn write_config(&self, name: &str, content: &str) -> Result<()>;
}

/// The system hostname-resolution file, treated as plain text.
pub trait HostsFile {
    /// Read the whole file. A missing file reads as empty.
    fn read_hosts(&self) -> Result<String>;
    /// Append `text` verbatim, creating the file if needed.
    fn append_hosts(&self, text: &str) -> Result<()>;
}

/// Raw filesystem queries.
pub trait LocalFs {
    /// Returns `true` if `path` exists and is a directory.
    fn is_dir(&self, path: &Path) -> bool;
}

/// Composite trait: any type implementing all four host ports is a `ProvisionHost`.
pub trait ProvisionHost: ProjectScanner + VhostStore + HostsFile + LocalFs {}

/// Blanket implementation: any type implementing all four host ports is a `ProvisionHost`.
impl<T> ProvisionHost for T where T: ProjectScanner + VhostStore + HostsFile + LocalFs {}

// ── Command Runner Port ───────────────────────────────────────────────────────

/// Abstracts process execution so infrastructure can be swapped or mocked.
#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    /// Run a program with inherited stdio and return its exit status.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be spawned or waited on.
    async fn run_status(&self, program: &str, args: &[&str]) -> Result<ExitStatus>;
}

// ── Provisioning Step Ports ───────────────────────────────────────────────────

/// Installs a project's declared dependencies into its vendor directory.
#[allow(async_fn_in_trait)]
pub trait DependencyInstaller {
    /// Run a non-interactive install scoped to `project_path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the installer cannot be started.
    async fn install(&self, project_path: &Path) -> Result<ExitStatus>;
}

/// Extension point run last for every newly provisioned project, e.g. to
/// seed environment or configuration variables.
pub trait PostProvisionHook {
    /// Called after the vhost, hosts entry and dependency steps.
    ///
    /// # Errors
    ///
    /// A failure is reported as a warning; it does not undo earlier steps.
    fn after_provision(&self, project: &Project) -> Result<()>;
}

// ── Progress Reporting Port ───────────────────────────────────────────────────

/// Abstracts progress reporting so services can emit events without
/// depending on the Presentation layer. Sync trait, no async needed.
pub trait ProgressReporter {
    /// Emit an in-progress step message.
    fn step(&self, message: &str);
    /// Emit a success message.
    fn success(&self, message: &str);
    /// Emit a warning message.
    fn warn(&self, message: &str);
    /// Emit an error message. Never suppressed.
    fn error(&self, message: &str);
}

// ── Configuration Port ────────────────────────────────────────────────────────

/// Abstracts configuration persistence (load/save).
pub trait ConfigStore {
    /// Load the configuration, returning defaults if no file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    fn load(&self) -> Result<DevhostConfig>;
    /// Persist the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    fn save(&self, config: &DevhostConfig) -> Result<()>;
    /// Location of the configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    fn path(&self) -> Result<PathBuf>;
}
