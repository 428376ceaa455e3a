//! Filesystem infrastructure: implements the host ports over real paths.

use std::io::Write as _;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::application::ports::{HostsFile, LocalFs, ProjectScanner, VhostStore};
use crate::domain::{DevhostConfig, ScanError};

/// Production implementation of the host ports: projects root scanning,
/// the nginx vhost directory and the hosts file.
#[derive(Debug, Clone)]
pub struct LocalHost {
    vhost_dir: PathBuf,
    hosts_file: PathBuf,
}

impl LocalHost {
    /// Create a host bound to explicit vhost and hosts-file locations.
    #[must_use]
    pub fn new(vhost_dir: PathBuf, hosts_file: PathBuf) -> Self {
        Self {
            vhost_dir,
            hosts_file,
        }
    }

    /// Create a host from the configured locations.
    #[must_use]
    pub fn from_config(config: &DevhostConfig) -> Self {
        Self::new(config.vhost_dir.clone(), config.hosts_file.clone())
    }
}

impl ProjectScanner for LocalHost {
    fn list_project_names(&self, root: &Path) -> Result<Vec<String>> {
        if !root.is_dir() {
            return Err(ScanError::NotADirectory(root.to_path_buf()).into());
        }
        let entries =
            std::fs::read_dir(root).with_context(|| format!("reading {}", root.display()))?;
        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.with_context(|| format!("reading {}", root.display()))?;
            if !entry.path().is_dir() {
                continue;
            }
            if let Ok(name) = entry.file_name().into_string() {
                names.push(name);
            }
        }
        names.sort();
        Ok(names)
    }
}

impl VhostStore for LocalHost {
    fn has_config(&self, name: &str) -> bool {
        self.vhost_dir.join(name).is_file()
    }

    fn write_config(&self, name: &str, content: &str) -> Result<()> {
        let path = self.vhost_dir.join(name);
        std::fs::write(&path, content).with_context(|| format!("writing file {}", path.display()))
    }
}

impl HostsFile for LocalHost {
    fn read_hosts(&self) -> Result<String> {
        match std::fs::read_to_string(&self.hosts_file) {
            Ok(contents) => Ok(contents),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(String::new()),
            Err(e) => {
                Err(e).with_context(|| format!("reading file {}", self.hosts_file.display()))
            }
        }
    }

    fn append_hosts(&self, text: &str) -> Result<()> {
        let mut file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.hosts_file)
            .with_context(|| format!("opening {}", self.hosts_file.display()))?;
        file.write_all(text.as_bytes())
            .with_context(|| format!("appending to {}", self.hosts_file.display()))
    }
}

impl LocalFs for LocalHost {
    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }
}
