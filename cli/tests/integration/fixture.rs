//! Temporary projects root, vhost directory, hosts file and config file
//! for end-to-end runs of the binary.

#![allow(clippy::expect_used, dead_code)]

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

pub struct Sandbox {
    dir: TempDir,
}

impl Sandbox {
    /// Empty projects root and vhost directory, no hosts file yet.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("temp dir");
        std::fs::create_dir(dir.path().join("apps")).expect("mkdir apps");
        std::fs::create_dir(dir.path().join("sites-enabled")).expect("mkdir sites-enabled");
        Self { dir }
    }

    pub fn with_projects(names: &[&str]) -> Self {
        let sandbox = Self::new();
        for name in names {
            sandbox.add_project(name);
        }
        sandbox
    }

    pub fn add_project(&self, name: &str) {
        std::fs::create_dir_all(self.root().join(name).join("public")).expect("mkdir project");
    }

    pub fn root(&self) -> PathBuf {
        self.dir.path().join("apps")
    }

    pub fn vhost_dir(&self) -> PathBuf {
        self.dir.path().join("sites-enabled")
    }

    pub fn hosts_file(&self) -> PathBuf {
        self.dir.path().join("hosts")
    }

    pub fn config_file(&self) -> PathBuf {
        self.dir.path().join("config.yaml")
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Point the dependency manager at `program` via the config file.
    pub fn use_composer(&self, program: &str) {
        std::fs::write(self.config_file(), format!("composer: {program}\n"))
            .expect("write config");
    }

    pub fn vhost(&self, name: &str) -> Option<String> {
        std::fs::read_to_string(self.vhost_dir().join(name)).ok()
    }

    pub fn hosts(&self) -> String {
        std::fs::read_to_string(self.hosts_file()).unwrap_or_default()
    }

    /// `devhost` bound to this sandbox's paths and config file.
    pub fn devhost(&self) -> Command {
        let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("devhost"));
        cmd.env("NO_COLOR", "1")
            .env("DEVHOST_CONFIG", self.config_file())
            .arg("--root")
            .arg(self.root())
            .arg("--vhost-dir")
            .arg(self.vhost_dir())
            .arg("--hosts-file")
            .arg(self.hosts_file());
        cmd
    }
}
