//! Infrastructure implementation of the `DependencyInstaller` port.
//!
//! `ComposerInstaller<R>` routes the Composer CLI call through a
//! `CommandRunner`.

use std::path::Path;
use std::process::ExitStatus;

use anyhow::{Context, Result};

use crate::application::ports::{CommandRunner, DependencyInstaller};

/// Runs `<program> install --no-interaction --working-dir=<project>`.
///
/// Generic over `R: CommandRunner` so that tests can inject a mock runner
/// without spawning real processes.
pub struct ComposerInstaller<R: CommandRunner> {
    runner: R,
    program: String,
}

impl<R: CommandRunner> ComposerInstaller<R> {
    /// Create an installer that invokes `program` through `runner`.
    pub fn new(runner: R, program: impl Into<String>) -> Self {
        Self {
            runner,
            program: program.into(),
        }
    }
}

impl<R: CommandRunner> DependencyInstaller for ComposerInstaller<R> {
    async fn install(&self, project_path: &Path) -> Result<ExitStatus> {
        let working_dir = format!("--working-dir={}", project_path.display());
        self.runner
            .run_status(&self.program, &["install", "--no-interaction", &working_dir])
            .await
            .with_context(|| format!("{} install", self.program))
    }
}
