//! Infrastructure implementation of the `CommandRunner` port.
//!
//! `TokioCommandRunner` is the production implementation that uses tokio
//! for async process execution.

use std::process::ExitStatus;

use anyhow::{Context, Result};

use crate::application::ports::CommandRunner;

/// Production `CommandRunner`: spawns the program with inherited stdio so
/// its output streams straight to the user's terminal, and waits for it.
///
/// There is no timeout: a long dependency install blocks the run until the
/// child exits.
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioCommandRunner;

impl CommandRunner for TokioCommandRunner {
    async fn run_status(&self, program: &str, args: &[&str]) -> Result<ExitStatus> {
        let mut child = tokio::process::Command::new(program)
            .args(args)
            .kill_on_drop(true)
            .spawn()
            .with_context(|| format!("failed to spawn {program}"))?;

        child
            .wait()
            .await
            .with_context(|| format!("waiting for {program}"))
    }
}
