//! `devhost provision`: provision every project lacking a virtual host.

use std::process::ExitCode;

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::application::services::provision::Provisioner;
use crate::infra::command_runner::TokioCommandRunner;
use crate::infra::composer::ComposerInstaller;
use crate::infra::fs::LocalHost;
use crate::infra::hook::NoopHook;
use crate::output::reporter::TerminalReporter;

/// Arguments for the provision command.
#[derive(Args, Debug, Default)]
pub struct ProvisionArgs {
    /// Provision only this project (a directory under the projects root)
    pub name: Option<String>,

    /// Show what would be provisioned without changing anything
    #[arg(long)]
    pub dry_run: bool,
}

/// Run the provision command.
///
/// Exits with failure if any project could not be written; dependency
/// install failures are warnings only.
///
/// # Errors
///
/// Returns an error if the configuration cannot be loaded or the projects
/// root is not a directory.
pub async fn run(app: &AppContext, args: &ProvisionArgs) -> Result<ExitCode> {
    let config = app.config()?;
    let host = LocalHost::from_config(&config);
    let installer = ComposerInstaller::new(TokioCommandRunner, config.composer.clone());
    let hook = NoopHook;
    let reporter = TerminalReporter::new(&app.output);

    let provisioner =
        Provisioner::new(&config, &host, &installer, &hook, &reporter).dry_run(args.dry_run);
    let report = match &args.name {
        Some(name) => provisioner.provision_one(name).await?,
        None => provisioner.provision_all().await?,
    };

    app.renderer().render_report(&report)?;

    if report.has_failures() {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
