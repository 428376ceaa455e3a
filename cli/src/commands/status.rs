//! `devhost status`: show which projects are provisioned.

use std::process::ExitCode;

use anyhow::Result;

use crate::app::AppContext;
use crate::application::services::project_status::project_status;
use crate::infra::fs::LocalHost;

/// Run the status command. Read-only.
///
/// # Errors
///
/// Returns an error if the projects root cannot be scanned or the hosts
/// file cannot be read.
pub fn run(app: &AppContext) -> Result<ExitCode> {
    let config = app.config()?;
    let host = LocalHost::from_config(&config);
    let projects = project_status(&config, &host)?;
    app.renderer().render_status(&projects)?;
    Ok(ExitCode::SUCCESS)
}
