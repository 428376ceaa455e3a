//! Application service: project status use-case.

use anyhow::{Context, Result};

use crate::application::ports::ProvisionHost;
use crate::domain::hosts::has_hostname;
use crate::domain::project::is_valid_project_name;
use crate::domain::{DevhostConfig, Project, ProjectStatus};

/// Inspect every project under `config.projects_root` without modifying anything.
///
/// Projects with unsafe names are listed but never probed on disk.
///
/// # Errors
///
/// Returns an error if the projects root cannot be scanned or the hosts
/// file cannot be read.
pub fn project_status(
    config: &DevhostConfig,
    host: &impl ProvisionHost,
) -> Result<Vec<ProjectStatus>> {
    let names = host.list_project_names(&config.projects_root)?;
    let hosts = host.read_hosts().context("reading hosts file")?;

    Ok(names
        .into_iter()
        .map(|name| {
            let project = Project::new(&name, config);
            let valid_name = is_valid_project_name(&name);
            ProjectStatus {
                valid_name,
                configured: valid_name && host.has_config(&name),
                host_registered: valid_name && has_hostname(&hosts, &project.hostname),
                vendor_present: valid_name && host.is_dir(&project.vendor_path),
                hostname: project.hostname,
                project: name,
            }
        })
        .collect())
}
