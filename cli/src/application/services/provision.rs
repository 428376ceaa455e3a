//! Application service: project provisioning use-case.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.
//! All I/O is routed through injected port traits.
//!
//! Per project, once the idempotency check passes, the steps run in a fixed
//! order with no rollback: vhost file, hosts entry, dependency install,
//! post-provision hook. A dependency failure leaves the first two in place.

use anyhow::{Context, Result};

use crate::application::ports::{
    DependencyInstaller, PostProvisionHook, ProgressReporter, ProvisionHost,
};
use crate::domain::hosts::entry_to_append;
use crate::domain::vhost::{VhostVars, render_vhost};
use crate::domain::{
    DependencyOutcome, DevhostConfig, Project, ProjectError, ProjectReport, ProvisionOutcome,
    ProvisionReport, ScanError, validate_project_name,
};

/// Provisions projects under `config.projects_root`.
///
/// Generic over its ports so the caller can inject real or mock
/// implementations. The service never touches `OutputContext` or any
/// presentation type.
pub struct Provisioner<'a, H, D, K, R> {
    config: &'a DevhostConfig,
    host: &'a H,
    installer: &'a D,
    hook: &'a K,
    reporter: &'a R,
    dry_run: bool,
}

impl<'a, H, D, K, R> Provisioner<'a, H, D, K, R>
where
    H: ProvisionHost,
    D: DependencyInstaller,
    K: PostProvisionHook,
    R: ProgressReporter,
{
    /// Create a provisioner over the given configuration and ports.
    #[must_use]
    pub fn new(
        config: &'a DevhostConfig,
        host: &'a H,
        installer: &'a D,
        hook: &'a K,
        reporter: &'a R,
    ) -> Self {
        Self {
            config,
            host,
            installer,
            hook,
            reporter,
            dry_run: false,
        }
    }

    /// When set, report what would be provisioned without side effects.
    #[must_use]
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Scan the projects root and provision every project, one after another.
    ///
    /// A failing project is recorded in the report and never stops the loop.
    ///
    /// # Errors
    ///
    /// Returns an error only if the projects root cannot be scanned; nothing
    /// is provisioned in that case.
    pub async fn provision_all(&self) -> Result<ProvisionReport> {
        let names = self.host.list_project_names(&self.config.projects_root)?;
        let mut report = ProvisionReport::default();
        for name in names {
            let outcome = self.run(&name).await;
            report.projects.push(ProjectReport {
                project: name,
                outcome,
            });
        }
        Ok(report)
    }

    /// Provision a single project by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the projects root is not a directory or the
    /// project directory does not exist under it.
    pub async fn provision_one(&self, name: &str) -> Result<ProvisionReport> {
        let root = &self.config.projects_root;
        if !self.host.is_dir(root) {
            return Err(ScanError::NotADirectory(root.clone()).into());
        }
        if validate_project_name(name).is_ok() && !self.host.is_dir(&root.join(name)) {
            return Err(ProjectError::NotFound {
                name: name.to_string(),
                root: root.clone(),
            }
            .into());
        }
        let outcome = self.run(name).await;
        Ok(ProvisionReport {
            projects: vec![ProjectReport {
                project: name.to_string(),
                outcome,
            }],
        })
    }

    /// Run the full provisioning sequence for one project.
    pub async fn run(&self, name: &str) -> ProvisionOutcome {
        if let Err(e) = validate_project_name(name) {
            self.reporter.warn(&format!("skipping {name:?}: {e}"));
            return ProvisionOutcome::Rejected {
                reason: e.to_string(),
            };
        }
        if self.host.has_config(name) {
            self.reporter.step(&format!("{name}: already configured"));
            return ProvisionOutcome::AlreadyConfigured;
        }

        let project = Project::new(name, self.config);
        if self.dry_run {
            self.reporter
                .step(&format!("{name}: would provision {}", project.hostname));
            return ProvisionOutcome::Planned;
        }

        self.reporter
            .step(&format!("provisioning {}...", project.hostname));
        match self.provision(&project).await {
            Ok(dependencies) => {
                self.reporter
                    .success(&format!("{} ready", project.hostname));
                ProvisionOutcome::Provisioned { dependencies }
            }
            Err(e) => {
                let reason = format!("{e:#}");
                self.reporter.error(&format!("{name}: {reason}"));
                ProvisionOutcome::Failed { reason }
            }
        }
    }

    async fn provision(&self, project: &Project) -> Result<DependencyOutcome> {
        self.write_vhost(project)?;
        self.register_hostname(project)?;
        let dependencies = self.install_dependencies(project).await;
        if let Err(e) = self.hook.after_provision(project) {
            self.reporter
                .warn(&format!("{}: post-provision hook failed: {e:#}", project.name));
        }
        Ok(dependencies)
    }

    fn write_vhost(&self, project: &Project) -> Result<()> {
        let content = render_vhost(&VhostVars::for_project(project, self.config));
        self.host
            .write_config(&project.name, &content)
            .with_context(|| format!("writing {}", project.vhost_path.display()))
    }

    fn register_hostname(&self, project: &Project) -> Result<()> {
        let contents = self.host.read_hosts().context("reading hosts file")?;
        if let Some(text) = entry_to_append(&contents, &self.config.loopback, &project.hostname) {
            self.host
                .append_hosts(&text)
                .with_context(|| format!("registering {}", project.hostname))?;
        }
        Ok(())
    }

    async fn install_dependencies(&self, project: &Project) -> DependencyOutcome {
        if self.host.is_dir(&project.vendor_path) {
            return DependencyOutcome::VendorPresent;
        }
        self.reporter
            .step(&format!("{}: installing dependencies...", project.name));
        let reason = match self.installer.install(&project.path).await {
            Ok(status) if status.success() => return DependencyOutcome::Installed,
            Ok(status) => format!("dependency install {status}"),
            Err(e) => format!("{e:#}"),
        };
        self.reporter.warn(&format!(
            "{}: {reason} (vhost and hosts entry kept)",
            project.name
        ));
        DependencyOutcome::Failed { reason }
    }
}
