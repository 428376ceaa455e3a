//! Provisioning outcomes and the per-run report.

use serde::Serialize;

/// What happened to a project's dependencies during provisioning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DependencyOutcome {
    /// The dependency manager ran and exited successfully.
    Installed,
    /// A `vendor` directory already existed; nothing was run.
    VendorPresent,
    /// The dependency manager could not be spawned or exited non-zero.
    /// Earlier steps are not rolled back.
    Failed { reason: String },
}

/// Result of one provisioning attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ProvisionOutcome {
    /// A virtual-host file already existed; nothing was touched.
    AlreadyConfigured,
    /// Dry run: the project would have been provisioned.
    Planned,
    /// Virtual host written and hostname registered.
    Provisioned { dependencies: DependencyOutcome },
    /// The directory name is not a safe hostname label.
    Rejected { reason: String },
    /// Writing the virtual host or the hosts entry failed.
    Failed { reason: String },
}

impl ProvisionOutcome {
    /// Returns `true` if this outcome should make the run exit non-zero.
    #[must_use]
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

/// Outcome for one named project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectReport {
    pub project: String,
    #[serde(flatten)]
    pub outcome: ProvisionOutcome,
}

/// Ordered outcomes for a whole run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProvisionReport {
    pub projects: Vec<ProjectReport>,
}

/// Per-outcome counts for a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ReportSummary {
    pub provisioned: usize,
    pub planned: usize,
    pub skipped: usize,
    pub rejected: usize,
    pub failed: usize,
    pub dependency_failures: usize,
}

impl ProvisionReport {
    /// Count outcomes by kind.
    #[must_use]
    pub fn summary(&self) -> ReportSummary {
        let mut summary = ReportSummary::default();
        for report in &self.projects {
            match &report.outcome {
                ProvisionOutcome::AlreadyConfigured => summary.skipped += 1,
                ProvisionOutcome::Planned => summary.planned += 1,
                ProvisionOutcome::Provisioned { dependencies } => {
                    summary.provisioned += 1;
                    if matches!(dependencies, DependencyOutcome::Failed { .. }) {
                        summary.dependency_failures += 1;
                    }
                }
                ProvisionOutcome::Rejected { .. } => summary.rejected += 1,
                ProvisionOutcome::Failed { .. } => summary.failed += 1,
            }
        }
        summary
    }

    /// Returns `true` if any project failed to provision.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.projects.iter().any(|p| p.outcome.is_failure())
    }
}
