//! JSON output helpers.
//!
//! Provides the renderer used by `--json` and the error-object formatter used
//! when a command fails in JSON mode.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::domain::{
    ConfigError, DevhostConfig, ProjectError, ProjectStatus, ProvisionReport, ReportSummary,
    ScanError,
};

/// Format a JSON error object.
///
/// Output (pretty-printed):
/// ```json
/// {
///   "error": true,
///   "message": "...",
///   "code": "..."
/// }
/// ```
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn format_error(message: &str, code: &str) -> Result<String> {
    let obj = serde_json::json!({
        "error": true,
        "message": message,
        "code": code,
    });
    serde_json::to_string_pretty(&obj).context("JSON serialization failed")
}

/// Stable machine-readable code for an error, from its typed root cause.
#[must_use]
pub fn error_code(err: &anyhow::Error) -> &'static str {
    if err.downcast_ref::<ScanError>().is_some() {
        return "not_a_directory";
    }
    match err.downcast_ref::<ProjectError>() {
        Some(ProjectError::InvalidName(_)) => return "invalid_project_name",
        Some(ProjectError::NotFound { .. }) => return "project_not_found",
        None => {}
    }
    if err.downcast_ref::<ConfigError>().is_some() {
        return "invalid_config";
    }
    "error"
}

/// Renders domain types as pretty-printed JSON on stdout.
pub struct JsonRenderer;

#[derive(Serialize)]
struct ReportDocument<'a> {
    #[serde(flatten)]
    report: &'a ProvisionReport,
    summary: ReportSummary,
}

#[derive(Serialize)]
struct ConfigDocument<'a> {
    path: &'a Path,
    config: &'a DevhostConfig,
}

impl JsonRenderer {
    /// Render a provisioning report with its summary counts.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn render_report(&self, report: &ProvisionReport) -> Result<()> {
        print(&ReportDocument {
            report,
            summary: report.summary(),
        })
    }

    /// Render the status of every project.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn render_status(&self, projects: &[ProjectStatus]) -> Result<()> {
        print(&serde_json::json!({ "projects": projects }))
    }

    /// Render the effective configuration and where it is stored.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn render_config(&self, config: &DevhostConfig, path: &Path) -> Result<()> {
        print(&ConfigDocument { path, config })
    }

    /// Render the CLI version.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn render_version(&self, version: &str) -> Result<()> {
        print(&serde_json::json!({ "version": version }))
    }
}

fn print(value: &impl Serialize) -> Result<()> {
    let text = serde_json::to_string_pretty(value).context("JSON serialization failed")?;
    println!("{text}");
    Ok(())
}
