//! Human-readable terminal renderer.

use owo_colors::OwoColorize as _;

use crate::domain::{DevhostConfig, ProjectStatus, ProvisionReport, ReportSummary};
use crate::infra::config::CONFIG_ENV;
use crate::output::OutputContext;

/// Renders domain types as human-readable terminal output using `OutputContext`.
pub struct HumanRenderer<'a> {
    ctx: &'a OutputContext,
}

impl<'a> HumanRenderer<'a> {
    /// Create a new `HumanRenderer` wrapping the given output context.
    #[must_use]
    pub fn new(ctx: &'a OutputContext) -> Self {
        Self { ctx }
    }

    /// Render the CLI version information.
    pub fn render_version(&self, version: &str) {
        println!("devhost {version}");
    }

    /// Render the summary line of a provisioning run.
    ///
    /// Per-project lines are emitted while the run progresses, so only the
    /// totals are printed here.
    pub fn render_report(&self, report: &ProvisionReport) {
        if self.ctx.quiet {
            return;
        }
        if report.projects.is_empty() {
            self.ctx.info("No projects found.");
            return;
        }
        println!();
        self.ctx.info(&format_summary(&report.summary()));
    }

    /// Render one row per project with its provisioning state.
    pub fn render_status(&self, projects: &[ProjectStatus]) {
        if projects.is_empty() {
            if !self.ctx.quiet {
                println!("No projects found.");
            }
            return;
        }

        println!(
            "  {:<24} {:<32} {:<6} {:<6} {}",
            "PROJECT".style(self.ctx.styles.bold),
            "HOSTNAME".style(self.ctx.styles.bold),
            "VHOST".style(self.ctx.styles.bold),
            "HOSTS".style(self.ctx.styles.bold),
            "VENDOR".style(self.ctx.styles.bold),
        );
        for p in projects {
            if !p.valid_name {
                println!(
                    "  {:<24} {}",
                    p.project,
                    "invalid name, never provisioned".style(self.ctx.styles.warning)
                );
                continue;
            }
            println!(
                "  {:<24} {:<32} {} {} {}",
                p.project,
                p.hostname,
                self.mark(p.configured),
                self.mark(p.host_registered),
                self.mark(p.vendor_present),
            );
        }
    }

    /// Render the effective devhost configuration.
    pub fn render_config(&self, config: &DevhostConfig, path: &std::path::Path) {
        println!();
        println!(
            "  {}",
            format!("Configuration ({})", path.display()).style(self.ctx.styles.header)
        );
        println!();
        for key in crate::domain::config::VALID_CONFIG_KEYS {
            let value = config.get(key).unwrap_or_default();
            println!("  {:<20} {value}", format!("{key}:"));
        }
        println!();
        println!("  {}", "Environment:".style(self.ctx.styles.bold));
        println!(
            "    {:<18} {}",
            format!("{CONFIG_ENV}:"),
            std::env::var(CONFIG_ENV).unwrap_or_else(|_| "(not set)".to_string())
        );
        println!(
            "    {:<18} {}",
            "NO_COLOR:",
            std::env::var("NO_COLOR").unwrap_or_else(|_| "(not set)".to_string())
        );
        println!();
    }

    fn mark(&self, ok: bool) -> String {
        // Pad before styling so ANSI codes do not skew column widths.
        if ok {
            format!("{}", format!("{:<6}", "✓").style(self.ctx.styles.success))
        } else {
            format!("{}", format!("{:<6}", "✗").style(self.ctx.styles.error))
        }
    }
}

/// Format run totals, omitting zero counts.
///
/// Returns e.g. `"2 provisioned, 1 already configured"`.
#[must_use]
pub fn format_summary(summary: &ReportSummary) -> String {
    let parts: Vec<String> = [
        (summary.provisioned, "provisioned"),
        (summary.planned, "would be provisioned"),
        (summary.skipped, "already configured"),
        (summary.rejected, "rejected"),
        (summary.failed, "failed"),
        (summary.dependency_failures, "with failed dependency install"),
    ]
    .into_iter()
    .filter(|(count, _)| *count > 0)
    .map(|(count, label)| format!("{count} {label}"))
    .collect();
    parts.join(", ")
}
