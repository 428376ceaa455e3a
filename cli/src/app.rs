//! Application context: unified state passed to every command handler.
//!
//! `AppContext` is constructed once in `Cli::run()` from the global flags.
//! Adding a new cross-cutting concern requires only one field change here.

use anyhow::Result;

use crate::application::services::config_service::{self, ConfigOverrides};
use crate::domain::DevhostConfig;
use crate::infra::config::YamlConfigStore;
use crate::output::{HumanRenderer, JsonRenderer, OutputContext, Renderer};

/// Output rendering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable terminal output (default).
    Human,
    /// Machine-readable JSON output.
    Json,
}

/// Output rendering flags.
pub struct OutputFlags {
    /// Disable ANSI color output.
    pub no_color: bool,
    /// Suppress non-error output.
    pub quiet: bool,
    /// Enable JSON output mode.
    pub json: bool,
}

/// Flags passed from the top-level CLI to `AppContext::new`.
pub struct AppFlags {
    /// Output rendering options.
    pub output: OutputFlags,
    /// Per-invocation configuration overrides.
    pub overrides: ConfigOverrides,
}

/// Unified application context passed to every command handler.
pub struct AppContext {
    /// Terminal output context (colors, quiet mode).
    ///
    /// Always quiet in JSON mode so progress lines never mix with the
    /// JSON document on stdout.
    pub output: OutputContext,
    /// Output rendering mode (human vs JSON).
    pub mode: OutputMode,
    /// Persistent configuration store.
    pub config_store: YamlConfigStore,
    /// Command-line overrides applied on top of the stored configuration.
    pub overrides: ConfigOverrides,
}

impl AppContext {
    /// Construct an `AppContext` from top-level CLI flags.
    #[must_use]
    pub fn new(flags: AppFlags) -> Self {
        let AppFlags { output, overrides } = flags;
        let mode = if output.json {
            OutputMode::Json
        } else {
            OutputMode::Human
        };

        Self {
            output: OutputContext::new(output.no_color, output.quiet || output.json),
            mode,
            config_store: YamlConfigStore::default(),
            overrides,
        }
    }

    /// Returns the appropriate `Renderer` variant for the current output mode.
    #[must_use]
    pub fn renderer(&self) -> Renderer<'_> {
        match self.mode {
            OutputMode::Human => Renderer::Human(HumanRenderer::new(&self.output)),
            OutputMode::Json => Renderer::Json(JsonRenderer),
        }
    }

    /// Effective configuration: the stored file with CLI overrides applied.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file cannot be read or parsed,
    /// or if a command-line override is not an absolute path.
    pub fn config(&self) -> Result<DevhostConfig> {
        let stored = config_service::load_config(&self.config_store)?;
        self.overrides.clone().apply(stored)
    }
}
