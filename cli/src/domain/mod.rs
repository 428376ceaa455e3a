//! Domain layer: pure business logic, types, and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, or `std::process`.
//! All functions are synchronous and take data in, returning data out.

pub mod config;
pub mod error;
pub mod hosts;
pub mod project;
pub mod provision;
pub mod vhost;

pub use config::{DevhostConfig, validate_config_key, validate_config_value};
pub use error::{ConfigError, ProjectError, ScanError};
pub use project::{Project, ProjectStatus, validate_project_name};
pub use provision::{
    DependencyOutcome, ProjectReport, ProvisionOutcome, ProvisionReport, ReportSummary,
};
