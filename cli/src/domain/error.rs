//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All error types implement `thiserror::Error` and convert to `anyhow::Error`
//! via the `?` operator.

use std::path::PathBuf;

use thiserror::Error;

// ── Scan errors ───────────────────────────────────────────────────────────────

/// Errors raised while enumerating the projects root.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("The path {} is not a directory.", .0.display())]
    NotADirectory(PathBuf),
}

// ── Project errors ────────────────────────────────────────────────────────────

/// Errors related to a single project.
#[derive(Debug, Error)]
pub enum ProjectError {
    #[error(
        "Invalid project name '{0}': use letters, digits, '.', '_' or '-', starting with a letter or digit"
    )]
    InvalidName(String),

    #[error("Project '{name}' not found under {}", root.display())]
    NotFound { name: String, root: PathBuf },
}

// ── Config errors ─────────────────────────────────────────────────────────────

/// Errors related to configuration key/value validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unknown setting: {key}\n\nValid settings: {valid}")]
    UnknownKey { key: String, valid: String },

    #[error("Invalid value for {key}: {value}\n\n{expected}")]
    InvalidValue {
        key: String,
        value: String,
        expected: String,
    },
}
