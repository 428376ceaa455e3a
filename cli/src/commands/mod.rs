//! Command implementations

pub mod config;
pub mod provision;
pub mod status;
pub mod version;
