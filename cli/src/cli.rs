//! CLI argument parsing with clap derive

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::app::{AppContext, AppFlags, OutputFlags};
use crate::application::services::config_service::ConfigOverrides;
use crate::commands;

/// Provision nginx virtual hosts for local PHP projects
#[derive(Parser, Debug)]
#[command(
    name = "devhost",
    version,
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(
        long,
        global = true,
        env = "NO_COLOR",
        value_parser = clap::builder::FalseyValueParser::new()
    )]
    pub no_color: bool,

    /// Projects root directory (overrides `projects_root`)
    #[arg(long, global = true, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// nginx virtual-host directory (overrides `vhost_dir`)
    #[arg(long, global = true, value_name = "DIR")]
    pub vhost_dir: Option<PathBuf>,

    /// Hosts file to register hostnames in (overrides `hosts_file`)
    #[arg(long, global = true, value_name = "FILE")]
    pub hosts_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Provision projects that have no virtual host yet
    Provision(commands::provision::ProvisionArgs),

    /// Show provisioning state of every project
    Status,

    /// Manage configuration
    #[command(subcommand)]
    Config(commands::config::ConfigCommand),

    /// Show version
    Version,
}

impl Cli {
    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if the command fails.
    pub async fn run(self) -> Result<ExitCode> {
        let Cli {
            json,
            quiet,
            no_color,
            root,
            vhost_dir,
            hosts_file,
            command,
        } = self;
        let app = AppContext::new(AppFlags {
            output: OutputFlags {
                no_color,
                quiet,
                json,
            },
            overrides: ConfigOverrides {
                projects_root: root,
                vhost_dir,
                hosts_file,
            },
        });

        match command {
            Command::Provision(args) => commands::provision::run(&app, &args).await,
            Command::Status => commands::status::run(&app),
            Command::Config(cmd) => commands::config::run(&app, cmd),
            Command::Version => commands::version::run(&app),
        }
    }
}
