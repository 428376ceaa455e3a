//! devhost - provision nginx virtual hosts for local PHP projects

use std::process::ExitCode;

use clap::Parser;

use devhost_cli::cli::Cli;
use devhost_cli::output::json;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let json_mode = cli.json;
    match cli.run().await {
        Ok(code) => code,
        Err(e) => {
            let message = format!("{e:#}");
            match json::format_error(&message, json::error_code(&e)) {
                Ok(text) if json_mode => println!("{text}"),
                _ => eprintln!("Error: {message}"),
            }
            ExitCode::FAILURE
        }
    }
}
