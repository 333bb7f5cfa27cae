//! Codevariants command-line tool
//!
//! Builds the example registry from a content directory and either gates a
//! release on it (`check`) or inspects it for authors.

use clap::Parser;
use std::io;
use std::process::ExitCode;
use tracing::{debug, error};

mod cli;
mod commands;
mod config;
mod error;

use cli::{Cli, Command};
use config::CliConfig;
use error::Result;

fn main() -> ExitCode {
    // Load environment variables
    dotenv::dotenv().ok();

    // Initialize tracing; stdout is reserved for command output
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "codevariants=info".to_string()),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(exit_code = err.exit_code(), "command failed");
            eprintln!("error: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = CliConfig::from_env()?.with_overrides(cli);
    debug!(?config, "resolved configuration");

    let mut out = io::stdout().lock();
    match &cli.command {
        Command::Check => commands::check(&config, &mut out),
        Command::List { component } => commands::list(&config, component.as_deref(), &mut out),
        Command::Show { reference } => commands::show(&config, reference, &mut out),
        Command::Export { output } => commands::export(&config, output.as_deref(), &mut out),
        Command::Resolve { file_names } => commands::resolve(&config, file_names, &mut out),
    }
}
