//! Algokit CLI
//!
//! Command-line interface for the Algokit algorithms.

use algokit_cli::cli::Command;
use algokit_cli::{Cli, CliConfig};
use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // A broken config file must not block the commands that repair it.
    let config = match CliConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) if matches!(cli.command, Command::Config { .. }) => {
            eprintln!("warning: {e}");
            CliConfig::default()
        }
        Err(e) => return Err(e.into()),
    };

    // Initialize logging; RUST_LOG wins over --verbose and the config.
    let level = if cli.verbose { "debug" } else { config.log_level.as_str() };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_writer(std::io::stderr)
        .init();

    let output = algokit_cli::run(&cli, &config)?;
    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
