//! # algokit-cli
//!
//! The `algokit` command-line tool.
//!
//! Runs the Algokit algorithms on command-line arguments and graph files:
//! - number theory (`primes`, `fib`)
//! - dynamic programming (`knapsack`, `lcs`, `edit-distance`)
//! - geometry and sorting (`closest-pair`, `sort`)
//! - graphs loaded from JSON or TOML edge lists (`graph ...`)
//! - configuration management (`config ...`)

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_handlers;
pub mod error;

pub use cli::Cli;
pub use commands::run;
pub use config::CliConfig;
pub use error::{Error, Result};
