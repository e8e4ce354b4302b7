//! # scopefs Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! This file serves as the main entry point for the `scopefs` CLI. It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Routing execution to the command handlers in `scopefs::commands`
//!
//! ## Examples
//!
//! ```bash
//! # Work inside a scenario directory
//! scopefs --root /tmp/scenario write notes/today.txt "hello"
//!
//! # Copy a fixture in, then list everything with increased verbosity
//! scopefs --root /tmp/scenario --fixtures-dir ./fixtures cp %/seed.txt seed.txt
//! scopefs -vv --root /tmp/scenario ls
//! ```
//!
use clap::Parser;
use scopefs::commands::{self, Cli};
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    if let Err(e) = commands::run(cli) {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}
