//! # scopefs Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! This module defines the `scopefs` command line and routes every subcommand to
//! exactly one access-layer operation. The CLI exists so shell-driven scenarios
//! can use the same validated, scoped operations as harness code.
//!
//! ## Architecture
//!
//! - `Cli` holds the global flags (`-v`, `--root`, `--fixtures-prefix`,
//!   `--fixtures-dir`) and the chosen `Commands` variant.
//! - `run` loads the configuration (with the global flags as overrides), builds a
//!   `FileAccess` for the resulting scope and dispatches.
//! - Handlers are grouped by family:
//!   - `inspect`: `exists`, `ls`, `cat`, `size`, `du`
//!   - `write`: `write`, `append`, `mkdir`, `touch`
//!   - `manage`: `cp`, `mv`, `rm`, `chmod`
//!
use crate::access::FileAccess;
use crate::core::config::{self, ConfigOverrides};
use crate::core::error::Result;
use clap::{Parser, Subcommand};
use tracing::debug;

/// Handlers for read-only subcommands.
pub mod inspect;
/// Handlers for copy, move, remove and mode changes.
pub mod manage;
/// Handlers for subcommands that create or extend files and directories.
pub mod write;

/// Top-level command-line arguments.
#[derive(Parser, Debug)]
#[command(
    name = "scopefs",
    about = "Sandboxed filesystem access for test scenarios",
    long_about = "Create, inspect and assert on files inside one isolated working root.\n\
                  Fixture paths are read-only; multi-path operations validate every\n\
                  argument before touching the disk.",
    propagate_version = true,
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Working root all relative paths resolve against.
    #[arg(long, env = "SCOPEFS_ROOT", global = true)]
    pub root: Option<String>,

    /// Prefix marking read-only fixture references.
    #[arg(long, env = "SCOPEFS_FIXTURES_PREFIX", global = true)]
    pub fixtures_prefix: Option<String>,

    /// Directory fixture references resolve into.
    #[arg(long = "fixtures-dir", env = "SCOPEFS_FIXTURES_DIR", global = true)]
    pub fixtures_directory: Option<String>,
}

/// All available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    Exists(inspect::ExistsArgs),
    Ls(inspect::LsArgs),
    Cat(inspect::CatArgs),
    Size(inspect::SizeArgs),
    Du(inspect::DuArgs),
    Write(write::WriteArgs),
    Append(write::AppendArgs),
    Mkdir(write::MkdirArgs),
    Touch(write::TouchArgs),
    Cp(manage::TransferArgs),
    Mv(manage::TransferArgs),
    Rm(manage::RmArgs),
    Chmod(manage::ChmodArgs),
}

/// Builds the access layer from configuration and runs the chosen subcommand.
pub fn run(cli: Cli) -> Result<()> {
    let overrides = ConfigOverrides {
        working_root: cli.root,
        fixtures_prefix: cli.fixtures_prefix,
        fixtures_directory: cli.fixtures_directory,
    };
    let cfg = config::load_config_with(&overrides)?;
    let access = FileAccess::new(cfg.to_scope());
    debug!("Running {:?} in {:?}", cli.command, access.scope());

    match cli.command {
        Commands::Exists(args) => inspect::handle_exists(&access, args),
        Commands::Ls(args) => inspect::handle_ls(&access, args),
        Commands::Cat(args) => inspect::handle_cat(&access, args),
        Commands::Size(args) => inspect::handle_size(&access, args),
        Commands::Du(args) => inspect::handle_du(&access, args),
        Commands::Write(args) => write::handle_write(&access, args),
        Commands::Append(args) => write::handle_append(&access, args),
        Commands::Mkdir(args) => write::handle_mkdir(&access, args),
        Commands::Touch(args) => write::handle_touch(&access, args),
        Commands::Cp(args) => manage::handle_cp(&access, args),
        Commands::Mv(args) => manage::handle_mv(&access, args),
        Commands::Rm(args) => manage::handle_rm(&access, args),
        Commands::Chmod(args) => manage::handle_chmod(&access, args),
    }
}
