//! # scopefs Management Handlers
//!
//! File: cli/src/commands/manage.rs
//!
//! ## Overview
//!
//! Subcommands that copy, move, remove or change the mode of existing entries.
//! For `cp` and `mv` the last positional argument is the destination; the
//! handlers turn the positional list into an explicit `TransferRequest` before
//! calling the access layer.
//!
//! ```bash
//! scopefs cp %/seed.txt input.txt        # copy a fixture into the root
//! scopefs mv a.txt b.txt archive         # fan-in: archive must be a directory
//! scopefs rm -f build
//! scopefs chmod 755 bin/tool bin/other
//! ```
//!
use crate::access::mutate::{ChmodOptions, RemoveOptions};
use crate::access::transfer::TransferRequest;
use crate::access::FileAccess;
use crate::core::error::Result;
use crate::core::types::FileMode;
use clap::Parser;

/// Arguments shared by `scopefs cp` and `scopefs mv`.
#[derive(Parser, Debug)]
#[command(about = "Copy or move one or more sources to a destination")]
pub struct TransferArgs {
    /// Sources followed by the destination.
    #[arg(required = true, num_args = 2..)]
    paths: Vec<String>,
}

impl TransferArgs {
    fn into_request(mut self) -> TransferRequest {
        let destination = self.paths.pop().unwrap_or_default();
        TransferRequest::new(self.paths, destination)
    }
}

/// Arguments for `scopefs rm`.
#[derive(Parser, Debug)]
#[command(about = "Remove files and directory trees")]
pub struct RmArgs {
    #[arg(required = true, num_args = 1..)]
    paths: Vec<String>,

    /// Ignore paths that do not exist.
    #[arg(long, short)]
    force: bool,
}

/// Arguments for `scopefs chmod`.
#[derive(Parser, Debug)]
#[command(about = "Change the permission mode of existing paths")]
pub struct ChmodArgs {
    /// Octal mode, e.g. 755.
    mode: String,

    #[arg(required = true, num_args = 1..)]
    paths: Vec<String>,

    /// Also change every entry beneath directories.
    #[arg(long, short = 'R')]
    recursive: bool,
}

pub fn handle_cp(access: &FileAccess, args: TransferArgs) -> Result<()> {
    access.copy(&args.into_request())?;
    Ok(())
}

pub fn handle_mv(access: &FileAccess, args: TransferArgs) -> Result<()> {
    access.mv(&args.into_request())?;
    Ok(())
}

pub fn handle_rm(access: &FileAccess, args: RmArgs) -> Result<()> {
    let paths: Vec<&str> = args.paths.iter().map(String::as_str).collect();
    access.remove(&paths, RemoveOptions { force: args.force })?;
    Ok(())
}

pub fn handle_chmod(access: &FileAccess, args: ChmodArgs) -> Result<()> {
    let mode: FileMode = args.mode.parse()?;
    let paths: Vec<&str> = args.paths.iter().map(String::as_str).collect();
    access.chmod(
        mode,
        &paths,
        ChmodOptions {
            recursive: args.recursive,
        },
    )?;
    Ok(())
}
