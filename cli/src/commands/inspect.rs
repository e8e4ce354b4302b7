//! # scopefs Inspection Handlers
//!
//! File: cli/src/commands/inspect.rs
//!
//! ## Overview
//!
//! Read-only subcommands. None of them modifies the working root.
//!
//! ```bash
//! scopefs exists --file out/report.txt   # prints true / false
//! scopefs ls out                         # one entry per line, relative to the root
//! scopefs cat out/report.txt
//! scopefs size out/report.txt            # bytes (-H for KiB / MiB)
//! scopefs du out logs                    # allocated bytes across both trees
//! ```
//!
//! `size` and `du` are assertion helpers in the library; here their failures are
//! reported like any other error.
//!
use crate::access::FileAccess;
use crate::core::error::Result;
use crate::core::types::ByteSize;
use clap::Parser;
use tracing::info;

/// Arguments for `scopefs exists`.
#[derive(Parser, Debug)]
#[command(about = "Report whether a path exists (optionally with a given type)")]
pub struct ExistsArgs {
    /// Path relative to the working root.
    path: String,

    /// Only count regular files.
    #[arg(long, conflicts_with_all = ["dir", "executable"])]
    file: bool,

    /// Only count directories.
    #[arg(long, conflicts_with = "executable")]
    dir: bool,

    /// Only count regular files with an executable bit.
    #[arg(long)]
    executable: bool,
}

/// Arguments for `scopefs ls`.
#[derive(Parser, Debug)]
#[command(about = "List every entry beneath a directory, recursively")]
pub struct LsArgs {
    /// Directory to list (defaults to the working root).
    #[arg(default_value = ".")]
    dir: String,
}

/// Arguments for `scopefs cat`.
#[derive(Parser, Debug)]
#[command(about = "Print the lines of a file")]
pub struct CatArgs {
    path: String,
}

/// Arguments for `scopefs size`.
#[derive(Parser, Debug)]
#[command(about = "Print the size of a file in bytes")]
pub struct SizeArgs {
    path: String,

    /// Print the size as B / KiB / MiB instead of plain bytes.
    #[arg(long, short = 'H')]
    human: bool,
}

/// Arguments for `scopefs du`.
#[derive(Parser, Debug)]
#[command(about = "Print the combined disk usage of paths in bytes")]
pub struct DuArgs {
    #[arg(required = true, num_args = 1..)]
    paths: Vec<String>,

    /// Print the usage as B / KiB / MiB instead of plain bytes.
    #[arg(long, short = 'H')]
    human: bool,
}

pub fn handle_exists(access: &FileAccess, args: ExistsArgs) -> Result<()> {
    let found = if args.file {
        access.is_file(&args.path)
    } else if args.dir {
        access.is_directory(&args.path)
    } else if args.executable {
        access.is_executable(&args.path)
    } else {
        access.exists(&args.path)
    };
    info!("exists '{}': {}", args.path, found);
    println!("{}", found);
    Ok(())
}

pub fn handle_ls(access: &FileAccess, args: LsArgs) -> Result<()> {
    for entry in access.list_paths(&args.dir)? {
        println!("{}", entry);
    }
    Ok(())
}

pub fn handle_cat(access: &FileAccess, args: CatArgs) -> Result<()> {
    for line in access.read_lines(&args.path)? {
        println!("{}", line);
    }
    Ok(())
}

pub fn handle_size(access: &FileAccess, args: SizeArgs) -> Result<()> {
    let size = access.file_size(&args.path)?;
    print_size(size, args.human);
    Ok(())
}

pub fn handle_du(access: &FileAccess, args: DuArgs) -> Result<()> {
    let paths: Vec<&str> = args.paths.iter().map(String::as_str).collect();
    let usage = access.disk_usage(&paths)?;
    print_size(usage, args.human);
    Ok(())
}

fn print_size(size: ByteSize, human: bool) {
    if human {
        println!("{}", size.human());
    } else {
        println!("{}", size.bytes());
    }
}
