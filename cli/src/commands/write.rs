//! # scopefs Write Handlers
//!
//! File: cli/src/commands/write.rs
//!
//! ## Overview
//!
//! Subcommands that create files and directories or add content to them.
//!
//! ```bash
//! scopefs write notes.txt "first line"            # fails if notes.txt exists
//! scopefs write --force notes.txt "replaced"
//! scopefs write --size 1048576 blob.bin           # zero-filled, exactly 1 MiB
//! scopefs append --lines notes.txt "next line"
//! scopefs mkdir out/reports
//! scopefs touch --mode 600 --mtime 2024-01-01T00:00:00Z a.txt b/c.txt
//! ```
//!
use crate::access::FileAccess;
use crate::core::error::Result;
use crate::core::types::{FileMode, TouchOptions};
use anyhow::Context;
use chrono::{DateTime, Utc};
use clap::Parser;

/// Arguments for `scopefs write`.
#[derive(Parser, Debug)]
#[command(about = "Write content to a file, creating parent directories")]
pub struct WriteArgs {
    path: String,

    /// Content written verbatim (no newline is added).
    #[arg(required_unless_present = "size", conflicts_with = "size")]
    content: Option<String>,

    /// Replace the file if it already exists.
    #[arg(long, short)]
    force: bool,

    /// Write a zero-filled file of exactly this many bytes instead (always replaces).
    #[arg(long)]
    size: Option<u64>,
}

/// Arguments for `scopefs append`.
#[derive(Parser, Debug)]
#[command(about = "Append content to a file")]
pub struct AppendArgs {
    path: String,
    content: String,

    /// Start the content on a new line; the file must already exist.
    #[arg(long)]
    lines: bool,
}

/// Arguments for `scopefs mkdir`.
#[derive(Parser, Debug)]
#[command(about = "Create a directory and any missing ancestors")]
pub struct MkdirArgs {
    path: String,
}

/// Arguments for `scopefs touch`.
#[derive(Parser, Debug)]
#[command(about = "Create empty files or update their modification time")]
pub struct TouchArgs {
    #[arg(required = true, num_args = 1..)]
    paths: Vec<String>,

    /// Octal permission mode to apply, e.g. 644.
    #[arg(long)]
    mode: Option<String>,

    /// RFC 3339 modification time to set instead of now.
    #[arg(long)]
    mtime: Option<String>,
}

pub fn handle_write(access: &FileAccess, args: WriteArgs) -> Result<()> {
    match (args.size, args.content) {
        (Some(size), _) => access.write_fixed_size_file(&args.path, size)?,
        (None, Some(content)) => access.write_file(&args.path, &content, args.force)?,
        (None, None) => anyhow::bail!("Either content or --size is required"),
    }
    Ok(())
}

pub fn handle_append(access: &FileAccess, args: AppendArgs) -> Result<()> {
    if args.lines {
        access.append_lines_to_file(&args.path, &args.content)?;
    } else {
        access.append_to_file(&args.path, &args.content)?;
    }
    Ok(())
}

pub fn handle_mkdir(access: &FileAccess, args: MkdirArgs) -> Result<()> {
    access.create_directory(&args.path)?;
    Ok(())
}

pub fn handle_touch(access: &FileAccess, args: TouchArgs) -> Result<()> {
    let options = TouchOptions {
        mode: args.mode.as_deref().map(str::parse::<FileMode>).transpose()?,
        mtime: args
            .mtime
            .as_deref()
            .map(parse_mtime)
            .transpose()?,
    };
    let paths: Vec<&str> = args.paths.iter().map(String::as_str).collect();
    access.touch(&paths, &options)?;
    Ok(())
}

fn parse_mtime(raw: &str) -> Result<DateTime<Utc>> {
    let parsed = DateTime::parse_from_rfc3339(raw)
        .with_context(|| format!("Invalid --mtime '{}', expected RFC 3339", raw))?;
    Ok(parsed.with_timezone(&Utc))
}
