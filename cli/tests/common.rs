//! # scopefs Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration test crates in `cli/tests/`. Each test file
//! declares `mod common;` and picks what it needs.
//!

// Not every test crate uses every helper.
#![allow(dead_code)]

pub use assert_cmd::Command;
use scopefs::access::scope::Scope;
use scopefs::access::FileAccess;
use std::path::Path;

/// Returns a `Command` for the `scopefs` binary with the scope environment
/// variables cleared, so a developer's shell settings cannot leak into a test.
///
/// ## Panics
/// Panics if the `scopefs` binary cannot be found via `Command::cargo_bin`.
pub fn scopefs_cmd() -> Command {
    let mut cmd = Command::cargo_bin("scopefs").expect("Failed to find scopefs binary for testing");
    cmd.env_remove("SCOPEFS_ROOT")
        .env_remove("SCOPEFS_FIXTURES_PREFIX")
        .env_remove("SCOPEFS_FIXTURES_DIR")
        .env_remove("RUST_LOG");
    cmd
}

/// Like `scopefs_cmd`, with `--root` pointing at `root` and the process running
/// from inside it.
pub fn scoped_cmd(root: &Path) -> Command {
    let mut cmd = scopefs_cmd();
    cmd.current_dir(root).arg("--root").arg(root);
    cmd
}

/// A `FileAccess` rooted at `root` using the default `%` fixture prefix.
pub fn access_at(root: &Path) -> FileAccess {
    FileAccess::new(Scope::new(root, "%"))
}
