//! # scopefs Filesystem Utilities (`common::fs`)
//!
//! File: cli/src/common/fs/mod.rs
//!
//! ## Overview
//!
//! Host-side building blocks of the platform adapter. Nothing in here knows about
//! the working root or fixtures; every function takes an already-resolved path.
//!
//! - **`platform`**: the `Platform` capability trait and `HostPlatform`.
//! - **`io`**: directory creation, whole-file writes, appends and line reads.
//! - **`copy`**: `cp -r` / `mv` style copy and move, using `fs_extra` for trees.
//! - **`usage`**: disk usage and file size measurement via `walkdir`.
//!

/// Basic file I/O (e.g., `ensure_dir_exists`, `create_file`, `append_lines_to_file`).
pub mod io;
/// Copy and move primitives (e.g., `copy_entry`, `move_entry`).
pub mod copy;
/// The capability interface consumed by the access layer.
pub mod platform;
/// Size measurement (e.g., `disk_usage`, `file_size`).
pub mod usage;
