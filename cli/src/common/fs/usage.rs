//! # scopefs Disk Usage Measurement
//!
//! File: cli/src/common/fs/usage.rs
//!
//! ## Overview
//!
//! Measures how much space files and directory trees occupy. `disk_usage` walks
//! each path with `walkdir` and sums the allocated size of every entry it finds,
//! directories included. On Unix the allocated size is the block count reported
//! by `stat` (always in 512-byte units); elsewhere it falls back to the logical
//! length.
//!
use crate::core::error::{FilesystemError, FsResult};
use crate::core::types::ByteSize;
use std::fs::Metadata;
use std::path::Path;
use tracing::debug;
use walkdir::WalkDir;

#[cfg(unix)]
const STAT_BLOCK_SIZE: u64 = 512;

/// Sums the on-disk usage of every path and everything beneath it.
pub fn disk_usage(paths: &[&Path]) -> FsResult<ByteSize> {
    let mut total = ByteSize::default();
    for path in paths {
        for entry in WalkDir::new(path).follow_links(false) {
            let entry = entry.map_err(|e| {
                let at = e.path().unwrap_or(*path).to_path_buf();
                FilesystemError::platform("walk", at, e.into())
            })?;
            let metadata = entry
                .metadata()
                .map_err(|e| FilesystemError::platform("stat", entry.path(), e.into()))?;
            total = total + allocated(&metadata);
        }
        debug!("Disk usage after {:?}: {}", path, total);
    }
    Ok(total)
}

/// Returns the logical size of the file at `path`.
pub fn file_size(path: &Path) -> FsResult<ByteSize> {
    let metadata =
        std::fs::metadata(path).map_err(|e| FilesystemError::platform("stat", path, e))?;
    Ok(ByteSize::new(metadata.len()))
}

#[cfg(unix)]
fn allocated(metadata: &Metadata) -> ByteSize {
    use std::os::unix::fs::MetadataExt;
    ByteSize::new(metadata.blocks() * STAT_BLOCK_SIZE)
}

#[cfg(not(unix))]
fn allocated(metadata: &Metadata) -> ByteSize {
    ByteSize::new(metadata.len())
}
