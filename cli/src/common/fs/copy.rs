//! # scopefs Filesystem Copy and Move Operations
//!
//! File: cli/src/common/fs/copy.rs
//!
//! ## Overview
//!
//! This module provides the copy and move primitives behind the platform adapter.
//! Both follow `cp -r` / `mv` placement rules: when the destination is an existing
//! directory the source lands inside it under its own name, otherwise the source
//! is placed at exactly the destination path (which renames it).
//!
//! ## Architecture
//!
//! - Files are copied with `std::fs::copy`.
//! - Directories are copied recursively with `fs_extra::dir::copy`, using
//!   `copy_inside` so a missing destination becomes the copy itself.
//! - Moves try `std::fs::rename` first and fall back to `fs_extra`'s move helpers
//!   when the rename is refused (for example across filesystems).
//!
//! Neither function creates the destination's parent; callers do that.
//!
use crate::core::error::{FilesystemError, FsResult};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Copies a file or directory tree from `source` to `destination`.
pub fn copy_entry(source: &Path, destination: &Path) -> FsResult<()> {
    info!("Copying {:?} to {:?}", source, destination);
    if source.is_dir() {
        let mut options = fs_extra::dir::CopyOptions::new();
        options.overwrite = true;
        options.copy_inside = true;
        fs_extra::dir::copy(source, destination, &options)
            .map_err(|e| FilesystemError::platform("copy directory", source, into_io(e)))?;
    } else {
        let target = placement(source, destination)?;
        fs::copy(source, &target).map_err(|e| FilesystemError::platform("copy file", source, e))?;
        debug!("Copied file {:?} to {:?}", source, target);
    }
    Ok(())
}

/// Moves a file or directory tree from `source` to `destination`.
pub fn move_entry(source: &Path, destination: &Path) -> FsResult<()> {
    info!("Moving {:?} to {:?}", source, destination);
    let target = placement(source, destination)?;
    match fs::rename(source, &target) {
        Ok(()) => {
            debug!("Renamed {:?} to {:?}", source, target);
            Ok(())
        }
        Err(rename_err) => {
            warn!(
                "Rename of {:?} failed ({}), falling back to copy and delete",
                source, rename_err
            );
            let result = if source.is_dir() {
                let mut options = fs_extra::dir::CopyOptions::new();
                options.copy_inside = true;
                fs_extra::dir::move_dir(source, &target, &options).map(|_| ())
            } else {
                let options = fs_extra::file::CopyOptions::new();
                fs_extra::file::move_file(source, &target, &options).map(|_| ())
            };
            result.map_err(|e| FilesystemError::platform("move", source, into_io(e)))
        }
    }
}

/// Resolves where `source` ends up: inside `destination` if it is a directory.
fn placement(source: &Path, destination: &Path) -> FsResult<PathBuf> {
    if destination.is_dir() {
        let name = source.file_name().ok_or_else(|| {
            FilesystemError::InvalidArgument(format!(
                "Source '{}' has no file name",
                source.display()
            ))
        })?;
        Ok(destination.join(name))
    } else {
        Ok(destination.to_path_buf())
    }
}

fn into_io(err: fs_extra::error::Error) -> io::Error {
    io::Error::other(err.to_string())
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_copy_file_renames() -> FsResult<()> {
        let dir = tempdir().unwrap();
        let source = dir.path().join("a.txt");
        fs::write(&source, "alpha").unwrap();
        copy_entry(&source, &dir.path().join("b.txt"))?;
        assert_eq!(fs::read_to_string(dir.path().join("b.txt")).unwrap(), "alpha");
        assert!(source.exists());
        Ok(())
    }

    #[test]
    fn test_copy_file_into_directory() -> FsResult<()> {
        let dir = tempdir().unwrap();
        let source = dir.path().join("a.txt");
        fs::write(&source, "alpha").unwrap();
        fs::create_dir(dir.path().join("out")).unwrap();
        copy_entry(&source, &dir.path().join("out"))?;
        assert!(dir.path().join("out/a.txt").is_file());
        Ok(())
    }

    #[test]
    fn test_copy_directory_tree() -> FsResult<()> {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("src/nested")).unwrap();
        fs::write(dir.path().join("src/nested/deep.txt"), "deep").unwrap();

        copy_entry(&dir.path().join("src"), &dir.path().join("copy"))?;
        assert_eq!(
            fs::read_to_string(dir.path().join("copy/nested/deep.txt")).unwrap(),
            "deep"
        );

        fs::create_dir(dir.path().join("existing")).unwrap();
        copy_entry(&dir.path().join("src"), &dir.path().join("existing"))?;
        assert!(dir.path().join("existing/src/nested/deep.txt").is_file());
        Ok(())
    }

    #[test]
    fn test_move_file_and_directory() -> FsResult<()> {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.txt"), "alpha").unwrap();
        move_entry(&dir.path().join("a.txt"), &dir.path().join("b.txt"))?;
        assert!(!dir.path().join("a.txt").exists());
        assert!(dir.path().join("b.txt").is_file());

        fs::create_dir_all(dir.path().join("tree/leaf")).unwrap();
        fs::create_dir(dir.path().join("target")).unwrap();
        move_entry(&dir.path().join("tree"), &dir.path().join("target"))?;
        assert!(dir.path().join("target/tree/leaf").is_dir());
        assert!(!dir.path().join("tree").exists());
        Ok(())
    }

    #[test]
    fn test_copy_missing_source_fails() {
        let dir = tempdir().unwrap();
        let result = copy_entry(&dir.path().join("nope"), &dir.path().join("out"));
        assert!(matches!(result, Err(FilesystemError::Platform { .. })));
    }
}
