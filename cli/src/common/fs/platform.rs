//! # scopefs Platform Adapter
//!
//! File: cli/src/common/fs/platform.rs
//!
//! ## Overview
//!
//! The `Platform` trait is the narrow capability set the access layer consumes for
//! every raw filesystem call. All paths it receives are already resolved to
//! absolute paths; it performs no scoping and no precondition checks of its own.
//! Failures are reported as `FilesystemError::Platform` and are never retried.
//!
//! `HostPlatform` implements the trait on top of `std::fs` and the sibling `io`,
//! `copy` and `usage` modules.
//!
use crate::common::fs::{copy, io, usage};
use crate::core::error::{FilesystemError, FsResult};
use crate::core::types::{ByteSize, FileMode, TouchOptions};
use std::fs::{self, OpenOptions};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use tracing::{debug, info};
use walkdir::WalkDir;

/// Raw filesystem capabilities used by the access layer.
pub trait Platform {
    fn exists(&self, path: &Path) -> bool;
    fn is_file(&self, path: &Path) -> bool;
    fn is_directory(&self, path: &Path) -> bool;
    /// Regular file with at least one executable bit set.
    fn is_executable(&self, path: &Path) -> bool;
    fn is_absolute_path(&self, path: &Path) -> bool;
    fn is_relative_path(&self, path: &Path) -> bool;

    /// Creates `path` and any missing ancestors.
    fn mkdir(&self, path: &Path) -> FsResult<()>;
    /// Copies with `cp -r` placement rules.
    fn copy(&self, source: &Path, destination: &Path) -> FsResult<()>;
    /// Moves with `mv` placement rules.
    fn mv(&self, source: &Path, destination: &Path) -> FsResult<()>;
    /// Recursive remove; `force` ignores missing targets.
    fn remove(&self, path: &Path, force: bool) -> FsResult<()>;
    fn chmod(&self, path: &Path, mode: FileMode, recursive: bool) -> FsResult<()>;
    /// Creates an empty file or updates the modification time of an existing one.
    fn touch(&self, path: &Path, options: &TouchOptions) -> FsResult<()>;

    fn create_file(&self, path: &Path, content: &[u8], fail_if_exists: bool) -> FsResult<()>;
    fn create_fixed_size_file(&self, path: &Path, size: u64, fail_if_exists: bool)
        -> FsResult<()>;
    fn append(&self, path: &Path, content: &[u8]) -> FsResult<()>;
    fn append_lines(&self, path: &Path, content: &[u8]) -> FsResult<()>;
    fn read_lines(&self, path: &Path) -> FsResult<Vec<String>>;
    /// Every entry beneath `dir`, in a deterministic order.
    fn enumerate(&self, dir: &Path) -> FsResult<Vec<PathBuf>>;

    fn determine_disk_usage(&self, paths: &[&Path]) -> FsResult<ByteSize>;
    fn determine_file_size(&self, path: &Path) -> FsResult<ByteSize>;
}

/// The platform adapter backed by the host operating system.
#[derive(Debug, Default, Clone, Copy)]
pub struct HostPlatform;

impl Platform for HostPlatform {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn is_directory(&self, path: &Path) -> bool {
        path.is_dir()
    }

    #[cfg(unix)]
    fn is_executable(&self, path: &Path) -> bool {
        use std::os::unix::fs::PermissionsExt;
        match fs::metadata(path) {
            Ok(meta) => meta.is_file() && meta.permissions().mode() & 0o111 != 0,
            Err(_) => false,
        }
    }

    #[cfg(not(unix))]
    fn is_executable(&self, path: &Path) -> bool {
        path.is_file()
            && path
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("exe"))
    }

    fn is_absolute_path(&self, path: &Path) -> bool {
        path.is_absolute()
    }

    fn is_relative_path(&self, path: &Path) -> bool {
        path.is_relative()
    }

    fn mkdir(&self, path: &Path) -> FsResult<()> {
        io::ensure_dir_exists(path)
    }

    fn copy(&self, source: &Path, destination: &Path) -> FsResult<()> {
        copy::copy_entry(source, destination)
    }

    fn mv(&self, source: &Path, destination: &Path) -> FsResult<()> {
        copy::move_entry(source, destination)
    }

    fn remove(&self, path: &Path, force: bool) -> FsResult<()> {
        let result = match fs::symlink_metadata(path) {
            Ok(meta) if meta.is_dir() => fs::remove_dir_all(path),
            Ok(_) => fs::remove_file(path),
            Err(e) => Err(e),
        };
        match result {
            Ok(()) => {
                info!("Removed {:?}", path);
                Ok(())
            }
            Err(e) if force && e.kind() == ErrorKind::NotFound => {
                debug!("Nothing to remove at {:?}", path);
                Ok(())
            }
            Err(e) => Err(FilesystemError::platform("remove", path, e)),
        }
    }

    fn chmod(&self, path: &Path, mode: FileMode, recursive: bool) -> FsResult<()> {
        if recursive {
            for entry in WalkDir::new(path).follow_links(false) {
                let entry =
                    entry.map_err(|e| FilesystemError::platform("walk", path, e.into()))?;
                set_mode(entry.path(), mode)?;
            }
        } else {
            set_mode(path, mode)?;
        }
        info!("Changed mode of {:?} to {}", path, mode);
        Ok(())
    }

    fn touch(&self, path: &Path, options: &TouchOptions) -> FsResult<()> {
        io::ensure_parent_exists(path)?;
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| FilesystemError::platform("touch", path, e))?;
        let mtime = options
            .mtime
            .map(SystemTime::from)
            .unwrap_or_else(SystemTime::now);
        file.set_modified(mtime)
            .map_err(|e| FilesystemError::platform("set modification time of", path, e))?;
        drop(file);
        if let Some(mode) = options.mode {
            set_mode(path, mode)?;
        }
        debug!("Touched {:?}", path);
        Ok(())
    }

    fn create_file(&self, path: &Path, content: &[u8], fail_if_exists: bool) -> FsResult<()> {
        io::create_file(path, content, fail_if_exists)
    }

    fn create_fixed_size_file(
        &self,
        path: &Path,
        size: u64,
        fail_if_exists: bool,
    ) -> FsResult<()> {
        io::create_fixed_size_file(path, size, fail_if_exists)
    }

    fn append(&self, path: &Path, content: &[u8]) -> FsResult<()> {
        io::append_to_file(path, content)
    }

    fn append_lines(&self, path: &Path, content: &[u8]) -> FsResult<()> {
        io::append_lines_to_file(path, content)
    }

    fn read_lines(&self, path: &Path) -> FsResult<Vec<String>> {
        io::read_lines(path)
    }

    fn enumerate(&self, dir: &Path) -> FsResult<Vec<PathBuf>> {
        io::enumerate_tree(dir)
    }

    fn determine_disk_usage(&self, paths: &[&Path]) -> FsResult<ByteSize> {
        usage::disk_usage(paths)
    }

    fn determine_file_size(&self, path: &Path) -> FsResult<ByteSize> {
        usage::file_size(path)
    }
}

#[cfg(unix)]
fn set_mode(path: &Path, mode: FileMode) -> FsResult<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(mode.bits()))
        .map_err(|e| FilesystemError::platform("change mode of", path, e))
}

#[cfg(not(unix))]
fn set_mode(path: &Path, mode: FileMode) -> FsResult<()> {
    let mut perms = fs::metadata(path)
        .map_err(|e| FilesystemError::platform("stat", path, e))?
        .permissions();
    perms.set_readonly(!mode.is_writable());
    fs::set_permissions(path, perms)
        .map_err(|e| FilesystemError::platform("change mode of", path, e))
}
