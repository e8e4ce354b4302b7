//! # scopefs Filesystem I/O Operations
//!
//! File: cli/src/common/fs/io.rs
//!
//! ## Overview
//!
//! This module centralizes the file input/output primitives the host platform
//! adapter is built from. Each function is a thin wrapper around `std::fs` that
//! turns an `io::Error` into a `FilesystemError::Platform` naming the action and
//! the path that failed.
//!
//! ## Architecture
//!
//! - **`ensure_dir_exists`**: `mkdir -p`, failing if the path exists but is not a directory.
//! - **`create_file`**: writes content verbatim, optionally refusing to replace an existing file.
//! - **`create_fixed_size_file`**: creates a zero-filled file of an exact length.
//! - **`append_to_file`**: appends content verbatim, creating the file if needed.
//! - **`append_lines_to_file`**: appends content, inserting a `\n` first when the
//!   existing file does not already end with one.
//! - **`read_lines`**: reads a file as lines with `\n` / `\r\n` terminators stripped.
//! - **`enumerate_tree`**: lists every entry beneath a directory, depth-first, sorted by name.
//!
//! Every file handle is opened, used and dropped inside the call that needs it.
//!
use crate::core::error::{FilesystemError, FsResult};
use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, ErrorKind, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;

/// Ensures that a directory exists at the specified path, creating ancestors as needed.
///
/// # Errors
///
/// Returns an `Err` if the path exists but is not a directory, or if creating it fails.
pub fn ensure_dir_exists(path: &Path) -> FsResult<()> {
    if !path.exists() {
        fs::create_dir_all(path).map_err(|e| FilesystemError::platform("create directory", path, e))?;
        info!("Created directory: {:?}", path);
    } else if !path.is_dir() {
        return Err(FilesystemError::InvalidArgument(format!(
            "Path exists but is not a directory: {}",
            path.display()
        )));
    } else {
        debug!("Directory already exists: {:?}", path);
    }
    Ok(())
}

/// Creates the parent directory of `path`, if it has one.
pub fn ensure_parent_exists(path: &Path) -> FsResult<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => ensure_dir_exists(parent),
        _ => Ok(()),
    }
}

/// Writes `content` to `path`, creating parent directories first.
///
/// With `fail_if_exists` the file is created exclusively and an existing file
/// yields `FilesystemError::AlreadyExists`; otherwise it is truncated and replaced.
pub fn create_file(path: &Path, content: &[u8], fail_if_exists: bool) -> FsResult<()> {
    ensure_parent_exists(path)?;
    let mut options = OpenOptions::new();
    options.write(true);
    if fail_if_exists {
        options.create_new(true);
    } else {
        options.create(true).truncate(true);
    }
    let mut file = options.open(path).map_err(|e| {
        if e.kind() == ErrorKind::AlreadyExists {
            FilesystemError::AlreadyExists {
                path: path.to_path_buf(),
            }
        } else {
            FilesystemError::platform("create file", path, e)
        }
    })?;
    file.write_all(content)
        .map_err(|e| FilesystemError::platform("write to file", path, e))?;
    info!("Wrote {} bytes to file: {:?}", content.len(), path);
    Ok(())
}

/// Creates a file of exactly `size` zero bytes.
pub fn create_fixed_size_file(path: &Path, size: u64, fail_if_exists: bool) -> FsResult<()> {
    create_file(path, &[], fail_if_exists)?;
    let file = OpenOptions::new()
        .write(true)
        .open(path)
        .map_err(|e| FilesystemError::platform("open file", path, e))?;
    file.set_len(size)
        .map_err(|e| FilesystemError::platform("resize file", path, e))?;
    info!("Created {}-byte file: {:?}", size, path);
    Ok(())
}

/// Appends `content` verbatim, creating the file (but not its parents) if absent.
pub fn append_to_file(path: &Path, content: &[u8]) -> FsResult<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| FilesystemError::platform("open file for appending", path, e))?;
    file.write_all(content)
        .map_err(|e| FilesystemError::platform("append to file", path, e))?;
    debug!("Appended {} bytes to file: {:?}", content.len(), path);
    Ok(())
}

/// Appends `content` so that it starts on its own line.
///
/// The last byte of the existing file is inspected by seeking from the end. An
/// empty file or one already ending in `\n` (which covers `\r\n`) gets the content
/// as-is; anything else gets a `\n` separator first.
pub fn append_lines_to_file(path: &Path, content: &[u8]) -> FsResult<()> {
    let mut file = OpenOptions::new()
        .read(true)
        .append(true)
        .open(path)
        .map_err(|e| FilesystemError::platform("open file for appending", path, e))?;
    let len = file
        .metadata()
        .map_err(|e| FilesystemError::platform("inspect file", path, e))?
        .len();

    let needs_separator = if len == 0 {
        false
    } else {
        let mut last = [0u8; 1];
        file.seek(SeekFrom::End(-1))
            .and_then(|_| file.read_exact(&mut last))
            .map_err(|e| FilesystemError::platform("read end of file", path, e))?;
        last[0] != b'\n'
    };

    if needs_separator {
        file.write_all(b"\n")
            .map_err(|e| FilesystemError::platform("append to file", path, e))?;
    }
    file.write_all(content)
        .map_err(|e| FilesystemError::platform("append to file", path, e))?;
    debug!(
        "Appended {} bytes to file {:?} (separator inserted: {})",
        content.len(),
        path,
        needs_separator
    );
    Ok(())
}

/// Reads a file as lines, stripping any trailing `\n` or `\r\n` from each.
pub fn read_lines(path: &Path) -> FsResult<Vec<String>> {
    let file = File::open(path).map_err(|e| FilesystemError::platform("open file", path, e))?;
    BufReader::new(file)
        .lines()
        .map(|line| line.map_err(|e| FilesystemError::platform("read file", path, e)))
        .collect()
}

/// Lists every file and directory beneath `dir` (excluding `dir` itself).
///
/// The walk is depth-first with siblings sorted by file name, so the order is
/// stable across runs. Symbolic links are reported but not followed.
pub fn enumerate_tree(dir: &Path) -> FsResult<Vec<PathBuf>> {
    let mut entries = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).sort_by_file_name() {
        let entry = entry.map_err(|e| {
            let at = e.path().unwrap_or(dir).to_path_buf();
            FilesystemError::platform("enumerate", at, e.into())
        })?;
        entries.push(entry.into_path());
    }
    debug!("Enumerated {} entries under {:?}", entries.len(), dir);
    Ok(entries)
}
