//! # scopefs Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error types used throughout scopefs. The access layer
//! reports failures through two distinct channels, and they are kept as two
//! separate types so callers can tell them apart:
//!
//! - `FilesystemError`: ordinary precondition and platform failures (missing
//!   source, wrong entry type, fixture protection, OS-level I/O errors).
//! - `AssertionFailure`: failures of the test-assertion helpers (`file_size`,
//!   `disk_usage`, `with_file_content`), reported through the injected
//!   `Expectation` before being returned.
//!
//! The application layer (configuration loading, the CLI) uses `Result<T>`, an
//! alias for `anyhow::Result<T>`, and attaches context with `anyhow::Context`.
//!
//! ## Examples
//!
//! ```rust
//! use scopefs::core::error::FilesystemError;
//!
//! let err = FilesystemError::InvalidArgument("Source 'a.txt' does not exist".into());
//! assert_eq!(err.to_string(), "Invalid argument: Source 'a.txt' does not exist");
//! ```
//!
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Ordinary failures of access-layer operations.
#[derive(Error, Debug)]
pub enum FilesystemError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Path '{}' already exists", path.display())]
    AlreadyExists { path: PathBuf },

    #[error("Fatal: {0}")]
    Fatal(String),

    #[error("Failed to {action} '{}': {source}", path.display())]
    Platform {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl FilesystemError {
    /// Wraps an I/O error raised by the platform adapter.
    pub fn platform(action: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        FilesystemError::Platform {
            action,
            path: path.into(),
            source,
        }
    }
}

/// Failures raised by the assertion-style helpers.
#[derive(Error, Debug)]
pub enum AssertionFailure {
    #[error("expected '{}' to be an existing path", path.display())]
    NotAnExistingPath { path: PathBuf },

    #[error("expected '{}' to be an existing file", path.display())]
    NotAFile { path: PathBuf },

    #[error(transparent)]
    Filesystem(#[from] FilesystemError),
}

/// Result of an ordinary access-layer operation.
pub type FsResult<T> = std::result::Result<T, FilesystemError>;

/// Result of an assertion-style helper.
pub type AssertResult<T> = std::result::Result<T, AssertionFailure>;

/// Type alias for Result using anyhow::Error, used by the application layer.
pub type Result<T> = anyhow::Result<T>;

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let invalid = FilesystemError::InvalidArgument("Missing source 'a'".to_string());
        assert_eq!(invalid.to_string(), "Invalid argument: Missing source 'a'");

        let exists = FilesystemError::AlreadyExists {
            path: PathBuf::from("/tmp/root/file.txt"),
        };
        assert_eq!(exists.to_string(), "Path '/tmp/root/file.txt' already exists");

        let platform = FilesystemError::platform(
            "remove",
            "/tmp/root/gone",
            io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        );
        assert_eq!(
            platform.to_string(),
            "Failed to remove '/tmp/root/gone': No such file or directory"
        );
    }

    #[test]
    fn test_assertion_display() {
        let missing = AssertionFailure::NotAnExistingPath {
            path: PathBuf::from("data.txt"),
        };
        assert_eq!(
            missing.to_string(),
            "expected 'data.txt' to be an existing path"
        );
        let not_file = AssertionFailure::NotAFile {
            path: PathBuf::from("dir"),
        };
        assert_eq!(not_file.to_string(), "expected 'dir' to be an existing file");
    }
}
