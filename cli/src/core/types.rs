//! # scopefs Value Types
//!
//! File: cli/src/core/types.rs
//!
//! ## Overview
//!
//! Small value types shared by the access layer and the platform adapter:
//! - `FileMode`: a permission mode, parsed from octal text at the boundary.
//! - `ByteSize`: a byte count returned by the size queries.
//! - `TouchOptions`: the mode and timestamp overrides `touch` passes through.
//!
use crate::core::error::FilesystemError;
use chrono::{DateTime, Utc};
use std::fmt;
use std::str::FromStr;

/// Unix permission bits, e.g. `0o755`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FileMode(u32);

impl FileMode {
    pub fn new(bits: u32) -> Self {
        FileMode(bits & 0o7777)
    }

    pub fn bits(self) -> u32 {
        self.0
    }

    /// True if any of the owner, group or other write bits is set.
    pub fn is_writable(self) -> bool {
        self.0 & 0o222 != 0
    }
}

impl From<u32> for FileMode {
    fn from(bits: u32) -> Self {
        FileMode::new(bits)
    }
}

/// Parses octal digits such as `"755"`, `"0644"` or `"0o700"`.
impl FromStr for FileMode {
    type Err = FilesystemError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed.strip_prefix("0o").unwrap_or(trimmed);
        if digits.is_empty() || digits.len() > 5 {
            return Err(FilesystemError::InvalidArgument(format!(
                "'{}' is not an octal file mode",
                s
            )));
        }
        let bits = u32::from_str_radix(digits, 8).map_err(|_| {
            FilesystemError::InvalidArgument(format!("'{}' is not an octal file mode", s))
        })?;
        if bits > 0o7777 {
            return Err(FilesystemError::InvalidArgument(format!(
                "File mode '{}' is out of range",
                s
            )));
        }
        Ok(FileMode(bits))
    }
}

impl fmt::Display for FileMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:o}", self.0)
    }
}

/// A number of bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ByteSize(u64);

impl ByteSize {
    pub fn new(bytes: u64) -> Self {
        ByteSize(bytes)
    }

    pub fn bytes(self) -> u64 {
        self.0
    }

    pub fn kibibytes(self) -> f64 {
        self.0 as f64 / 1024.0
    }

    pub fn mebibytes(self) -> f64 {
        self.0 as f64 / (1024.0 * 1024.0)
    }

    /// Short human-readable form: bytes below 1 KiB, then KiB, then MiB.
    pub fn human(self) -> String {
        if self.0 < 1024 {
            format!("{} B", self.0)
        } else if self.0 < 1024 * 1024 {
            format!("{:.1} KiB", self.kibibytes())
        } else {
            format!("{:.1} MiB", self.mebibytes())
        }
    }
}

impl std::ops::Add for ByteSize {
    type Output = ByteSize;

    fn add(self, rhs: ByteSize) -> ByteSize {
        ByteSize(self.0.saturating_add(rhs.0))
    }
}

impl std::iter::Sum for ByteSize {
    fn sum<I: Iterator<Item = ByteSize>>(iter: I) -> ByteSize {
        iter.fold(ByteSize::default(), |acc, size| acc + size)
    }
}

impl fmt::Display for ByteSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} bytes", self.0)
    }
}

/// Overrides applied by `touch`. Passed to the platform adapter unmodified.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TouchOptions {
    /// Permission mode to set on every touched file.
    pub mode: Option<FileMode>,
    /// Modification time to set instead of "now".
    pub mtime: Option<DateTime<Utc>>,
}
