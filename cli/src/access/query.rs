//! Existence and type queries. A missing path is never an error here: every
//! query simply answers `false` for it.
//!
use super::FileAccess;
use crate::common::fs::platform::Platform;
use std::path::Path;

impl<P: Platform> FileAccess<P> {
    pub fn exists(&self, reference: &str) -> bool {
        self.platform.exists(&self.expand(reference))
    }

    pub fn is_file(&self, reference: &str) -> bool {
        self.platform.is_file(&self.expand(reference))
    }

    pub fn is_directory(&self, reference: &str) -> bool {
        self.platform.is_directory(&self.expand(reference))
    }

    /// True only for a regular file with an executable bit set.
    pub fn is_executable(&self, reference: &str) -> bool {
        self.platform.is_executable(&self.expand(reference))
    }

    /// Whether `reference` is written as an absolute path.
    ///
    /// Resolution would make every reference absolute, so this looks at the
    /// reference as the caller wrote it.
    pub fn is_absolute(&self, reference: &str) -> bool {
        self.platform.is_absolute_path(Path::new(reference))
    }

    /// Whether `reference` is written relative to the working root.
    pub fn is_relative(&self, reference: &str) -> bool {
        self.platform.is_relative_path(Path::new(reference))
    }
}
