//! # scopefs Filesystem Access Layer (`access`)
//!
//! File: cli/src/access/mod.rs
//!
//! ## Overview
//!
//! `FileAccess` is the safety layer a test harness talks to. Every path reference
//! it receives is resolved through its `Scope` before anything reaches the
//! `Platform` adapter, and every mutating operation validates all of its
//! preconditions (existence, entry type, fixture protection) across the whole
//! argument set before the first side effect.
//!
//! ## Architecture
//!
//! The operations are grouped by family, each in its own submodule adding an
//! `impl` block to `FileAccess`:
//!
//! - **`scope`**: the Scope Resolver (`Scope::expand`, fixture detection).
//! - **`query`**: existence and type queries (`exists`, `is_file`, ...).
//! - **`listing`**: recursive listings relative to the working root.
//! - **`content`**: reading files as lines, `with_file_content`.
//! - **`mutate`**: writes, appends, `touch`, directory creation, `remove`, `chmod`.
//! - **`transfer`**: `copy` and `mv` with their shared validation pipeline.
//! - **`size`**: `file_size` and `disk_usage`.
//!
//! Ordinary failures come back as `FilesystemError`. The assertion helpers
//! (`with_file_content`, `file_size`, `disk_usage`) report through the injected
//! `Expectation` and return `AssertionFailure`.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use scopefs::access::{scope::Scope, FileAccess};
//!
//! # fn run() -> scopefs::core::error::FsResult<()> {
//! let access = FileAccess::new(Scope::new("/tmp/scenario", "%"));
//! access.write_file("notes/today.txt", "hello\n", false)?;
//! assert!(access.is_file("notes/today.txt"));
//! # Ok(())
//! # }
//! ```
//!
pub mod content;
pub mod listing;
pub mod mutate;
pub mod query;
pub mod scope;
pub mod size;
pub mod transfer;

use crate::common::fs::platform::{HostPlatform, Platform};
use crate::core::assertion::{Expectation, ReportFailure};
use crate::core::error::{FilesystemError, FsResult};
use scope::Scope;
use std::fmt;
use std::path::PathBuf;

/// Scoped, validating front end over a `Platform` adapter.
pub struct FileAccess<P: Platform = HostPlatform> {
    scope: Scope,
    platform: P,
    expectation: Box<dyn Expectation>,
}

impl FileAccess<HostPlatform> {
    /// Access layer over the host filesystem; assertion failures are only returned.
    pub fn new(scope: Scope) -> Self {
        FileAccess::with_platform(scope, HostPlatform)
    }
}

impl<P: Platform> FileAccess<P> {
    pub fn with_platform(scope: Scope, platform: P) -> Self {
        FileAccess {
            scope,
            platform,
            expectation: Box::new(ReportFailure),
        }
    }

    /// Replaces the mechanism assertion failures are reported through.
    pub fn with_expectation(mut self, expectation: impl Expectation + 'static) -> Self {
        self.expectation = Box::new(expectation);
        self
    }

    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    /// Resolves `reference` against the working root.
    pub fn expand(&self, reference: &str) -> PathBuf {
        self.scope.expand(reference)
    }

    /// Rejects `reference` when it names a fixture; `role` describes its use.
    ///
    /// Both the spelling (`<prefix>...`) and the resolved location are checked, so
    /// absolute or `./`-prefixed paths into the fixtures cannot slip through.
    fn guard_fixture(&self, reference: &str, role: &str) -> FsResult<()> {
        if self.scope.is_fixture(reference) {
            return Err(FilesystemError::InvalidArgument(format!(
                "Using a fixture as {} is not allowed: '{}' starts with '{}'",
                role,
                reference,
                self.scope.fixtures_prefix()
            )));
        }
        if self.scope.is_within_fixtures(&self.expand(reference)) {
            return Err(FilesystemError::InvalidArgument(format!(
                "Using a fixture as {} is not allowed: '{}' resolves into the fixtures",
                role, reference
            )));
        }
        Ok(())
    }
}

impl<P: Platform + fmt::Debug> fmt::Debug for FileAccess<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileAccess")
            .field("scope", &self.scope)
            .field("platform", &self.platform)
            .finish_non_exhaustive()
    }
}
