//! # Scope Resolver
//!
//! File: cli/src/access/scope.rs
//!
//! ## Overview
//!
//! A `Scope` is the resolution context of one harness session: the Working Root
//! every relative reference is anchored at, the Fixture Path Prefix that marks
//! read-only templates, and optionally the directory fixture references live in.
//! It is passed explicitly to the access layer, so several isolated scopes can
//! coexist in one process.
//!
//! `expand` is pure: it never touches the disk and never fails. The result is
//! normalized lexically (`.` dropped, `..` folded into its parent).
//!
use std::path::{Component, Path, PathBuf};
use tracing::{debug, warn};

/// Resolution context for path references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scope {
    working_root: PathBuf,
    fixtures_prefix: String,
    fixtures_directory: Option<PathBuf>,
}

impl Scope {
    /// Creates a scope rooted at `working_root`. The root should be absolute.
    pub fn new(working_root: impl Into<PathBuf>, fixtures_prefix: impl Into<String>) -> Self {
        Scope {
            working_root: normalize(&working_root.into()),
            fixtures_prefix: fixtures_prefix.into(),
            fixtures_directory: None,
        }
    }

    /// Resolves fixture references (`<prefix>/name`) into `directory`.
    pub fn with_fixtures_directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.fixtures_directory = Some(normalize(&directory.into()));
        self
    }

    pub fn working_root(&self) -> &Path {
        &self.working_root
    }

    pub fn fixtures_prefix(&self) -> &str {
        &self.fixtures_prefix
    }

    pub fn fixtures_directory(&self) -> Option<&Path> {
        self.fixtures_directory.as_deref()
    }

    /// True if `reference` names a fixture.
    pub fn is_fixture(&self, reference: &str) -> bool {
        !self.fixtures_prefix.is_empty() && reference.starts_with(&self.fixtures_prefix)
    }

    /// Directory holding the fixtures: the configured fixtures directory, or
    /// `<working root>/<prefix>` where unmapped fixture references land.
    pub fn fixtures_zone(&self) -> Option<PathBuf> {
        match &self.fixtures_directory {
            Some(directory) => Some(directory.clone()),
            None if self.fixtures_prefix.is_empty() => None,
            None => Some(normalize(&self.working_root.join(&self.fixtures_prefix))),
        }
    }

    /// True if the resolved `path` lies inside the fixtures zone, however it was spelled.
    pub fn is_within_fixtures(&self, path: &Path) -> bool {
        self.fixtures_zone()
            .is_some_and(|zone| normalize(path).starts_with(zone))
    }

    /// Resolves `reference` to an absolute path.
    ///
    /// Fixture references map into the fixtures directory when one is configured.
    /// Absolute references pass through unchanged; everything else is joined onto
    /// the working root.
    pub fn expand(&self, reference: &str) -> PathBuf {
        if self.is_fixture(reference) {
            if let Some(fixtures) = &self.fixtures_directory {
                let rest = reference[self.fixtures_prefix.len()..]
                    .trim_start_matches(|c| c == '/' || c == '\\');
                let resolved = normalize(&fixtures.join(rest));
                debug!("Expanded fixture {:?} to {:?}", reference, resolved);
                return resolved;
            }
        }

        let path = Path::new(reference);
        let resolved = if path.is_absolute() {
            warn!(
                "Absolute path {:?} bypasses the working root {:?}; prefer relative paths",
                reference, self.working_root
            );
            normalize(path)
        } else {
            normalize(&self.working_root.join(path))
        };
        debug!("Expanded {:?} to {:?}", reference, resolved);
        resolved
    }

    /// Expresses an absolute path relative to the working root.
    pub fn relative_to_root(&self, path: &Path) -> PathBuf {
        pathdiff::diff_paths(path, &self.working_root).unwrap_or_else(|| path.to_path_buf())
    }
}

/// Removes `.` components and folds `..` into the preceding component.
fn normalize(path: &Path) -> PathBuf {
    let mut result = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if let Some(parent) = result.parent() {
                    result = parent.to_path_buf();
                }
            }
            _ => result.push(component),
        }
    }
    if result.as_os_str().is_empty() {
        result.push(".");
    }
    result
}
