//! # scopefs Assertion Channel
//!
//! File: cli/src/core/assertion.rs
//!
//! ## Overview
//!
//! A handful of access-layer operations are test-assertion helpers rather than
//! plain filesystem calls. When their precondition does not hold they report
//! through an injected `Expectation` before returning an `AssertionFailure`, so
//! the failure surfaces in the harness's own reporting format.
//!
//! Two implementations are provided:
//! - `ReportFailure`: leaves reporting to the caller (the failure is only returned).
//! - `PanicOnFailure`: panics with the failure message, which is how a Rust test fails.
//!
use crate::core::error::{AssertResult, AssertionFailure};
use std::path::Path;
use tracing::debug;

/// Receives assertion failures raised by the access layer.
pub trait Expectation {
    /// Called once for every failed expectation, before the failure is returned.
    fn failed(&self, failure: &AssertionFailure);
}

/// Returns failures to the caller without further reporting.
#[derive(Debug, Default, Clone, Copy)]
pub struct ReportFailure;

impl Expectation for ReportFailure {
    fn failed(&self, failure: &AssertionFailure) {
        debug!("Expectation failed: {}", failure);
    }
}

/// Fails the running test by panicking with the failure message.
#[derive(Debug, Default, Clone, Copy)]
pub struct PanicOnFailure;

impl Expectation for PanicOnFailure {
    fn failed(&self, failure: &AssertionFailure) {
        panic!("{}", failure);
    }
}

/// Asserts that `resolved` exists. `shown` is the path as the caller wrote it.
pub fn expect_existing_path(
    expectation: &dyn Expectation,
    resolved: &Path,
    shown: &str,
) -> AssertResult<()> {
    if resolved.exists() {
        return Ok(());
    }
    fail(
        expectation,
        AssertionFailure::NotAnExistingPath { path: shown.into() },
    )
}

/// Asserts that `resolved` exists and is a regular file.
pub fn expect_existing_file(
    expectation: &dyn Expectation,
    resolved: &Path,
    shown: &str,
) -> AssertResult<()> {
    expect_existing_path(expectation, resolved, shown)?;
    if resolved.is_file() {
        return Ok(());
    }
    fail(expectation, AssertionFailure::NotAFile { path: shown.into() })
}

/// Reports `failure` through `expectation` and returns it as an error.
pub fn fail<T>(expectation: &dyn Expectation, failure: AssertionFailure) -> AssertResult<T> {
    expectation.failed(&failure);
    Err(failure)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::fs;
    use tempfile::tempdir;

    #[derive(Default)]
    struct Recorder(RefCell<Vec<String>>);

    impl Expectation for Recorder {
        fn failed(&self, failure: &AssertionFailure) {
            self.0.borrow_mut().push(failure.to_string());
        }
    }

    #[test]
    fn test_existing_path_passes_without_reporting() {
        let dir = tempdir().unwrap();
        let recorder = Recorder::default();
        assert!(expect_existing_path(&recorder, dir.path(), ".").is_ok());
        assert!(recorder.0.borrow().is_empty());
    }

    #[test]
    fn test_missing_path_is_reported_once() {
        let dir = tempdir().unwrap();
        let recorder = Recorder::default();
        let result = expect_existing_file(&recorder, &dir.path().join("nope"), "nope");
        assert!(matches!(
            result,
            Err(AssertionFailure::NotAnExistingPath { .. })
        ));
        assert_eq!(
            recorder.0.borrow().as_slice(),
            ["expected 'nope' to be an existing path"]
        );
    }

    #[test]
    fn test_directory_is_not_a_file() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        let result = expect_existing_file(&ReportFailure, &dir.path().join("sub"), "sub");
        assert!(matches!(result, Err(AssertionFailure::NotAFile { .. })));
    }

    #[test]
    #[should_panic(expected = "expected 'ghost' to be an existing path")]
    fn test_panic_on_failure_panics() {
        let dir = tempdir().unwrap();
        let _ = expect_existing_path(&PanicOnFailure, &dir.path().join("ghost"), "ghost");
    }
}
