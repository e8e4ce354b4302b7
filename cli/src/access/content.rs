//! Reading file content.
//!
//! Lines come back without their terminators, so a final newline at the end of
//! the file cannot be told apart from its absence: joining the lines with `\n`
//! reproduces the content minus that trailing newline.
//!
use super::FileAccess;
use crate::common::fs::platform::Platform;
use crate::core::assertion::expect_existing_path;
use crate::core::error::{AssertResult, FilesystemError, FsResult};

impl<P: Platform> FileAccess<P> {
    /// Reads a regular file as lines.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if the path does not exist or is not a regular file.
    pub fn read_lines(&self, reference: &str) -> FsResult<Vec<String>> {
        let path = self.expand(reference);
        if !self.platform.exists(&path) {
            return Err(FilesystemError::InvalidArgument(format!(
                "Path '{}' does not exist",
                reference
            )));
        }
        if !self.platform.is_file(&path) {
            return Err(FilesystemError::InvalidArgument(format!(
                "Only files are supported. Path '{}' is not a file",
                reference
            )));
        }
        self.platform.read_lines(&path)
    }

    /// Asserts that `reference` exists, then hands its content to `inspect`.
    pub fn with_file_content<R>(
        &self,
        reference: &str,
        inspect: impl FnOnce(&str) -> R,
    ) -> AssertResult<R> {
        let path = self.expand(reference);
        expect_existing_path(self.expectation.as_ref(), &path, reference)?;
        let content = self.read_lines(reference)?.join("\n");
        Ok(inspect(&content))
    }
}

#[cfg(test)]
mod tests {
    use crate::access::{scope::Scope, FileAccess};
    use crate::core::error::{AssertionFailure, FilesystemError};
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_read_lines_round_trip() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("poem.txt"), "roses\r\nviolets\n\nend\n").unwrap();
        let access = FileAccess::new(Scope::new(dir.path(), "%"));
        let lines = access.read_lines("poem.txt").unwrap();
        assert_eq!(lines, vec!["roses", "violets", "", "end"]);
        assert_eq!(lines.join("\n"), "roses\nviolets\n\nend");
    }

    #[test]
    fn test_read_lines_rejects_directories() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("folder")).unwrap();
        let access = FileAccess::new(Scope::new(dir.path(), "%"));
        let err = access.read_lines("folder").unwrap_err();
        assert!(matches!(err, FilesystemError::InvalidArgument(_)));
        assert!(err.to_string().contains("'folder' is not a file"));
        assert!(matches!(
            access.read_lines("missing.txt"),
            Err(FilesystemError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_with_file_content_yields_joined_lines() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("out.log"), "one\ntwo\n").unwrap();
        let access = FileAccess::new(Scope::new(dir.path(), "%"));
        let seen = access
            .with_file_content("out.log", |content| content.to_string())
            .unwrap();
        assert_eq!(seen, "one\ntwo");
    }

    #[test]
    fn test_with_file_content_missing_is_assertion() {
        let dir = tempdir().unwrap();
        let access = FileAccess::new(Scope::new(dir.path(), "%"));
        let result = access.with_file_content("absent.log", |_| ());
        assert!(matches!(
            result,
            Err(AssertionFailure::NotAnExistingPath { .. })
        ));
    }
}
