//! Mutating operations: writing, appending, touching, creating directories,
//! removing and changing modes.
//!
//! Fixture references are never accepted as a mutation target. Operations over
//! several paths check every path before the first one is touched; there is no
//! rollback once the platform adapter has started.
//!
use super::FileAccess;
use crate::common::fs::platform::Platform;
use crate::core::error::{FilesystemError, FsResult};
use crate::core::types::{FileMode, TouchOptions};
use std::path::PathBuf;
use tracing::{debug, info};

/// Options for `remove`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RemoveOptions {
    /// Ignore targets that do not exist.
    pub force: bool,
}

/// Options for `chmod`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChmodOptions {
    /// Apply the mode to every entry beneath a directory as well.
    pub recursive: bool,
}

impl<P: Platform> FileAccess<P> {
    /// Writes `content` verbatim, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// `AlreadyExists` if the file exists and `overwrite` is false.
    pub fn write_file(&self, reference: &str, content: &str, overwrite: bool) -> FsResult<()> {
        self.guard_fixture(reference, "a destination")?;
        let path = self.expand(reference);
        if !overwrite && self.platform.exists(&path) {
            return Err(FilesystemError::AlreadyExists { path });
        }
        self.platform.create_file(&path, content.as_bytes(), !overwrite)?;
        info!("Wrote '{}'", reference);
        Ok(())
    }

    /// Creates (or replaces) a zero-filled file of exactly `size` bytes.
    pub fn write_fixed_size_file(&self, reference: &str, size: u64) -> FsResult<()> {
        self.guard_fixture(reference, "a destination")?;
        let path = self.expand(reference);
        self.platform.create_fixed_size_file(&path, size, false)?;
        info!("Wrote {}-byte file '{}'", size, reference);
        Ok(())
    }

    /// Appends `content` verbatim, creating the file and its parents if absent.
    pub fn append_to_file(&self, reference: &str, content: &str) -> FsResult<()> {
        self.guard_fixture(reference, "a destination")?;
        let path = self.expand(reference);
        if let Some(parent) = path.parent() {
            self.platform.mkdir(parent)?;
        }
        self.platform.append(&path, content.as_bytes())?;
        info!("Appended to '{}'", reference);
        Ok(())
    }

    /// Appends `content` on a new line of an existing file.
    ///
    /// A `\n` is inserted first unless the file is empty or already ends with one.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if the file does not exist or is not a regular file.
    pub fn append_lines_to_file(&self, reference: &str, content: &str) -> FsResult<()> {
        self.guard_fixture(reference, "a destination")?;
        let path = self.expand(reference);
        if !self.platform.is_file(&path) {
            return Err(FilesystemError::InvalidArgument(format!(
                "Path '{}' is not an existing file",
                reference
            )));
        }
        self.platform.append_lines(&path, content.as_bytes())?;
        info!("Appended lines to '{}'", reference);
        Ok(())
    }

    /// Creates each file (and its parents) or bumps its modification time.
    pub fn touch(&self, references: &[&str], options: &TouchOptions) -> FsResult<()> {
        let paths = self.resolve_targets(references)?;
        for path in &paths {
            if let Some(parent) = path.parent() {
                self.platform.mkdir(parent)?;
            }
            self.platform.touch(path, options)?;
        }
        info!("Touched {:?}", references);
        Ok(())
    }

    /// Creates a directory and any missing ancestors. Succeeds if it already exists.
    pub fn create_directory(&self, reference: &str) -> FsResult<()> {
        self.guard_fixture(reference, "a destination")?;
        self.platform.mkdir(&self.expand(reference))?;
        debug!("Ensured directory '{}'", reference);
        Ok(())
    }

    /// Recursively removes every path.
    ///
    /// Without `force`, a missing path is an error from the platform adapter.
    pub fn remove(&self, references: &[&str], options: RemoveOptions) -> FsResult<()> {
        let paths = self.resolve_targets(references)?;
        for path in &paths {
            self.platform.remove(path, options.force)?;
        }
        info!("Removed {:?}", references);
        Ok(())
    }

    /// Applies `mode` to every path.
    ///
    /// # Errors
    ///
    /// `Fatal` naming the first missing path; in that case no mode is changed.
    pub fn chmod(&self, mode: FileMode, references: &[&str], options: ChmodOptions) -> FsResult<()> {
        let paths = self.resolve_targets(references)?;
        for (reference, path) in references.iter().zip(&paths) {
            if !self.platform.exists(path) {
                return Err(FilesystemError::Fatal(format!(
                    "Expected '{}' to exist",
                    reference
                )));
            }
        }
        for path in &paths {
            self.platform.chmod(path, mode, options.recursive)?;
        }
        info!("Changed mode of {:?} to {}", references, mode);
        Ok(())
    }

    /// Resolves mutation targets, rejecting fixtures before anything is resolved.
    fn resolve_targets(&self, references: &[&str]) -> FsResult<Vec<PathBuf>> {
        for reference in references {
            self.guard_fixture(reference, "a destination")?;
        }
        Ok(references.iter().map(|r| self.expand(r)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::access::scope::Scope;
    use chrono::{TimeZone, Utc};
    use std::fs;
    use std::time::SystemTime;
    use tempfile::tempdir;

    fn access(dir: &tempfile::TempDir) -> FileAccess {
        FileAccess::new(Scope::new(dir.path(), "%"))
    }

    #[test]
    fn test_write_file_respects_overwrite() {
        let dir = tempdir().unwrap();
        let access = access(&dir);
        access.write_file("deep/dir/f.txt", "first", false).unwrap();
        let err = access.write_file("deep/dir/f.txt", "second", false).unwrap_err();
        assert!(matches!(err, FilesystemError::AlreadyExists { .. }));
        assert_eq!(fs::read_to_string(dir.path().join("deep/dir/f.txt")).unwrap(), "first");

        access.write_file("deep/dir/f.txt", "third", true).unwrap();
        assert_eq!(fs::read_to_string(dir.path().join("deep/dir/f.txt")).unwrap(), "third");
    }

    #[test]
    fn test_write_into_fixture_is_rejected() {
        let dir = tempdir().unwrap();
        let access = access(&dir);
        let err = access.write_file("%/template.txt", "x", true).unwrap_err();
        assert!(matches!(err, FilesystemError::InvalidArgument(_)));
        assert!(fs::read_dir(dir.path()).unwrap().next().is_none());
    }

    #[test]
    fn test_write_fixed_size_file_overwrites() {
        let dir = tempdir().unwrap();
        let access = access(&dir);
        access.write_file("blob", "previous content", false).unwrap();
        access.write_fixed_size_file("blob", 3).unwrap();
        assert_eq!(fs::read(dir.path().join("blob")).unwrap(), vec![0, 0, 0]);
    }

    #[test]
    fn test_append_to_file_creates_and_appends_verbatim() {
        let dir = tempdir().unwrap();
        let access = access(&dir);
        access.append_to_file("logs/out.log", "a").unwrap();
        access.append_to_file("logs/out.log", "b").unwrap();
        assert_eq!(fs::read_to_string(dir.path().join("logs/out.log")).unwrap(), "ab");
    }

    #[test]
    fn test_append_lines_to_file() {
        let dir = tempdir().unwrap();
        let access = access(&dir);
        access.write_file("no_newline", "old", false).unwrap();
        access.append_lines_to_file("no_newline", "X").unwrap();
        assert_eq!(fs::read_to_string(dir.path().join("no_newline")).unwrap(), "old\nX");

        access.write_file("newline", "old\n", false).unwrap();
        access.append_lines_to_file("newline", "X").unwrap();
        assert_eq!(fs::read_to_string(dir.path().join("newline")).unwrap(), "old\nX");

        assert!(matches!(
            access.append_lines_to_file("missing", "X"),
            Err(FilesystemError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_touch_creates_parents_and_applies_options() {
        let dir = tempdir().unwrap();
        let access = access(&dir);
        let when = Utc.with_ymd_and_hms(2001, 2, 3, 4, 5, 6).unwrap();
        access
            .touch(
                &["a/one", "b/c/two"],
                &TouchOptions {
                    mtime: Some(when),
                    ..Default::default()
                },
            )
            .unwrap();
        for name in ["a/one", "b/c/two"] {
            let meta = fs::metadata(dir.path().join(name)).unwrap();
            assert!(meta.is_file());
            assert_eq!(meta.modified().unwrap(), SystemTime::from(when));
        }
    }

    #[test]
    fn test_create_directory_is_idempotent() {
        let dir = tempdir().unwrap();
        let access = access(&dir);
        access.create_directory("x/y/z").unwrap();
        access.create_directory("x/y/z").unwrap();
        assert!(dir.path().join("x/y/z").is_dir());
    }

    #[test]
    fn test_remove_with_and_without_force() {
        let dir = tempdir().unwrap();
        let access = access(&dir);
        access.write_file("tree/leaf.txt", "x", false).unwrap();
        access.remove(&["tree"], RemoveOptions::default()).unwrap();
        assert!(!dir.path().join("tree").exists());

        assert!(access.remove(&["tree"], RemoveOptions::default()).is_err());
        assert!(access.remove(&["tree"], RemoveOptions { force: true }).is_ok());
    }

    #[cfg(unix)]
    #[test]
    fn test_chmod_validates_every_path_first() {
        use std::os::unix::fs::PermissionsExt;
        let dir = tempdir().unwrap();
        let access = access(&dir);
        access.write_file("present", "x", false).unwrap();
        fs::set_permissions(dir.path().join("present"), fs::Permissions::from_mode(0o600)).unwrap();

        let mode: FileMode = "755".parse().unwrap();
        let err = access
            .chmod(mode, &["present", "absent"], ChmodOptions::default())
            .unwrap_err();
        assert!(matches!(err, FilesystemError::Fatal(_)));
        assert!(err.to_string().contains("'absent'"));
        let untouched = fs::metadata(dir.path().join("present")).unwrap().permissions().mode();
        assert_eq!(untouched & 0o777, 0o600);

        access.chmod(mode, &["present"], ChmodOptions::default()).unwrap();
        let changed = fs::metadata(dir.path().join("present")).unwrap().permissions().mode();
        assert_eq!(changed & 0o777, 0o755);
    }
}
