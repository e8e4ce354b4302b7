//! Size queries. Both are assertion helpers: a missing path (or, for
//! `file_size`, a path that is not a file) is reported through the injected
//! expectation rather than as an ordinary error.
//!
use super::FileAccess;
use crate::common::fs::platform::Platform;
use crate::core::assertion::{expect_existing_file, expect_existing_path};
use crate::core::error::AssertResult;
use crate::core::types::ByteSize;
use std::path::{Path, PathBuf};
use tracing::debug;

impl<P: Platform> FileAccess<P> {
    /// Size of a file in bytes.
    pub fn file_size(&self, reference: &str) -> AssertResult<ByteSize> {
        let path = self.expand(reference);
        expect_existing_file(self.expectation.as_ref(), &path, reference)?;
        Ok(self.platform.determine_file_size(&path)?)
    }

    /// Combined on-disk usage of all `references`, directories counted recursively.
    ///
    /// This is allocated space, so it is usually larger than the summed file sizes.
    pub fn disk_usage(&self, references: &[&str]) -> AssertResult<ByteSize> {
        let mut resolved: Vec<PathBuf> = Vec::with_capacity(references.len());
        for reference in references {
            let path = self.expand(reference);
            expect_existing_path(self.expectation.as_ref(), &path, reference)?;
            resolved.push(path);
        }
        let paths: Vec<&Path> = resolved.iter().map(PathBuf::as_path).collect();
        let usage = self.platform.determine_disk_usage(&paths)?;
        debug!("Disk usage of {:?}: {}", references, usage);
        Ok(usage)
    }
}

#[cfg(test)]
mod tests {
    use crate::access::{scope::Scope, FileAccess};
    use crate::core::assertion::PanicOnFailure;
    use crate::core::error::AssertionFailure;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_file_size() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("ten.bin"), [1u8; 10]).unwrap();
        let access = FileAccess::new(Scope::new(dir.path(), "%"));
        assert_eq!(access.file_size("ten.bin").unwrap().bytes(), 10);
    }

    #[test]
    fn test_file_size_of_directory_fails() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("d")).unwrap();
        let access = FileAccess::new(Scope::new(dir.path(), "%"));
        assert!(matches!(
            access.file_size("d"),
            Err(AssertionFailure::NotAFile { .. })
        ));
    }

    #[test]
    fn test_disk_usage_sums_paths() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("d")).unwrap();
        fs::write(dir.path().join("d/a.bin"), vec![1u8; 4096]).unwrap();
        fs::write(dir.path().join("b.bin"), vec![1u8; 4096]).unwrap();
        let access = FileAccess::new(Scope::new(dir.path(), "%"));

        let one = access.disk_usage(&["b.bin"]).unwrap();
        let both = access.disk_usage(&["d", "b.bin"]).unwrap();
        assert!(one.bytes() >= 4096);
        assert!(both.bytes() >= one.bytes() + 4096);
    }

    #[test]
    #[should_panic(expected = "expected 'nowhere' to be an existing path")]
    fn test_disk_usage_missing_path_panics_with_matcher() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("here"), "x").unwrap();
        let access = FileAccess::new(Scope::new(dir.path(), "%")).with_expectation(PanicOnFailure);
        let _ = access.disk_usage(&["here", "nowhere"]);
    }
}
