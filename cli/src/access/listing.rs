//! Recursive listings.
//!
//! `list_paths` reports entries relative to the working root, not relative to the
//! directory being listed, so the results can be fed straight back into any other
//! access-layer operation. The `all_*` views list the whole working root and hand
//! back absolute paths.
//!
use super::FileAccess;
use crate::common::fs::platform::Platform;
use crate::core::error::{FilesystemError, FsResult};
use std::path::PathBuf;
use tracing::debug;

impl<P: Platform> FileAccess<P> {
    /// Lists every file and directory beneath `scoped_dir`, at any depth.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `scoped_dir` does not exist or is not a directory.
    pub fn list_paths(&self, scoped_dir: &str) -> FsResult<Vec<String>> {
        let dir = self.expand(scoped_dir);
        if !self.platform.exists(&dir) {
            return Err(FilesystemError::InvalidArgument(format!(
                "Path '{}' does not exist",
                scoped_dir
            )));
        }
        if !self.platform.is_directory(&dir) {
            return Err(FilesystemError::InvalidArgument(format!(
                "Only directories are supported. Path '{}' is not a directory",
                scoped_dir
            )));
        }

        let listed: Vec<String> = self
            .platform
            .enumerate(&dir)?
            .iter()
            .map(|entry| {
                self.scope
                    .relative_to_root(entry)
                    .to_string_lossy()
                    .into_owned()
            })
            .collect();
        debug!("Listed {} entries under '{}'", listed.len(), scoped_dir);
        Ok(listed)
    }

    /// Every entry under the working root, as absolute paths.
    pub fn all_paths(&self) -> FsResult<Vec<PathBuf>> {
        Ok(self
            .list_paths(".")?
            .iter()
            .map(|entry| self.expand(entry))
            .collect())
    }

    /// Every regular file under the working root, as absolute paths.
    pub fn all_files(&self) -> FsResult<Vec<PathBuf>> {
        Ok(self
            .all_paths()?
            .into_iter()
            .filter(|path| self.platform.is_file(path))
            .collect())
    }

    /// Every directory under the working root, as absolute paths.
    pub fn all_directories(&self) -> FsResult<Vec<PathBuf>> {
        Ok(self
            .all_paths()?
            .into_iter()
            .filter(|path| self.platform.is_directory(path))
            .collect())
    }
}
