//! Copy and move.
//!
//! Both operations take one or more sources and a single destination, and share
//! one validation pipeline that runs over the whole request before anything is
//! copied or moved:
//!
//! 1. every source exists, no source is named twice, and with several sources
//!    no two share a file name;
//! 2. (move only) no source is a fixture;
//! 3. the destination is not a fixture;
//! 4. with several sources, an existing destination must be a directory.
//!
//! Several sources land inside the destination directory (created if absent) by
//! name. A single source is placed at exactly the destination path, after its
//! parent directory has been created, which allows renaming on the way.
//!
use super::FileAccess;
use crate::common::fs::platform::Platform;
use crate::core::error::{FilesystemError, FsResult};
use std::collections::HashMap;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Sources and destination of a copy or move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferRequest {
    pub sources: Vec<String>,
    pub destination: String,
}

impl TransferRequest {
    pub fn new<S: Into<String>>(
        sources: impl IntoIterator<Item = S>,
        destination: impl Into<String>,
    ) -> Self {
        TransferRequest {
            sources: sources.into_iter().map(Into::into).collect(),
            destination: destination.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Transfer {
    Copy,
    Move,
}

impl Transfer {
    fn verb(self) -> &'static str {
        match self {
            Transfer::Copy => "copy",
            Transfer::Move => "move",
        }
    }
}

/// A request that passed validation, with every path resolved.
struct Plan {
    sources: Vec<PathBuf>,
    destination: PathBuf,
}

impl<P: Platform> FileAccess<P> {
    /// Copies every source to the destination.
    pub fn copy(&self, request: &TransferRequest) -> FsResult<()> {
        let plan = self.plan_transfer(request, Transfer::Copy)?;
        self.execute_transfer(plan, Transfer::Copy, |from, to| self.platform.copy(from, to))?;
        info!("Copied {:?} to '{}'", request.sources, request.destination);
        Ok(())
    }

    /// Moves every source to the destination. Fixtures can never be moved.
    pub fn mv(&self, request: &TransferRequest) -> FsResult<()> {
        let plan = self.plan_transfer(request, Transfer::Move)?;
        self.execute_transfer(plan, Transfer::Move, |from, to| self.platform.mv(from, to))?;
        info!("Moved {:?} to '{}'", request.sources, request.destination);
        Ok(())
    }

    fn plan_transfer(&self, request: &TransferRequest, kind: Transfer) -> FsResult<Plan> {
        if request.sources.is_empty() {
            return Err(FilesystemError::InvalidArgument(format!(
                "Nothing to {}: no source given",
                kind.verb()
            )));
        }

        let mut sources = Vec::with_capacity(request.sources.len());
        for source in &request.sources {
            let path = self.expand(source);
            if !self.platform.exists(&path) {
                return Err(FilesystemError::InvalidArgument(format!(
                    "Source '{}' does not exist",
                    source
                )));
            }
            sources.push(path);
        }
        check_distinct_sources(&request.sources, &sources)?;

        if kind == Transfer::Move {
            for source in &request.sources {
                self.guard_fixture(source, "a move source")?;
            }
        }

        self.guard_fixture(&request.destination, "a destination")?;
        let destination = self.expand(&request.destination);

        if sources.len() > 1
            && self.platform.exists(&destination)
            && !self.platform.is_directory(&destination)
        {
            return Err(FilesystemError::InvalidArgument(format!(
                "Multiple sources can only be {} to a directory; '{}' is not one",
                match kind {
                    Transfer::Copy => "copied",
                    Transfer::Move => "moved",
                },
                request.destination
            )));
        }

        debug!(
            "Validated {} of {} source(s) to {:?}",
            kind.verb(),
            sources.len(),
            destination
        );
        Ok(Plan {
            sources,
            destination,
        })
    }

    fn execute_transfer(
        &self,
        plan: Plan,
        kind: Transfer,
        apply: impl Fn(&Path, &Path) -> FsResult<()>,
    ) -> FsResult<()> {
        if plan.sources.len() > 1 {
            self.platform.mkdir(&plan.destination)?;
        } else if let Some(parent) = plan.destination.parent() {
            self.platform.mkdir(parent)?;
        }
        for source in &plan.sources {
            debug!("{} {:?} -> {:?}", kind.verb(), source, plan.destination);
            apply(source, &plan.destination)?;
        }
        Ok(())
    }
}

/// Rejects a source given twice, and (when fanning in) two sources that would
/// land on the same name inside the destination directory.
fn check_distinct_sources(references: &[String], resolved: &[PathBuf]) -> FsResult<()> {
    let mut seen: HashMap<&Path, &str> = HashMap::new();
    let mut names: HashMap<&OsStr, &str> = HashMap::new();
    for (reference, path) in references.iter().zip(resolved) {
        if let Some(first) = seen.insert(path.as_path(), reference.as_str()) {
            return Err(FilesystemError::InvalidArgument(format!(
                "Source '{}' is the same path as '{}'",
                reference, first
            )));
        }
        if resolved.len() < 2 {
            continue;
        }
        if let Some(name) = path.file_name() {
            if let Some(first) = names.insert(name, reference.as_str()) {
                return Err(FilesystemError::InvalidArgument(format!(
                    "Sources '{}' and '{}' would both land on '{}' in the destination",
                    first,
                    reference,
                    name.to_string_lossy()
                )));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::access::scope::Scope;
    use std::fs;
    use tempfile::{tempdir, TempDir};

    fn setup() -> (TempDir, TempDir, FileAccess) {
        let root = tempdir().unwrap();
        let fixtures = tempdir().unwrap();
        fs::write(fixtures.path().join("template.txt"), "template").unwrap();
        fs::write(root.path().join("a.txt"), "a").unwrap();
        fs::write(root.path().join("b.txt"), "b").unwrap();
        let access = FileAccess::new(
            Scope::new(root.path(), "%").with_fixtures_directory(fixtures.path()),
        );
        (root, fixtures, access)
    }

    #[test]
    fn test_copy_single_source_renames() {
        let (root, _fixtures, access) = setup();
        access
            .copy(&TransferRequest::new(["a.txt"], "nested/dir/c.txt"))
            .unwrap();
        assert_eq!(fs::read_to_string(root.path().join("nested/dir/c.txt")).unwrap(), "a");
        assert!(root.path().join("a.txt").exists());
    }

    #[test]
    fn test_copy_many_creates_destination_directory() {
        let (root, _fixtures, access) = setup();
        access
            .copy(&TransferRequest::new(["a.txt", "b.txt"], "out"))
            .unwrap();
        assert!(root.path().join("out").is_dir());
        assert!(root.path().join("out/a.txt").is_file());
        assert!(root.path().join("out/b.txt").is_file());
    }

    #[test]
    fn test_copy_many_into_file_is_rejected() {
        let (root, _fixtures, access) = setup();
        fs::write(root.path().join("dest"), "file").unwrap();
        let err = access
            .copy(&TransferRequest::new(["a.txt", "b.txt"], "dest"))
            .unwrap_err();
        assert!(matches!(err, FilesystemError::InvalidArgument(_)));
        assert_eq!(fs::read_to_string(root.path().join("dest")).unwrap(), "file");
    }

    #[test]
    fn test_copy_missing_source_names_it() {
        let (root, _fixtures, access) = setup();
        let err = access
            .copy(&TransferRequest::new(["a.txt", "ghost.txt"], "out"))
            .unwrap_err();
        assert!(err.to_string().contains("'ghost.txt'"));
        assert!(!root.path().join("out").exists());
    }

    #[test]
    fn test_copy_from_fixture_is_allowed() {
        let (root, _fixtures, access) = setup();
        access
            .copy(&TransferRequest::new(["%/template.txt"], "from_fixture.txt"))
            .unwrap();
        assert_eq!(
            fs::read_to_string(root.path().join("from_fixture.txt")).unwrap(),
            "template"
        );
    }

    #[test]
    fn test_copy_into_fixture_is_rejected() {
        let (_root, fixtures, access) = setup();
        let err = access
            .copy(&TransferRequest::new(["a.txt"], "%/a.txt"))
            .unwrap_err();
        assert!(matches!(err, FilesystemError::InvalidArgument(_)));
        assert!(!fixtures.path().join("a.txt").exists());
    }

    #[test]
    fn test_move_fixture_source_is_rejected() {
        let (root, fixtures, access) = setup();
        let err = access
            .mv(&TransferRequest::new(["a.txt", "%/template.txt"], "out"))
            .unwrap_err();
        assert!(matches!(err, FilesystemError::InvalidArgument(_)));
        assert!(fixtures.path().join("template.txt").exists());
        assert!(root.path().join("a.txt").exists());
        assert!(!root.path().join("out").exists());
    }

    #[test]
    fn test_move_renames_and_fans_in() {
        let (root, _fixtures, access) = setup();
        access
            .mv(&TransferRequest::new(["a.txt"], "renamed/a2.txt"))
            .unwrap();
        assert!(!root.path().join("a.txt").exists());
        assert!(root.path().join("renamed/a2.txt").is_file());

        access
            .mv(&TransferRequest::new(["renamed/a2.txt", "b.txt"], "bucket"))
            .unwrap();
        assert!(root.path().join("bucket/a2.txt").is_file());
        assert!(root.path().join("bucket/b.txt").is_file());
    }

    #[test]
    fn test_empty_request_is_rejected() {
        let (_root, _fixtures, access) = setup();
        let empty: [&str; 0] = [];
        assert!(matches!(
            access.copy(&TransferRequest::new(empty, "out")),
            Err(FilesystemError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_repeated_source_is_rejected_before_moving() {
        let (root, _fixtures, access) = setup();
        let err = access
            .mv(&TransferRequest::new(["a.txt", "./a.txt", "b.txt"], "out"))
            .unwrap_err();
        assert!(matches!(err, FilesystemError::InvalidArgument(ref msg) if msg.contains("same path")));
        assert!(!root.path().join("out").exists());
        assert!(root.path().join("a.txt").is_file());
        assert!(root.path().join("b.txt").is_file());
    }

    #[test]
    fn test_fan_in_name_clash_is_rejected() {
        let (root, _fixtures, access) = setup();
        fs::create_dir_all(root.path().join("x")).unwrap();
        fs::create_dir_all(root.path().join("y")).unwrap();
        fs::write(root.path().join("x/f"), "x").unwrap();
        fs::write(root.path().join("y/f"), "y").unwrap();

        let err = access
            .copy(&TransferRequest::new(["x/f", "y/f"], "merged"))
            .unwrap_err();
        assert!(matches!(err, FilesystemError::InvalidArgument(ref msg) if msg.contains("'f'")));
        assert!(!root.path().join("merged").exists());

        // A single source keeps its freedom to be renamed.
        access.copy(&TransferRequest::new(["x/f"], "merged/f")).unwrap();
        assert_eq!(fs::read_to_string(root.path().join("merged/f")).unwrap(), "x");
    }
}
