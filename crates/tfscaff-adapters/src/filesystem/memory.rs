//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeMap, BTreeSet},
    io,
    path::{Path, PathBuf},
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use tfscaff_core::{
    application::{ApplicationError, ports::Filesystem},
    error::ScaffResult,
};

/// In-memory filesystem for testing.
///
/// Clones share state, so a test can hand one clone to a service and
/// inspect the other afterwards.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, String>,
    directories: BTreeSet<PathBuf>,
    /// Writes at or below these paths fail with a simulated I/O error.
    failing: Vec<PathBuf>,
    writes: usize,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every create/write at or below `path` fail.
    pub fn fail_writes_under(&self, path: impl Into<PathBuf>) {
        self.write_guard().failing.push(path.into());
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        self.read_guard().files.get(path).cloned()
    }

    /// All files, sorted.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.read_guard().files.keys().cloned().collect()
    }

    /// All directories, sorted.
    pub fn list_directories(&self) -> Vec<PathBuf> {
        self.read_guard().directories.iter().cloned().collect()
    }

    /// Successful mutating calls so far.
    pub fn write_count(&self) -> usize {
        self.read_guard().writes
    }

    fn read_guard(&self) -> RwLockReadGuard<'_, MemoryFilesystemInner> {
        self.inner.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write_guard(&self) -> RwLockWriteGuard<'_, MemoryFilesystemInner> {
        self.inner.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl MemoryFilesystemInner {
    fn check_failure(&self, path: &Path, operation: &'static str) -> ScaffResult<()> {
        if self.failing.iter().any(|f| path.starts_with(f)) {
            return Err(ApplicationError::write_failure(
                path,
                operation,
                io::Error::new(io::ErrorKind::PermissionDenied, "simulated failure"),
            )
            .into());
        }
        Ok(())
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> ScaffResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::LockPoisoned)?;
        inner.check_failure(path, "create directory")?;

        if inner.files.contains_key(path) {
            return Err(ApplicationError::write_failure(
                path,
                "create directory",
                io::Error::new(io::ErrorKind::AlreadyExists, "a file exists at this path"),
            )
            .into());
        }

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }
        inner.writes += 1;

        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> ScaffResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::LockPoisoned)?;
        inner.check_failure(path, "write file")?;

        // Ensure parent exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(ApplicationError::write_failure(
                    path,
                    "write file",
                    io::Error::new(io::ErrorKind::NotFound, "parent directory does not exist"),
                )
                .into());
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        inner.writes += 1;
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        let inner = self.read_guard();
        inner.files.contains_key(path) || inner.directories.contains(path)
    }
}
