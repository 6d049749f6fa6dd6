//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use tracing::trace;

use tfscaff_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{ScaffError, ScaffResult},
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> ScaffResult<()> {
        trace!(path = %path.display(), "create_dir_all");
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> ScaffResult<()> {
        trace!(path = %path.display(), bytes = content.len(), "write_file");
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    /// Any entry counts, including a dangling symlink.
    fn exists(&self, path: &Path) -> bool {
        std::fs::symlink_metadata(path).is_ok()
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &'static str) -> ScaffError {
    ApplicationError::write_failure(path, operation, e).into()
}
