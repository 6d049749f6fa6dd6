//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `tfscaff-adapters` crate provides implementations.

use std::path::Path;

use crate::error::ScaffResult;

#[cfg(test)]
use mockall::automock;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `tfscaff_adapters::filesystem::LocalFilesystem` (production)
/// - `tfscaff_adapters::filesystem::MemoryFilesystem` (testing)
///
/// Failures are reported as `ApplicationError::FilesystemWriteFailure`.
#[cfg_attr(test, automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories. Succeeds if it exists.
    fn create_dir_all(&self, path: &Path) -> ScaffResult<()>;

    /// Write content to a file, creating or truncating it.
    fn write_file(&self, path: &Path, content: &str) -> ScaffResult<()>;

    /// Check if path exists (file or directory).
    fn exists(&self, path: &Path) -> bool;
}

/// Port for the SDK capability that lists service identifiers.
///
/// Implemented by:
/// - `tfscaff_adapters::catalog::BotocoreDataSource` (installed SDK data)
/// - `tfscaff_adapters::catalog::BuiltinCatalog` (embedded snapshot)
/// - `tfscaff_adapters::catalog::ListFileSource` (exported list file)
#[cfg_attr(test, automock)]
pub trait ServiceNameSource: Send + Sync {
    /// Raw names as reported by the source, in any order, possibly repeated.
    ///
    /// Fails with `ApplicationError::ProviderUnavailable` when the source
    /// cannot be initialized.
    fn available_services(&self) -> ScaffResult<Vec<String>>;

    /// Short human-readable label used in logs and errors.
    fn describe(&self) -> String;
}

/// Observer notified while a scaffold is written.
#[cfg_attr(test, automock)]
pub trait ScaffoldProgress: Send + Sync {
    fn started(&self, total_files: usize);

    fn file_written(&self, path: &Path);

    fn finished(&self);
}

/// Progress observer that ignores every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ScaffoldProgress for NoProgress {
    fn started(&self, _total_files: usize) {}

    fn file_written(&self, _path: &Path) {}

    fn finished(&self) {}
}
