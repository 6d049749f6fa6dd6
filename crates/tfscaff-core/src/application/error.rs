//! Application layer errors.
//!
//! These errors represent failures in orchestration, not domain rules.
//! Domain rule violations are `DomainError` from `crate::domain`.

use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The service-name capability could not be initialized or queried.
    #[error("Service name provider '{provider}' is unavailable: {reason}")]
    ProviderUnavailable { provider: String, reason: String },

    /// The scaffold destination already exists. Nothing was written.
    #[error("Destination already exists: {path}")]
    DestinationExists { path: PathBuf },

    /// A create/write call failed after the destination guard passed.
    #[error("Failed to {operation} at {path}: {source}")]
    FilesystemWriteFailure {
        path: PathBuf,
        operation: &'static str,
        #[source]
        source: Arc<io::Error>,
    },

    /// The in-memory state behind an adapter was poisoned.
    #[error("Adapter state lock poisoned")]
    LockPoisoned,
}

impl ApplicationError {
    /// Wrap an I/O failure for `path`.
    pub fn write_failure(path: impl Into<PathBuf>, operation: &'static str, err: io::Error) -> Self {
        Self::FilesystemWriteFailure {
            path: path.into(),
            operation,
            source: Arc::new(err),
        }
    }

    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ProviderUnavailable { provider, .. } => vec![
                format!("Could not list services through '{}'", provider),
                "Install botocore (pip install botocore) or set AWS_DATA_PATH".into(),
                "Or pick another source: --source builtin | --source file".into(),
            ],
            Self::DestinationExists { path } => vec![
                format!("Directory already exists: {}", path.display()),
                "Existing trees are never merged or overwritten".into(),
                "Remove it or choose a different directory name".into(),
            ],
            Self::FilesystemWriteFailure { path, .. } => vec![
                format!("Failed to write: {}", path.display()),
                "Check that you have write permissions and free disk space".into(),
                "The partially written tree was left in place; remove it before re-running"
                    .into(),
            ],
            Self::LockPoisoned => vec!["This is likely a bug, please report it".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ProviderUnavailable { .. } => ErrorCategory::Configuration,
            Self::DestinationExists { .. } => ErrorCategory::Validation,
            Self::FilesystemWriteFailure { .. } | Self::LockPoisoned => ErrorCategory::Internal,
        }
    }
}
