//! Unified error handling for tfscaff core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for tfscaff core operations.
#[derive(Debug, Error, Clone)]
pub enum ScaffError {
    /// Errors from the domain layer (invariant violations).
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (orchestration failures).
    #[error("{0}")]
    Application(#[from] ApplicationError),
}

impl ScaffError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
        }
    }

    /// `true` when the scaffold was refused because its destination exists.
    pub fn is_destination_exists(&self) -> bool {
        matches!(
            self,
            Self::Application(ApplicationError::DestinationExists { .. })
        )
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type ScaffResult<T> = Result<T, ScaffError>;
