// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (the CLI renders and logs the same value)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Invalid service name '{name}': {reason}")]
    InvalidServiceName { name: String, reason: String },

    #[error("Unknown environment '{0}'")]
    UnknownEnvironment(String),

    // ========================================================================
    // Plan Constraint Violations
    // ========================================================================
    #[error("Duplicate path in scaffold plan: {path}")]
    DuplicatePath { path: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    #[error("File '{path}' would be written without content")]
    EmptyContent { path: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidServiceName { name, reason } => vec![
                format!("'{}' cannot be used as a module directory: {}", name, reason),
                "Service names must be a single, non-empty path component".into(),
                "Check the service list returned by the selected source".into(),
            ],
            Self::UnknownEnvironment(env) => vec![
                format!("'{}' is not a scaffolded environment", env),
                "Known environments: development, staging, production".into(),
            ],
            Self::DuplicatePath { path } => vec![
                format!("Two entries resolve to '{}'", path),
                "This is a bug in the scaffold plan, please report it".into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidServiceName { .. } | Self::UnknownEnvironment(_) => {
                ErrorCategory::Validation
            }
            Self::DuplicatePath { .. }
            | Self::AbsolutePathNotAllowed { .. }
            | Self::EmptyContent { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
