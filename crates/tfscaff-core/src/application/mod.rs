//! Application layer for tfscaff.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ServiceNameProvider, ScaffoldBuilder, ReportService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but owns no layout
//! rules itself. What gets written lives in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    ExportReport, ReportService, ScaffoldBuilder, ScaffoldReport, ServiceNameProvider,
};

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, NoProgress, ScaffoldProgress, ServiceNameSource};

pub use error::ApplicationError;
