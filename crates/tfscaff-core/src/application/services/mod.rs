//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "list the SDK's services" or "scaffold a tree".

pub mod report_service;
pub mod scaffold_builder;
pub mod service_name_provider;

pub use report_service::{ExportReport, ReportService};
pub use scaffold_builder::{ScaffoldBuilder, ScaffoldReport};
pub use service_name_provider::ServiceNameProvider;
