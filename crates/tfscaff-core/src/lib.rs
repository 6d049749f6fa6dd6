//! tfscaff Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the tfscaff
//! Terraform scaffolding tool, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           tfscaff-cli (CLI)             │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │ (ServiceNameProvider, ScaffoldBuilder,  │
//! │            ReportService)               │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Filesystem, ServiceNameSource, ...)    │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    tfscaff-adapters (Infrastructure)    │
//! │ (LocalFilesystem, BotocoreDataSource)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (ServiceCatalog, ScaffoldPlan, ...)     │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use tfscaff_core::application::{ScaffoldBuilder, ServiceNameProvider};
//!
//! // 1. Fetch names once, from an injected source
//! let catalog = ServiceNameProvider::new(source).fetch().unwrap();
//!
//! // 2. Pass them explicitly into the builder
//! let builder = ScaffoldBuilder::new(filesystem);
//! builder.build("./terraform-aws-infra", &catalog).unwrap();
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ExportReport, ReportService, ScaffoldBuilder, ScaffoldReport, ServiceNameProvider,
        ports::{Filesystem, NoProgress, ScaffoldProgress, ServiceNameSource},
    };
    pub use crate::domain::{Environment, ScaffoldPlan, ServiceCatalog, ServiceName};
    pub use crate::error::{ScaffError, ScaffResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
