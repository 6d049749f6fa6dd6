//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `tfscaff-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: Directory creation and file writes
//!   - `ServiceNameSource`: The SDK capability that lists service names
//!   - `ScaffoldProgress`: Progress notifications while a tree is written
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{Filesystem, NoProgress, ScaffoldProgress, ServiceNameSource};

#[cfg(test)]
pub use output::{MockFilesystem, MockScaffoldProgress, MockServiceNameSource};
