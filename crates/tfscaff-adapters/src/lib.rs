//! Infrastructure adapters for tfscaff.
//!
//! This crate implements the ports defined in `tfscaff_core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod catalog;
pub mod filesystem;

// Re-export commonly used adapters
pub use catalog::{
    BotocoreDataSource, BuiltinCatalog, ListFileSource, SourceKind, SourceOptions, open_source,
};
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
