//! Service names read from a plain-text list (one per line).

use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use tfscaff_core::{
    application::{ApplicationError, ports::ServiceNameSource},
    error::ScaffResult,
};

/// Reads a list such as the one written by `tfscaff export`.
#[derive(Debug, Clone)]
pub struct ListFileSource {
    path: PathBuf,
}

impl ListFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ServiceNameSource for ListFileSource {
    fn available_services(&self) -> ScaffResult<Vec<String>> {
        let body = std::fs::read_to_string(&self.path).map_err(|e| {
            let reason = match e.kind() {
                io::ErrorKind::NotFound => format!("{} not found", self.path.display()),
                _ => format!("cannot read {}: {e}", self.path.display()),
            };
            ApplicationError::ProviderUnavailable {
                provider: self.describe(),
                reason,
            }
        })?;

        let names: Vec<String> = super::parse_list(&body).map(str::to_owned).collect();
        debug!(path = %self.path.display(), names = names.len(), "Read service list");
        Ok(names)
    }

    fn describe(&self) -> String {
        format!("file:{}", self.path.display())
    }
}
