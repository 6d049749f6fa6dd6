//! Report Service - writes the service catalog to a plain-text list.
//!
//! The list file holds one name per line and is readable by
//! `tfscaff_adapters::catalog::ListFileSource`.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{info, instrument};

use crate::{application::ports::Filesystem, domain::ServiceCatalog, error::ScaffResult};

/// Outcome of a catalog export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportReport {
    pub path: PathBuf,
    pub services: usize,
}

/// Service for exporting a catalog.
pub struct ReportService {
    filesystem: Box<dyn Filesystem>,
}

impl ReportService {
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Render the list body: every name followed by a newline.
    pub fn render(catalog: &ServiceCatalog) -> String {
        catalog.iter().fold(String::new(), |mut out, name| {
            out.push_str(name.as_str());
            out.push('\n');
            out
        })
    }

    /// Write the catalog to `path`, creating the parent directory if absent.
    ///
    /// An existing report at `path` is replaced.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn export(&self, catalog: &ServiceCatalog, path: impl AsRef<Path>) -> ScaffResult<ExportReport> {
        let path = path.as_ref();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            self.filesystem.create_dir_all(parent)?;
        }
        self.filesystem.write_file(path, &Self::render(catalog))?;

        info!(services = catalog.len(), "Service list saved");
        Ok(ExportReport {
            path: path.to_path_buf(),
            services: catalog.len(),
        })
    }
}
