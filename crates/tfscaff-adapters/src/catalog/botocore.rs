//! Service names from the SDK's installed model data.
//!
//! The Python SDK ships one directory per service under its `data/` folder:
//!
//! ```text
//! data/
//! ├── ec2/
//! │   └── 2016-11-15/
//! │       └── service-2.json
//! └── s3/
//!     └── 2006-03-01/
//!         └── service-2.json.gz
//! ```
//!
//! A service is listed when at least one API version directory holds a
//! `service-2` model. Search roots are combined, so user models in
//! `~/.aws/models` or `AWS_DATA_PATH` add to the installed set.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::{debug, instrument, warn};
use walkdir::WalkDir;

use tfscaff_core::{
    application::{ApplicationError, ports::ServiceNameSource},
    error::ScaffResult,
};

/// Model file names that mark a directory as a service.
const MODEL_FILES: [&str; 2] = ["service-2.json", "service-2.json.gz"];

/// Environment variable holding extra model roots.
pub const DATA_PATH_ENV: &str = "AWS_DATA_PATH";

const LOCATE_SCRIPT: &str =
    "import os, botocore; print(os.path.join(os.path.dirname(botocore.__file__), 'data'))";

/// Reads service names from botocore-style model directories.
#[derive(Debug, Clone)]
pub struct BotocoreDataSource {
    search_paths: Vec<PathBuf>,
    /// Why candidate roots were skipped during discovery.
    notes: Vec<String>,
}

impl BotocoreDataSource {
    /// Use exactly these roots.
    pub fn new(search_paths: impl IntoIterator<Item = PathBuf>) -> Self {
        Self {
            search_paths: search_paths.into_iter().collect(),
            notes: Vec::new(),
        }
    }

    /// Build the standard search path.
    ///
    /// Order: `AWS_DATA_PATH` entries, `~/.aws/models`, `extra`, then the
    /// `data/` directory of the botocore package importable by `python`.
    #[instrument(skip_all)]
    pub fn discover(extra: &[PathBuf], python: Option<&str>) -> Self {
        let mut source = Self::new(Vec::new());

        if let Some(value) = std::env::var_os(DATA_PATH_ENV) {
            source.search_paths.extend(std::env::split_paths(&value));
        }
        if let Some(home) = dirs::home_dir() {
            source.search_paths.push(home.join(".aws").join("models"));
        }
        source.search_paths.extend(extra.iter().cloned());

        if let Some(python) = python {
            match locate_installed_data(python) {
                Ok(path) => {
                    debug!(path = %path.display(), "Located installed botocore data");
                    source.search_paths.push(path);
                }
                Err(reason) => {
                    debug!(%reason, "botocore package not found");
                    source.notes.push(reason);
                }
            }
        }

        source
    }

    pub fn search_paths(&self) -> &[PathBuf] {
        &self.search_paths
    }

    /// `what` followed by the searched roots and any discovery notes.
    fn unavailable(&self, what: &str) -> ApplicationError {
        let searched = self
            .search_paths
            .iter()
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join(", ");
        let mut reason = format!("{what} (searched: [{searched}])");
        for note in &self.notes {
            reason.push_str("; ");
            reason.push_str(note);
        }
        ApplicationError::ProviderUnavailable {
            provider: self.describe(),
            reason,
        }
    }
}

impl ServiceNameSource for BotocoreDataSource {
    #[instrument(skip_all)]
    fn available_services(&self) -> ScaffResult<Vec<String>> {
        let roots: Vec<&PathBuf> = self.search_paths.iter().filter(|p| p.is_dir()).collect();

        if roots.is_empty() {
            return Err(self.unavailable("no SDK data directory found").into());
        }

        let mut names = BTreeSet::new();
        for root in roots {
            let before = names.len();
            collect_services(root, &mut names);
            debug!(
                root = %root.display(),
                added = names.len() - before,
                "Scanned model root"
            );
        }

        // Without the installed package, empty user roots are not a catalog.
        if names.is_empty() && !self.notes.is_empty() {
            return Err(self.unavailable("no service models found").into());
        }

        Ok(names.into_iter().collect())
    }

    fn describe(&self) -> String {
        "botocore".into()
    }
}

/// Add every `<root>/<service>/<version>/service-2.json[.gz]` service to `names`.
fn collect_services(root: &Path, names: &mut BTreeSet<String>) {
    let walker = WalkDir::new(root)
        .min_depth(3)
        .max_depth(3)
        .follow_links(true);

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!(error = %e, "Skipping unreadable model entry");
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }
        let is_model = entry
            .file_name()
            .to_str()
            .is_some_and(|n| MODEL_FILES.contains(&n));
        if !is_model {
            continue;
        }

        let service = entry
            .path()
            .parent()
            .and_then(Path::parent)
            .and_then(Path::file_name)
            .and_then(|n| n.to_str());
        if let Some(service) = service {
            names.insert(service.to_owned());
        }
    }
}

/// Ask `python` where the installed botocore package keeps its data.
fn locate_installed_data(python: &str) -> Result<PathBuf, String> {
    let output = Command::new(python)
        .args(["-c", LOCATE_SCRIPT])
        .output()
        .map_err(|e| format!("failed to run '{python}': {e}"))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let last = stderr.lines().last().unwrap_or("unknown error").trim();
        return Err(format!("'{python}' could not import botocore: {last}"));
    }

    let stdout = String::from_utf8(output.stdout)
        .map_err(|_| format!("'{python}' printed a non UTF-8 path"))?;
    let path = stdout.trim();
    if path.is_empty() {
        return Err(format!("'{python}' printed no botocore location"));
    }
    Ok(PathBuf::from(path))
}
