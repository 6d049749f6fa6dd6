//! Scaffold Builder - main application orchestrator.
//!
//! This service coordinates a scaffold run:
//! 1. Refuse if the destination exists (no writes at all)
//! 2. Derive the plan from the service catalog
//! 3. Write every directory and file in plan order
//!
//! There is no rollback. A filesystem failure after the guard is surfaced
//! immediately and the partially written tree stays on disk.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, NoProgress, ScaffoldProgress},
    },
    domain::{DomainValidator as validator, PlanEntry, ScaffoldPlan, ServiceCatalog},
    error::{ScaffError, ScaffResult},
};

/// Outcome of a successful scaffold run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScaffoldReport {
    pub root: PathBuf,
    /// Includes the base directory itself.
    pub directories_created: usize,
    pub files_written: usize,
    pub modules: usize,
    pub environments: usize,
}

/// Writes a Terraform skeleton for a service catalog.
pub struct ScaffoldBuilder {
    filesystem: Box<dyn Filesystem>,
    progress: Box<dyn ScaffoldProgress>,
}

impl ScaffoldBuilder {
    /// Create a builder over the given filesystem adapter.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use tfscaff_core::application::{ScaffoldBuilder, ports::*};
    ///
    /// let builder = ScaffoldBuilder::new(
    ///     filesystem, // impl Filesystem
    /// );
    /// ```
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self {
            filesystem,
            progress: Box::new(NoProgress),
        }
    }

    /// Attach a progress observer.
    pub fn with_progress(mut self, progress: Box<dyn ScaffoldProgress>) -> Self {
        self.progress = progress;
        self
    }

    /// Compute and validate the plan without touching the filesystem.
    pub fn plan(&self, base: impl AsRef<Path>, catalog: &ServiceCatalog) -> ScaffResult<ScaffoldPlan> {
        let plan = ScaffoldPlan::for_catalog(base.as_ref(), catalog);
        validator::validate_plan(&plan).map_err(ScaffError::Domain)?;
        Ok(plan)
    }

    /// Scaffold the tree at `base`.
    #[instrument(
        skip_all,
        fields(
            base = %base.as_ref().display(),
            services = catalog.len()
        )
    )]
    pub fn build(
        &self,
        base: impl AsRef<Path>,
        catalog: &ServiceCatalog,
    ) -> ScaffResult<ScaffoldReport> {
        let base = base.as_ref();

        // 1. Destination guard
        if self.filesystem.exists(base) {
            warn!("Destination exists, refusing to scaffold");
            return Err(ApplicationError::DestinationExists {
                path: base.to_path_buf(),
            }
            .into());
        }

        // 2. Plan
        let plan = self.plan(base, catalog)?;
        info!(
            files = plan.file_count(),
            directories = plan.directory_count(),
            "Plan computed"
        );

        // 3. Write
        let report = self.write_plan(&plan)?;

        info!("Scaffold completed successfully");
        Ok(report)
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn write_plan(&self, plan: &ScaffoldPlan) -> ScaffResult<ScaffoldReport> {
        let root = plan.root();
        self.progress.started(plan.file_count());

        self.filesystem.create_dir_all(root)?;
        let mut report = ScaffoldReport {
            root: root.to_path_buf(),
            directories_created: 1,
            files_written: 0,
            modules: plan.module_count(),
            environments: plan.environment_count(),
        };

        for entry in plan.entries() {
            let path = root.join(entry.path());
            match entry {
                PlanEntry::Directory(_) => {
                    debug!(path = %path.display(), "Creating directory");
                    self.filesystem.create_dir_all(&path)?;
                    report.directories_created += 1;
                }
                PlanEntry::File(file) => {
                    self.filesystem.write_file(&path, &file.content)?;
                    report.files_written += 1;
                    self.progress.file_written(&path);
                }
            }
        }

        self.progress.finished();
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::application::ports::{MockFilesystem, MockScaffoldProgress};

    fn catalog(names: &[&str]) -> ServiceCatalog {
        ServiceCatalog::from_names(names.iter().copied()).unwrap()
    }

    /// A filesystem mock that accepts everything and records directory order.
    fn recording_fs(dirs: Arc<Mutex<Vec<PathBuf>>>) -> MockFilesystem {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| false);
        fs.expect_create_dir_all().returning(move |p| {
            dirs.lock().unwrap().push(p.to_path_buf());
            Ok(())
        });
        fs.expect_write_file().returning(|_, _| Ok(()));
        fs
    }

    #[test]
    fn build_reports_counts() {
        let dirs = Arc::new(Mutex::new(Vec::new()));
        let builder = ScaffoldBuilder::new(Box::new(recording_fs(dirs)));

        let report = builder.build("out", &catalog(&["s3", "ec2"])).unwrap();

        assert_eq!(report.root, PathBuf::from("out"));
        assert_eq!(report.files_written, 5 + 2 * 4 + 3 * 4);
        // root + modules/ + 2 modules + environments/ + 3 environments
        assert_eq!(report.directories_created, 1 + 1 + 2 + 1 + 3);
        assert_eq!(report.modules, 2);
        assert_eq!(report.environments, 3);
    }

    #[test]
    fn modules_are_created_in_sorted_order() {
        let dirs = Arc::new(Mutex::new(Vec::new()));
        let builder = ScaffoldBuilder::new(Box::new(recording_fs(dirs.clone())));

        builder.build("out", &catalog(&["s3", "ec2", "iam"])).unwrap();

        let created = dirs.lock().unwrap();
        let modules: Vec<_> = created
            .iter()
            .filter(|p| p.parent() == Some(Path::new("out/modules")))
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(modules, ["ec2", "iam", "s3"]);
        assert_eq!(created.first().unwrap(), &PathBuf::from("out"));
    }

    #[test]
    fn existing_destination_is_refused_without_writes() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().times(1).returning(|_| true);
        fs.expect_create_dir_all().times(0);
        fs.expect_write_file().times(0);

        let err = ScaffoldBuilder::new(Box::new(fs))
            .build("out", &catalog(&["s3"]))
            .unwrap_err();

        assert!(err.is_destination_exists());
    }

    #[test]
    fn write_failure_stops_immediately() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| false);
        fs.expect_create_dir_all().times(1).returning(|_| Ok(()));
        // main.tf succeeds, variables.tf fails, nothing after that is attempted
        fs.expect_write_file().times(2).returning(|p, _| {
            if p.ends_with("variables.tf") {
                Err(ApplicationError::write_failure(
                    p,
                    "write file",
                    io::Error::new(io::ErrorKind::StorageFull, "disk full"),
                )
                .into())
            } else {
                Ok(())
            }
        });

        let err = ScaffoldBuilder::new(Box::new(fs))
            .build("out", &catalog(&["s3"]))
            .unwrap_err();

        match err {
            ScaffError::Application(ApplicationError::FilesystemWriteFailure { path, .. }) => {
                assert_eq!(path, PathBuf::from("out/variables.tf"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn progress_sees_every_file() {
        let dirs = Arc::new(Mutex::new(Vec::new()));
        let mut progress = MockScaffoldProgress::new();
        progress
            .expect_started()
            .withf(|total| *total == 5 + 4 + 12)
            .times(1)
            .return_const(());
        progress.expect_file_written().times(21).return_const(());
        progress.expect_finished().times(1).return_const(());

        ScaffoldBuilder::new(Box::new(recording_fs(dirs)))
            .with_progress(Box::new(progress))
            .build("out", &catalog(&["lambda"]))
            .unwrap();
    }

    #[test]
    fn plan_does_not_touch_filesystem() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().times(0);
        fs.expect_create_dir_all().times(0);
        fs.expect_write_file().times(0);

        let plan = ScaffoldBuilder::new(Box::new(fs))
            .plan("out", &catalog(&["s3"]))
            .unwrap();
        assert_eq!(plan.module_count(), 1);
    }
}
