//! Implementation of the `tfscaff export` command.
//!
//! Writes the service names, one per line, to a report file. An existing
//! file at the target path is replaced.

use tracing::instrument;

use tfscaff_adapters::LocalFilesystem;
use tfscaff_core::application::ReportService;

use crate::{cli::ExportArgs, config::AppConfig, error::CliResult, output::OutputManager};

#[instrument(skip_all)]
pub fn execute(args: ExportArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let catalog = super::fetch_catalog(&args.source, &config)?;
    let path = args.path.unwrap_or_else(|| config.export.path.clone());

    let report = ReportService::new(Box::new(LocalFilesystem::new())).export(&catalog, &path)?;

    if output.is_json() {
        output.json(&report)?;
    } else {
        output.success(&format!(
            "AWS services list saved to {} ({} services)",
            report.path.display(),
            report.services
        ))?;
    }
    Ok(())
}
