//! Implementation of the `tfscaff services` command.

use tfscaff_core::domain::ServiceCatalog;

use crate::{
    cli::{ServicesArgs, ServicesFormat},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Fallback width when stdout is not a terminal.
const DEFAULT_WIDTH: usize = 80;

pub fn execute(args: ServicesArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let catalog = super::fetch_catalog(&args.source, &config)?;

    let format = if output.is_json() {
        ServicesFormat::Json
    } else {
        args.format
    };

    match format {
        ServicesFormat::Table => {
            output.header(&format!("AWS services ({}):", catalog.len()))?;
            let width = output.width().unwrap_or(DEFAULT_WIDTH);
            for row in columns(&catalog, width) {
                output.print(&row)?;
            }
        }
        ServicesFormat::List => {
            for name in &catalog {
                output.data(name.as_str())?;
            }
        }
        ServicesFormat::Json => output.json(&catalog)?,
        ServicesFormat::Count => output.data(&catalog.len().to_string())?,
    }

    Ok(())
}

/// Lay names out in as many left-aligned columns as fit in `width`.
fn columns(catalog: &ServiceCatalog, width: usize) -> Vec<String> {
    let cell = catalog.iter().map(|n| n.as_str().len()).max().unwrap_or(0) + 2;
    let per_row = ((width.saturating_sub(2)) / cell).max(1);

    let names: Vec<&str> = catalog.iter().map(|n| n.as_str()).collect();
    names
        .chunks(per_row)
        .map(|chunk| {
            let row: String = chunk.iter().map(|n| format!("{n:<cell$}")).collect();
            format!("  {}", row.trim_end())
        })
        .collect()
}
