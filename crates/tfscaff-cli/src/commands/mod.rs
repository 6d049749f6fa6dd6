//! Command handlers. Each module exposes one `execute` function.

pub mod completions;
pub mod config;
pub mod export;
pub mod init;
pub mod new;
pub mod services;

use tracing::{debug, info};

use tfscaff_adapters::{SourceOptions, open_source};
use tfscaff_core::{application::ServiceNameProvider, domain::ServiceCatalog};

use crate::{cli::SourceArgs, config::AppConfig, error::CliResult};

/// Merge `--source` flags over the `[services]` config section.
pub fn source_options(args: &SourceArgs, config: &AppConfig) -> CliResult<SourceOptions> {
    let kind = match (args.source, &args.services_file) {
        (Some(choice), _) => choice.into(),
        (None, Some(_)) => tfscaff_adapters::SourceKind::File,
        (None, None) => config.source_kind()?,
    };

    let mut data_paths = args.data_paths.clone();
    data_paths.extend(config.services.data_paths.iter().cloned());

    Ok(SourceOptions {
        kind,
        data_paths,
        python: config
            .services
            .python
            .clone()
            .filter(|python| !python.trim().is_empty()),
        list_file: args
            .services_file
            .clone()
            .or_else(|| config.services.list_file.clone()),
    })
}

/// Resolve the source and fetch the sorted, unique service names.
pub fn fetch_catalog(args: &SourceArgs, config: &AppConfig) -> CliResult<ServiceCatalog> {
    let options = source_options(args, config)?;
    debug!(source = %options.kind, "Opening service-name source");

    let provider = ServiceNameProvider::new(open_source(&options)?);
    let catalog = provider.fetch()?;

    info!(
        source = %provider.source_name(),
        services = catalog.len(),
        "Service names fetched"
    );
    Ok(catalog)
}
