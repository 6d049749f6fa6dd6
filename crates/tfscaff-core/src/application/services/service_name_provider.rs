//! Service Name Provider - turns raw SDK output into a catalog.

use tracing::{debug, info, instrument};

use crate::{
    application::{ApplicationError, ports::ServiceNameSource},
    domain::{DomainValidator as validator, ServiceCatalog},
    error::ScaffResult,
};

/// Wraps a [`ServiceNameSource`] and yields a sorted, deduplicated catalog.
pub struct ServiceNameProvider {
    source: Box<dyn ServiceNameSource>,
}

impl ServiceNameProvider {
    pub fn new(source: Box<dyn ServiceNameSource>) -> Self {
        Self { source }
    }

    /// Label of the underlying source.
    pub fn source_name(&self) -> String {
        self.source.describe()
    }

    /// Query the source once and build the catalog.
    ///
    /// An empty result is valid. A name that cannot be used as a directory
    /// means the source is returning garbage, and is reported as
    /// `ProviderUnavailable` rather than silently dropped.
    #[instrument(skip_all, fields(source = %self.source.describe()))]
    pub fn fetch(&self) -> ScaffResult<ServiceCatalog> {
        let raw = self.source.available_services()?;
        debug!(reported = raw.len(), "Source returned service names");

        let mut catalog = ServiceCatalog::new();
        for name in raw {
            let name = validator::validate_service_name(&name).map_err(|e| {
                ApplicationError::ProviderUnavailable {
                    provider: self.source.describe(),
                    reason: format!("source reported an unusable service name: {e}"),
                }
            })?;
            catalog.insert(name);
        }

        info!(services = catalog.len(), "Service catalog ready");
        Ok(catalog)
    }
}
