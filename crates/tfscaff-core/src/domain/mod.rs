// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for tfscaff.
//!
//! This module contains pure logic with no I/O. Discovering service names
//! and touching the filesystem are handled via ports (traits) defined in the
//! application layer.
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **Derived plans**: A `ScaffoldPlan` is computed from a catalog on every
//!   run and never persisted
//!
// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod value_objects;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use entities::{
    catalog::ServiceCatalog,
    scaffold_plan::{
        DirectoryToCreate, ENVIRONMENT_FILES, ENVIRONMENTS_DIR, FileToWrite, MODULE_FILES,
        MODULES_DIR, PlanEntry, ROOT_FILES, ScaffoldPlan, environment_banner, module_banner,
        root_banner,
    },
};

pub use error::{DomainError, ErrorCategory};

pub use value_objects::{Environment, ServiceName};

pub use validation::DomainValidator;

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};

    use super::*;

    fn catalog(names: &[&str]) -> ServiceCatalog {
        ServiceCatalog::from_names(names.iter().copied()).unwrap()
    }

    // ========================================================================
    // Catalog Tests
    // ========================================================================

    #[test]
    fn catalog_sorts_ascending() {
        let c = catalog(&["s3", "ec2", "iam"]);
        assert_eq!(c.to_strings(), ["ec2", "iam", "s3"]);
    }

    #[test]
    fn catalog_deduplicates() {
        let c = catalog(&["s3", "s3", "ec2"]);
        assert_eq!(c.len(), 2);
        assert!(c.contains("s3"));
        assert!(!c.contains("lambda"));
    }

    #[test]
    fn catalog_rejects_invalid_entry() {
        let err = ServiceCatalog::from_names(["s3", ""]).unwrap_err();
        assert!(matches!(err, DomainError::InvalidServiceName { .. }));
    }

    #[test]
    fn empty_catalog_is_valid() {
        let c = ServiceCatalog::from_names(Vec::<String>::new()).unwrap();
        assert!(c.is_empty());
    }

    #[test]
    fn catalog_serializes_as_sorted_array() {
        let c = catalog(&["sqs", "acm"]);
        assert_eq!(serde_json::to_string(&c).unwrap(), r#"["acm","sqs"]"#);
    }

    // ========================================================================
    // Scaffold Plan Tests
    // ========================================================================

    #[test]
    fn plan_counts_match_catalog() {
        let plan = ScaffoldPlan::for_catalog("out", &catalog(&["s3", "ec2", "iam"]));

        // 5 root + 3 * 4 module + 3 * 4 environment
        assert_eq!(plan.file_count(), 5 + 12 + 12);
        // modules/ + 3 services + environments/ + 3 envs
        assert_eq!(plan.directory_count(), 1 + 3 + 1 + 3);
        assert_eq!(plan.module_count(), 3);
        assert_eq!(plan.environment_count(), 3);
        assert!(plan.validate().is_ok());
    }

    #[test]
    fn plan_orders_root_then_modules_then_environments() {
        let plan = ScaffoldPlan::for_catalog("out", &catalog(&["s3", "ec2"]));
        let dirs: Vec<&Path> = plan.directories().map(|d| d.path.as_path()).collect();

        assert_eq!(
            dirs,
            [
                Path::new("modules"),
                Path::new("modules/ec2"),
                Path::new("modules/s3"),
                Path::new("environments"),
                Path::new("environments/development"),
                Path::new("environments/staging"),
                Path::new("environments/production"),
            ]
        );

        let first = plan.entries().first().unwrap();
        assert_eq!(first.path(), Path::new("main.tf"));
    }

    #[test]
    fn plan_content_is_bit_exact() {
        let plan = ScaffoldPlan::for_catalog("out", &catalog(&["s3", "ec2"]));
        let content_of = |p: &str| {
            plan.files()
                .find(|f| f.path == PathBuf::from(p))
                .map(|f| f.content.clone())
                .unwrap()
        };

        assert_eq!(content_of("modules/ec2/main.tf"), "# main.tf for ec2 module\n");
        assert_eq!(
            content_of("environments/staging/terraform.tfvars"),
            "# terraform.tfvars for staging environment\n"
        );
        assert_eq!(
            content_of("README.md"),
            "# README.md for Terraform AWS Infrastructure\n"
        );
    }

    #[test]
    fn empty_catalog_plan_still_has_modules_dir() {
        let plan = ScaffoldPlan::for_catalog("out", &ServiceCatalog::new());
        assert_eq!(plan.module_count(), 0);
        assert!(plan.directories().any(|d| d.path == Path::new(MODULES_DIR)));
        assert_eq!(plan.file_count(), ROOT_FILES.len() + 3 * ENVIRONMENT_FILES.len());
    }

    #[test]
    fn plan_root_is_preserved() {
        let plan = ScaffoldPlan::for_catalog("/tmp/infra", &ServiceCatalog::new());
        assert_eq!(plan.root(), Path::new("/tmp/infra"));
        // entries stay relative even when the root is absolute
        assert!(plan.validate().is_ok());
    }

    #[test]
    fn validator_delegates_to_plan() {
        let plan = ScaffoldPlan::for_catalog("out", &catalog(&["kms"]));
        assert!(DomainValidator::validate_plan(&plan).is_ok());
        assert!(DomainValidator::validate_service_name("a/b").is_err());
    }

    #[test]
    fn banners_use_expected_wording() {
        let svc = ServiceName::try_new("rds").unwrap();
        assert_eq!(module_banner("outputs.tf", &svc), "# outputs.tf for rds module\n");
        assert_eq!(
            environment_banner("versions.tf", Environment::Production),
            "# versions.tf for production environment\n"
        );
        assert_eq!(
            root_banner("provider.tf"),
            "# provider.tf for Terraform AWS Infrastructure\n"
        );
    }
}
