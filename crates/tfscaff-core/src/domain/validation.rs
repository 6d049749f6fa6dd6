use crate::domain::{entities::ScaffoldPlan, error::DomainError, value_objects::ServiceName};

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across callers.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_service_name(name: &str) -> Result<ServiceName, DomainError> {
        ServiceName::try_new(name)
    }

    pub fn validate_plan(plan: &ScaffoldPlan) -> Result<(), DomainError> {
        plan.validate()
    }
}
