//! Embedded snapshot of AWS service identifiers.

use tfscaff_core::{application::ports::ServiceNameSource, error::ScaffResult};

static SNAPSHOT: &str = include_str!("../../data/aws_services.txt");

/// Service names compiled into the binary. Never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinCatalog;

impl BuiltinCatalog {
    pub fn new() -> Self {
        Self
    }

    /// Names in snapshot order.
    pub fn names() -> impl Iterator<Item = &'static str> {
        super::parse_list(SNAPSHOT)
    }
}

impl ServiceNameSource for BuiltinCatalog {
    fn available_services(&self) -> ScaffResult<Vec<String>> {
        Ok(Self::names().map(str::to_owned).collect())
    }

    fn describe(&self) -> String {
        "builtin".into()
    }
}
