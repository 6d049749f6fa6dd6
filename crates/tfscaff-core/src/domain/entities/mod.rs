pub mod catalog;
pub mod scaffold_plan;

pub use catalog::ServiceCatalog;
pub use scaffold_plan::ScaffoldPlan;
