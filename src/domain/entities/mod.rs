//! Domain Entities

mod description;
mod report;

pub use description::{BuildDescription, PipelineKind};
pub use report::BuildReport;
