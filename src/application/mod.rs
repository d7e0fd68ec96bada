//! Application Layer
//!
//! Use cases that orchestrate the build flow.
//! This layer:
//! - Depends on Domain layer (entities, ports, value objects)
//! - Does NOT perform process or network I/O itself (delegates to ports)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `describe` / `Pipeline` - Resolve config into a build description
//! - `BuildUseCase` - Preflight, compile, stage, commit
//! - `WatchUseCase` - Rebuild on input changes

pub mod build;
pub mod pipelines;
pub mod watch;

pub use build::BuildUseCase;
pub use pipelines::{describe, AppPipeline, Pipeline, WorkerPipeline};
pub use watch::{WatchEvent, WatchUseCase};
