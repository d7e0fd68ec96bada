//! wasm-bundle - build pipelines for a WASM app and its web worker
//!
//! Each pipeline compiles a crate through a compilation delegate (wasm-pack),
//! joins the generated loader with a hand-written entry script, and writes a
//! self-contained bundle directory. The app pipeline also copies static
//! assets and can serve the bundle with a dev server.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{describe, BuildUseCase, WatchEvent, WatchUseCase};
pub use config::Config;
pub use domain::entities::{BuildDescription, BuildReport, PipelineKind};
pub use domain::value_objects::{BuildContext, Mode};
pub use error::{BundleError, BundleResult};
pub use infrastructure::WasmPack;
