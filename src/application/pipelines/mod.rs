//! Build pipelines
//!
//! Each pipeline turns the per-invocation `BuildContext` plus its section of
//! the config into an immutable `BuildDescription`. Resolution never touches
//! the file system; existence checks happen when the description is built.

mod app;
mod worker;

pub use app::AppPipeline;
pub use worker::WorkerPipeline;

use crate::config::{CompileConfig, Config};
use crate::domain::entities::{BuildDescription, PipelineKind};
use crate::domain::ports::CompileStep;
use crate::domain::value_objects::{BuildContext, BuildTarget};
use crate::error::BundleResult;

/// A pipeline that can describe one build.
pub trait Pipeline {
    fn kind(&self) -> PipelineKind;

    /// Resolve configuration into a build description.
    fn describe(&self) -> BundleResult<BuildDescription>;
}

/// Describe the requested pipeline from a loaded config.
pub fn describe(
    kind: PipelineKind,
    ctx: &BuildContext,
    config: &Config,
) -> BundleResult<BuildDescription> {
    match kind {
        PipelineKind::App => AppPipeline::new(ctx, &config.app).describe(),
        PipelineKind::Worker => WorkerPipeline::new(ctx, &config.worker).describe(),
    }
}

/// Resolve the entry script, output directory and file names shared by both pipelines.
pub(crate) fn resolve_target(
    ctx: &BuildContext,
    entry: &std::path::Path,
    out_dir: &std::path::Path,
    filename: &str,
    wasm_filename: &str,
) -> BundleResult<BuildTarget> {
    let entry_path = if entry.as_os_str().is_empty() {
        entry.to_path_buf()
    } else {
        ctx.resolve(entry)
    };
    BuildTarget::new(entry_path, ctx.resolve(out_dir), filename, wasm_filename)
}

/// Declare the delegate step; its output name is the binary module's stem so
/// the delegate's file names map one-to-one onto the bundle's.
pub(crate) fn resolve_compile_step(
    ctx: &BuildContext,
    compile: &CompileConfig,
    target: &BuildTarget,
) -> CompileStep {
    CompileStep::new(
        ctx.resolve(&compile.crate_dir),
        ctx.resolve(&compile.resolved_out_dir()),
        target.binary_stem(),
        compile.target.clone(),
        compile.profile,
        compile.extra_args.clone(),
    )
}
