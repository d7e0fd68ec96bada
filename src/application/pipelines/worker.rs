//! Worker pipeline: script and binary module only.

use crate::config::WorkerConfig;
use crate::domain::entities::{BuildDescription, PipelineKind};
use crate::domain::value_objects::BuildContext;
use crate::error::BundleResult;

use super::{resolve_compile_step, resolve_target, Pipeline};

pub struct WorkerPipeline<'a> {
    ctx: &'a BuildContext,
    config: &'a WorkerConfig,
}

impl<'a> WorkerPipeline<'a> {
    pub fn new(ctx: &'a BuildContext, config: &'a WorkerConfig) -> Self {
        Self { ctx, config }
    }
}

impl Pipeline for WorkerPipeline<'_> {
    fn kind(&self) -> PipelineKind {
        PipelineKind::Worker
    }

    fn describe(&self) -> BundleResult<BuildDescription> {
        let mode = self.ctx.mode();
        let target = resolve_target(
            self.ctx,
            &self.config.entry,
            &self.config.out_dir,
            &self.config.filename,
            &self.config.wasm_filename,
        )?;
        let compile = resolve_compile_step(self.ctx, &self.config.compile, &target);

        Ok(BuildDescription {
            pipeline: PipelineKind::Worker,
            mode,
            target,
            compile,
            copy_rules: Vec::new(),
            server: None,
            watch: mode.watch_enabled(),
            watch_dirs: self
                .config
                .watch_dirs
                .iter()
                .map(|d| self.ctx.resolve(d))
                .collect(),
        })
    }
}
