//! Main-app pipeline: script, binary module, static assets and a dev server.

use crate::config::AppConfig;
use crate::domain::entities::{BuildDescription, PipelineKind};
use crate::domain::value_objects::{AssetCopyRule, BuildContext, ServerOptions};
use crate::error::BundleResult;

use super::{resolve_compile_step, resolve_target, Pipeline};

pub struct AppPipeline<'a> {
    ctx: &'a BuildContext,
    config: &'a AppConfig,
}

impl<'a> AppPipeline<'a> {
    pub fn new(ctx: &'a BuildContext, config: &'a AppConfig) -> Self {
        Self { ctx, config }
    }
}

impl Pipeline for AppPipeline<'_> {
    fn kind(&self) -> PipelineKind {
        PipelineKind::App
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

        let output_dir = target.output_dir().to_path_buf();
        let copy_rules = vec![AssetCopyRule::new(
            self.ctx.resolve(&self.config.static_dir),
            output_dir.clone(),
        )];
        let server = ServerOptions::new(
            output_dir,
            mode,
            self.config.server.host,
            self.config.server.port,
        );

        Ok(BuildDescription {
            pipeline: PipelineKind::App,
            mode,
            target,
            compile,
            copy_rules,
            server: Some(server),
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
