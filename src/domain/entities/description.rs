//! Build description - the fully resolved plan for one pipeline run.

use serde::{Deserialize, Serialize};

use crate::domain::ports::CompileStep;
use crate::domain::value_objects::{AssetCopyRule, BuildTarget, Mode, ServerOptions};

/// Which pipeline a description belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PipelineKind {
    /// Main application: script, binary module, static assets, dev server
    App,
    /// Background worker: script and binary module only
    Worker,
}

impl PipelineKind {
    pub fn as_str(self) -> &'static str {
        match self {
            PipelineKind::App => "app",
            PipelineKind::Worker => "worker",
        }
    }
}

impl std::fmt::Display for PipelineKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable result of configuration resolution.
///
/// Constructed only by the pipeline constructors; the executor consumes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildDescription {
    pub(crate) pipeline: PipelineKind,
    pub(crate) mode: Mode,
    pub(crate) target: BuildTarget,
    pub(crate) compile: CompileStep,
    pub(crate) copy_rules: Vec<AssetCopyRule>,
    pub(crate) server: Option<ServerOptions>,
    pub(crate) watch: bool,
    pub(crate) watch_dirs: Vec<std::path::PathBuf>,
}

impl BuildDescription {
    pub fn pipeline(&self) -> PipelineKind {
        self.pipeline
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn target(&self) -> &BuildTarget {
        &self.target
    }

    pub fn compile(&self) -> &CompileStep {
        &self.compile
    }

    pub fn copy_rules(&self) -> &[AssetCopyRule] {
        &self.copy_rules
    }

    pub fn server(&self) -> Option<&ServerOptions> {
        self.server.as_ref()
    }

    pub fn watch(&self) -> bool {
        self.watch
    }

    pub fn compression_enabled(&self) -> bool {
        self.mode.compression_enabled()
    }

    /// Extra directories the watcher follows besides the derived inputs.
    pub fn watch_dirs(&self) -> &[std::path::PathBuf] {
        &self.watch_dirs
    }

    /// Force a single build regardless of mode.
    pub fn without_watch(mut self) -> Self {
        self.watch = false;
        self
    }

    /// Override the dev server port, if this pipeline has a server.
    pub fn with_server_port(mut self, port: u16) -> Self {
        self.server = self.server.map(|s| s.with_port(port));
        self
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}
