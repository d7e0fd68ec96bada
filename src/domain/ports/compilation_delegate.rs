//! CompilationDelegate port - the external toolchain that turns a crate into
//! a binary module plus loader script.
//!
//! Pipelines only declare a `CompileStep`; they never compile anything
//! themselves. Tests substitute a fake that writes the artifacts directly.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::BundleResult;

/// Flag that suppresses generation of type-declaration files.
pub const NO_TYPESCRIPT_FLAG: &str = "--no-typescript";

/// Compiler optimization profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CompileProfile {
    Dev,
    #[default]
    Release,
    Profiling,
}

impl CompileProfile {
    pub fn as_flag(self) -> &'static str {
        match self {
            CompileProfile::Dev => "--dev",
            CompileProfile::Release => "--release",
            CompileProfile::Profiling => "--profiling",
        }
    }
}

/// Everything the delegate needs to produce one binary module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompileStep {
    crate_dir: PathBuf,
    out_dir: PathBuf,
    out_name: String,
    target: String,
    profile: CompileProfile,
    extra_args: Vec<String>,
}

impl CompileStep {
    /// Declare a compile step. `--no-typescript` is always part of the
    /// extra arguments, whether or not the caller passed it.
    pub fn new(
        crate_dir: impl Into<PathBuf>,
        out_dir: impl Into<PathBuf>,
        out_name: impl Into<String>,
        target: impl Into<String>,
        profile: CompileProfile,
        extra_args: Vec<String>,
    ) -> Self {
        let mut extra_args = extra_args;
        if !extra_args.iter().any(|a| a == NO_TYPESCRIPT_FLAG) {
            extra_args.insert(0, NO_TYPESCRIPT_FLAG.to_string());
        }

        Self {
            crate_dir: crate_dir.into(),
            out_dir: out_dir.into(),
            out_name: out_name.into(),
            target: target.into(),
            profile,
            extra_args,
        }
    }

    pub fn crate_dir(&self) -> &Path {
        &self.crate_dir
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    pub fn out_name(&self) -> &str {
        &self.out_name
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn profile(&self) -> CompileProfile {
        self.profile
    }

    pub fn extra_args(&self) -> &[String] {
        &self.extra_args
    }

    /// File name the delegate gives the binary module.
    pub fn binary_filename(&self) -> String {
        format!("{}_bg.wasm", self.out_name)
    }

    /// File name the delegate gives the loader script.
    pub fn loader_filename(&self) -> String {
        format!("{}.js", self.out_name)
    }

    /// Where the artifacts are expected once the delegate has run.
    pub fn expected_artifacts(&self) -> CompileArtifacts {
        CompileArtifacts {
            loader_script: self.out_dir.join(self.loader_filename()),
            binary_module: self.out_dir.join(self.binary_filename()),
        }
    }
}

/// Paths of the files the delegate produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileArtifacts {
    pub loader_script: PathBuf,
    pub binary_module: PathBuf,
}

/// External toolchain that compiles a crate to a binary module.
///
/// Implementations:
/// - `WasmPack` - invokes the `wasm-pack` executable
/// - test fakes that write artifacts directly
pub trait CompilationDelegate {
    /// Run the compile step. A failure is fatal to the build; callers never retry.
    fn compile(&self, step: &CompileStep) -> BundleResult<CompileArtifacts>;
}

impl<T: CompilationDelegate + ?Sized> CompilationDelegate for &T {
    fn compile(&self, step: &CompileStep) -> BundleResult<CompileArtifacts> {
        (**self).compile(step)
    }
}
