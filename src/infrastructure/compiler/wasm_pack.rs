//! wasm-pack Compilation Delegate
//!
//! Runs `wasm-pack build` and checks that the loader script and binary
//! module it promises actually exist afterwards.

use std::ffi::OsString;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use crate::domain::ports::{CompilationDelegate, CompileArtifacts, CompileStep};
use crate::error::{BundleError, BundleResult};

/// Environment variable naming the wasm-pack executable to use
pub const ENV_WASM_PACK: &str = "WASM_PACK";

const DEFAULT_PROGRAM: &str = "wasm-pack";

/// Lines of compiler stderr kept in a failure report
const STDERR_TAIL_LINES: usize = 20;

/// Compilation delegate backed by the `wasm-pack` executable
#[derive(Debug, Clone)]
pub struct WasmPack {
    program: OsString,
}

impl WasmPack {
    /// Use `$WASM_PACK` if set, otherwise `wasm-pack` from `PATH`.
    pub fn from_env() -> Self {
        let program = std::env::var_os(ENV_WASM_PACK)
            .filter(|p| !p.is_empty())
            .unwrap_or_else(|| OsString::from(DEFAULT_PROGRAM));
        Self { program }
    }

    pub fn with_program(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Locate the executable, failing early with a readable error.
    pub fn locate(&self) -> BundleResult<PathBuf> {
        which::which(&self.program).map_err(|_| BundleError::CompilerNotFound {
            program: self.program.to_string_lossy().into_owned(),
        })
    }

    /// Arguments passed after the program name.
    pub fn args(step: &CompileStep) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec![
            "build".into(),
            step.crate_dir().into(),
            "--target".into(),
            step.target().into(),
            "--out-dir".into(),
            step.out_dir().into(),
            "--out-name".into(),
            step.out_name().into(),
            step.profile().as_flag().into(),
        ];
        args.extend(step.extra_args().iter().map(OsString::from));
        args
    }
}

impl Default for WasmPack {
    fn default() -> Self {
        Self::from_env()
    }
}

impl CompilationDelegate for WasmPack {
    fn compile(&self, step: &CompileStep) -> BundleResult<CompileArtifacts> {
        let program = self.locate()?;
        let args = Self::args(step);
        tracing::info!(
            program = %program.display(),
            crate_dir = %step.crate_dir().display(),
            "compiling binary module"
        );
        tracing::debug!(?args, "compiler arguments");

        let output = Command::new(&program)
            .args(&args)
            .stdin(Stdio::null())
            .output()?;

        let stderr = String::from_utf8_lossy(&output.stderr);
        for line in String::from_utf8_lossy(&output.stdout)
            .lines()
            .chain(stderr.lines())
        {
            tracing::debug!(target: "wasm_bundle::compiler", "{line}");
        }

        if !output.status.success() {
            return Err(BundleError::CompilationFailed {
                status: output.status.to_string(),
                stderr: tail(&stderr, STDERR_TAIL_LINES),
            });
        }

        let artifacts = step.expected_artifacts();
        for path in [&artifacts.loader_script, &artifacts.binary_module] {
            if !path.is_file() {
                return Err(BundleError::MissingArtifact { path: path.clone() });
            }
        }

        Ok(artifacts)
    }
}

fn tail(text: &str, lines: usize) -> String {
    let all: Vec<&str> = text.lines().collect();
    let start = all.len().saturating_sub(lines);
    all[start..].join("\n")
}
