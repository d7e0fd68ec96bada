//! Build Use Case
//!
//! Runs one `BuildDescription` in a fixed order:
//! 1. Preflight (entry script and asset sources exist)
//! 2. Compile through the delegate
//! 3. Copy static assets into a staging directory
//! 4. Emit the renamed script and binary module
//! 5. Commit the staging directory to the output path
//!
//! Any failure before step 5 leaves the output path as it was.

use std::fs;
use std::path::Path;
use std::time::Instant;

use crate::domain::entities::{BuildDescription, BuildReport};
use crate::domain::ports::{CompilationDelegate, CompileArtifacts};
use crate::error::{BundleError, BundleResult};
use crate::infrastructure::fs::{copy_assets, StagedBundle};

/// Build use case, parameterized by the compilation delegate.
pub struct BuildUseCase<C>
where
    C: CompilationDelegate,
{
    compiler: C,
}

impl<C> BuildUseCase<C>
where
    C: CompilationDelegate,
{
    pub fn new(compiler: C) -> Self {
        Self { compiler }
    }

    /// Execute one build. Never retries.
    pub fn execute(&self, desc: &BuildDescription) -> BundleResult<BuildReport> {
        let started = Instant::now();
        let target = desc.target();
        tracing::info!(
            pipeline = %desc.pipeline(),
            mode = %desc.mode(),
            output = %target.output_dir().display(),
            "build started"
        );

        preflight(desc)?;

        let artifacts = self.compiler.compile(desc.compile())?;

        let mut staged = StagedBundle::new(target.output_dir())?;
        let mut assets_copied = 0;
        for rule in desc.copy_rules() {
            assets_copied += copy_assets(rule, &mut staged)?;
        }

        emit_bundle(desc, &artifacts, &mut staged)?;
        let files = staged.commit()?;

        let report = BuildReport {
            output_dir: target.output_dir().to_path_buf(),
            files,
            assets_copied,
            elapsed: started.elapsed(),
        };
        tracing::info!(
            files = report.files.len(),
            elapsed_ms = report.elapsed.as_millis() as u64,
            "build complete"
        );
        Ok(report)
    }
}

/// Check every input that must exist before anything is compiled or written.
pub fn preflight(desc: &BuildDescription) -> BundleResult<()> {
    let entry = desc.target().entry_path();
    if !entry.is_file() {
        return Err(BundleError::EntryNotFound {
            path: entry.to_path_buf(),
        });
    }

    for rule in desc.copy_rules() {
        if !rule.source_dir().is_dir() {
            return Err(BundleError::AssetDirNotFound {
                path: rule.source_dir().to_path_buf(),
            });
        }
    }

    Ok(())
}

fn emit_bundle(
    desc: &BuildDescription,
    artifacts: &CompileArtifacts,
    staged: &mut StagedBundle,
) -> BundleResult<()> {
    let target = desc.target();
    let loader = fs::read_to_string(&artifacts.loader_script)?;
    let entry = fs::read_to_string(target.entry_path())?;

    let script = render_script(
        &loader,
        &entry,
        &desc.compile().binary_filename(),
        target.binary_output_filename(),
    )
    .ok_or_else(|| BundleError::UnlinkedLoader {
        path: artifacts.loader_script.clone(),
        binary: desc.compile().binary_filename(),
    })?;

    // Emitted after assets so a same-named static file never shadows them.
    staged.write(Path::new(target.output_filename()), script.as_bytes())?;
    staged.copy_file(
        &artifacts.binary_module,
        Path::new(target.binary_output_filename()),
    )?;
    Ok(())
}

/// How a `no-modules` loader finds its binary when called without a path:
/// its own script URL with `.js` swapped for `_bg.wasm`.
pub const DERIVED_BINARY_PATH: &str = "script_src.replace(/\\.js$/, '_bg.wasm')";

/// Loader script pointed at the bundled binary, followed by the entry script.
///
/// Both the literal binary name (`web`/`bundler` loaders) and the path a
/// `no-modules` loader derives from its own URL are rewritten. Returns `None`
/// when the loader has neither, since the bundle could never load its binary.
pub fn render_script(
    loader: &str,
    entry: &str,
    compiled_binary: &str,
    bundled_binary: &str,
) -> Option<String> {
    if !loader.contains(compiled_binary) && !loader.contains(DERIVED_BINARY_PATH) {
        return None;
    }

    let mut script = loader.replace(compiled_binary, bundled_binary).replace(
        DERIVED_BINARY_PATH,
        &format!("new URL('{bundled_binary}', script_src).toString()"),
    );
    if !script.ends_with('\n') {
        script.push('\n');
    }
    script.push_str(entry);
    Some(script)
}
