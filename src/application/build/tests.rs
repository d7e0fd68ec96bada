//! Build Use Case Tests

use super::fixtures::{write_no_modules_output, NO_MODULES_LOADER, WASM_MAGIC};
use super::*;
use crate::application::pipelines::{AppPipeline, Pipeline, WorkerPipeline};
use crate::config::{AppConfig, WorkerConfig};
use crate::domain::entities::BuildDescription;
use crate::domain::ports::{CompilationDelegate, CompileArtifacts, CompileStep};
use crate::domain::value_objects::{BuildContext, Mode};
use crate::error::{BundleError, BundleResult};
use std::cell::Cell;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

// Fake delegate: writes what wasm-pack emits for the no-modules target.
#[derive(Default)]
struct FakeCompiler {
    calls: Cell<usize>,
}

impl CompilationDelegate for FakeCompiler {
    fn compile(&self, step: &CompileStep) -> BundleResult<CompileArtifacts> {
        self.calls.set(self.calls.get() + 1);
        write_no_modules_output(step)
    }
}

// Fake delegate whose loader has no binary reference at all.
struct UnlinkedCompiler;

impl CompilationDelegate for UnlinkedCompiler {
    fn compile(&self, step: &CompileStep) -> BundleResult<CompileArtifacts> {
        let artifacts = write_no_modules_output(step)?;
        fs::write(&artifacts.loader_script, "let wasm_bindgen = {};\n")?;
        Ok(artifacts)
    }
}

struct FailingCompiler;

impl CompilationDelegate for FailingCompiler {
    fn compile(&self, _step: &CompileStep) -> BundleResult<CompileArtifacts> {
        Err(BundleError::CompilationFailed {
            status: "exit status: 1".to_string(),
            stderr: "error[E0425]: cannot find value".to_string(),
        })
    }
}

fn app_project(root: &Path) {
    fs::write(root.join("ffxii_tza_rng.js"), "wasm_bindgen.run_app();\n").unwrap();
    fs::create_dir_all(root.join("static/img")).unwrap();
    fs::write(root.join("static/index.html"), "<script src=\"ffxii_tza_rng.js\"></script>").unwrap();
    fs::write(root.join("static/img/cure.png"), b"png").unwrap();
}

fn app_desc(root: &Path, mode: Mode) -> BuildDescription {
    AppPipeline::new(&BuildContext::new(mode, root), &AppConfig::default())
        .describe()
        .unwrap()
}

fn worker_desc(root: &Path) -> BuildDescription {
    WorkerPipeline::new(
        &BuildContext::new(Mode::Development, root),
        &WorkerConfig::default(),
    )
    .describe()
    .unwrap()
}

#[test]
fn app_build_produces_renamed_artifacts_and_assets() {
    let dir = tempdir().unwrap();
    app_project(dir.path());

    let report = BuildUseCase::new(FakeCompiler::default())
        .execute(&app_desc(dir.path(), Mode::Production))
        .unwrap();

    let dist = dir.path().join("dist");
    assert_eq!(report.output_dir, dist);
    assert_eq!(report.assets_copied, 2);
    assert_eq!(
        report.files,
        vec![
            PathBuf::from("ffxii_tza_rng.js"),
            PathBuf::from("ffxii_tza_rng.wasm"),
            PathBuf::from("img/cure.png"),
            PathBuf::from("index.html"),
        ]
    );
    assert_eq!(fs::read(dist.join("ffxii_tza_rng.wasm")).unwrap(), WASM_MAGIC);
    assert!(dist.join("index.html").is_file());
    assert!(dist.join("img/cure.png").is_file());
}

#[test]
fn emitted_script_references_bundled_binary_name() {
    let dir = tempdir().unwrap();
    app_project(dir.path());

    BuildUseCase::new(FakeCompiler::default())
        .execute(&app_desc(dir.path(), Mode::Development))
        .unwrap();

    let script = fs::read_to_string(dir.path().join("dist/ffxii_tza_rng.js")).unwrap();
    assert!(script.contains("new URL('ffxii_tza_rng.wasm', script_src).toString()"));
    assert!(!script.contains("_bg.wasm"));
    assert!(script.ends_with("wasm_bindgen.run_app();\n"));
}

#[test]
fn worker_build_contains_only_script_and_binary() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("webworker.js"), "wasm_bindgen.run_worker();").unwrap();
    // A static dir exists but the worker never copies it
    fs::create_dir_all(dir.path().join("static")).unwrap();
    fs::write(dir.path().join("static/index.html"), "<html/>").unwrap();

    let report = BuildUseCase::new(FakeCompiler::default())
        .execute(&worker_desc(dir.path()))
        .unwrap();

    assert_eq!(
        report.files,
        vec![PathBuf::from("webworker.js"), PathBuf::from("webworker.wasm")]
    );
    assert_eq!(report.assets_copied, 0);
    assert!(!dir.path().join("dist/index.html").exists());
}

#[test]
fn missing_static_dir_fails_before_compiling_or_writing() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("ffxii_tza_rng.js"), "run();").unwrap();
    let compiler = FakeCompiler::default();

    let err = BuildUseCase::new(&compiler)
        .execute(&app_desc(dir.path(), Mode::Production))
        .unwrap_err();

    assert!(matches!(err, BundleError::AssetDirNotFound { .. }));
    assert_eq!(compiler.calls.get(), 0);
    assert!(!dir.path().join("dist").exists());
}

#[test]
fn missing_entry_fails_before_compiling() {
    let dir = tempdir().unwrap();
    let compiler = FakeCompiler::default();

    let err = BuildUseCase::new(&compiler)
        .execute(&worker_desc(dir.path()))
        .unwrap_err();

    assert!(matches!(err, BundleError::EntryNotFound { .. }));
    assert_eq!(compiler.calls.get(), 0);
}

#[test]
fn compiler_failure_keeps_previous_bundle() {
    let dir = tempdir().unwrap();
    app_project(dir.path());
    let dist = dir.path().join("dist");
    fs::create_dir_all(&dist).unwrap();
    fs::write(dist.join("ffxii_tza_rng.js"), "previous build").unwrap();

    let err = BuildUseCase::new(FailingCompiler)
        .execute(&app_desc(dir.path(), Mode::Production))
        .unwrap_err();

    assert!(matches!(err, BundleError::CompilationFailed { .. }));
    assert_eq!(
        fs::read_to_string(dist.join("ffxii_tza_rng.js")).unwrap(),
        "previous build"
    );
}

#[test]
fn rebuild_replaces_stale_files() {
    let dir = tempdir().unwrap();
    app_project(dir.path());
    let compiler = FakeCompiler::default();
    let use_case = BuildUseCase::new(&compiler);

    use_case
        .execute(&app_desc(dir.path(), Mode::Development))
        .unwrap();
    fs::remove_file(dir.path().join("static/img/cure.png")).unwrap();
    use_case
        .execute(&app_desc(dir.path(), Mode::Development))
        .unwrap();

    assert!(!dir.path().join("dist/img/cure.png").exists());
    assert_eq!(compiler.calls.get(), 2);
}

#[test]
fn static_file_with_bundle_name_is_overwritten_by_emitted_script() {
    let dir = tempdir().unwrap();
    app_project(dir.path());
    fs::write(dir.path().join("static/ffxii_tza_rng.js"), "static copy").unwrap();

    BuildUseCase::new(FakeCompiler::default())
        .execute(&app_desc(dir.path(), Mode::Development))
        .unwrap();

    let script = fs::read_to_string(dir.path().join("dist/ffxii_tza_rng.js")).unwrap();
    assert_ne!(script, "static copy");
}

#[test]
fn loader_without_binary_reference_fails_and_keeps_previous_bundle() {
    let dir = tempdir().unwrap();
    app_project(dir.path());
    let dist = dir.path().join("dist");
    fs::create_dir_all(&dist).unwrap();
    fs::write(dist.join("ffxii_tza_rng.js"), "previous build").unwrap();

    let err = BuildUseCase::new(UnlinkedCompiler)
        .execute(&app_desc(dir.path(), Mode::Production))
        .unwrap_err();

    match err {
        BundleError::UnlinkedLoader { binary, .. } => assert_eq!(binary, "ffxii_tza_rng_bg.wasm"),
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(
        fs::read_to_string(dist.join("ffxii_tza_rng.js")).unwrap(),
        "previous build"
    );
}

#[test]
fn render_script_points_no_modules_loader_at_bundled_binary() {
    let script = render_script(
        NO_MODULES_LOADER,
        "wasm_bindgen();\n",
        "ffxii_tza_rng_bg.wasm",
        "ffxii_tza_rng.wasm",
    )
    .unwrap();

    assert!(script.contains("module_or_path = new URL('ffxii_tza_rng.wasm', script_src).toString();"));
    assert!(!script.contains(DERIVED_BINARY_PATH));
    assert!(script.ends_with("})();\nwasm_bindgen();\n"));
}

#[test]
fn render_script_renames_literal_binary_reference() {
    assert_eq!(
        render_script(
            "input = new URL('a_bg.wasm', import.meta.url);",
            "run();",
            "a_bg.wasm",
            "a.wasm"
        )
        .unwrap(),
        "input = new URL('a.wasm', import.meta.url);\nrun();"
    );
}

#[test]
fn render_script_rejects_loader_without_binary_reference() {
    assert_eq!(render_script("", "run();", "a_bg.wasm", "a.wasm"), None);
    assert_eq!(
        render_script("let wasm_bindgen = {};", "run();", "a_bg.wasm", "a.wasm"),
        None
    );
}
