//! Common test utilities for wasm-bundle CLI tests.
//!
//! Provides `TestProject`: an isolated project directory with app and worker
//! fixtures, plus a fake `wasm-pack` so builds run without a WASM toolchain.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

pub const APP_ENTRY: &str = "wasm_bindgen.run_app();\n";
pub const WORKER_ENTRY: &str = "wasm_bindgen.run_worker();\n";
pub const INDEX_HTML: &str = "<html><script src=\"ffxii_tza_rng.js\"></script></html>";

/// Stand-in for wasm-pack: writes a `no-modules` loader as `<name>.js`, which
/// derives `<name>_bg.wasm` from its own URL, next to the binary.
const FAKE_WASM_PACK: &str = r#"#!/bin/sh
out=""
name=""
while [ $# -gt 0 ]; do
  case "$1" in
    --out-dir) out="$2"; shift ;;
    --out-name) name="$2"; shift ;;
  esac
  shift
done
mkdir -p "$out"
cat > "$out/$name.js" <<'LOADER'
let wasm_bindgen;
(function() {
    let script_src;
    if (typeof document !== 'undefined' && document.currentScript !== null) {
        script_src = new URL(document.currentScript.src, location.href).toString();
    }
    async function __wbg_init(module_or_path) {
        if (typeof module_or_path === 'undefined' && typeof script_src !== 'undefined') {
            module_or_path = script_src.replace(/\.js$/, '_bg.wasm');
        }
        return __wbg_load(await fetch(module_or_path));
    }
    wasm_bindgen = Object.assign(__wbg_init, {});
})();
LOADER
printf 'asm' > "$out/${name}_bg.wasm"
"#;

/// Result of running the CLI
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

pub struct TestProject {
    pub root: TempDir,
    tools: TempDir,
}

impl TestProject {
    /// Empty project with a fake compiler available.
    pub fn new() -> Self {
        let project = Self {
            root: tempfile::tempdir().unwrap(),
            tools: tempfile::tempdir().unwrap(),
        };
        project.install_fake_compiler();
        project
    }

    /// Project with both entry scripts and a static directory.
    pub fn with_fixtures() -> Self {
        let project = Self::new();
        project.write("ffxii_tza_rng.js", APP_ENTRY);
        project.write("webworker.js", WORKER_ENTRY);
        project.write("static/index.html", INDEX_HTML);
        project.write("static/img/cure.png", "png");
        project.write("src/lib.rs", "pub fn run_app() {}\n");
        project
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    pub fn write(&self, relative: &str, content: &str) {
        let path = self.path(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.path(relative)).unwrap()
    }

    pub fn compiler_path(&self) -> PathBuf {
        self.tools.path().join("wasm-pack")
    }

    /// Command for the CLI binary, run from the project root.
    pub fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_wasm-bundle"));
        cmd.current_dir(self.root.path())
            .args(args)
            .env("WASM_PACK", self.compiler_path())
            .env("NO_COLOR", "1")
            .env_remove("WASM_BUNDLE_MODE")
            .env_remove("WASM_BUNDLE_PORT")
            .env_remove("RUST_LOG");
        cmd
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        let output = self.command(args).output().unwrap();
        to_result(output)
    }

    fn install_fake_compiler(&self) {
        let path = self.compiler_path();
        fs::write(&path, FAKE_WASM_PACK).unwrap();
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        }
    }
}

pub fn to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

/// Files under `dir`, relative and sorted.
pub fn list_files(dir: &Path) -> Vec<String> {
    let mut files = Vec::new();
    collect(dir, dir, &mut files);
    files.sort();
    files
}

fn collect(base: &Path, dir: &Path, files: &mut Vec<String>) {
    for entry in fs::read_dir(dir).unwrap() {
        let path = entry.unwrap().path();
        if path.is_dir() {
            collect(base, &path, files);
        } else {
            let rel = path.strip_prefix(base).unwrap();
            files.push(rel.to_string_lossy().replace('\\', "/"));
        }
    }
}
