//! Compiler output shared by build and watch tests

use std::fs;

use crate::domain::ports::{CompileArtifacts, CompileStep};
use crate::error::BundleResult;

pub(crate) const WASM_MAGIC: &[u8] = b"\0asm\x01\0\0\0";

/// Trimmed wasm-bindgen `--target no-modules` loader. It never names its
/// binary; the default path is derived from the script's own URL.
pub(crate) const NO_MODULES_LOADER: &str = r#"let wasm_bindgen;
(function() {
    const __exports = {};
    let script_src;
    if (typeof document !== 'undefined' && document.currentScript !== null) {
        script_src = new URL(document.currentScript.src, location.href).toString();
    }
    let wasm = undefined;

    async function __wbg_init(module_or_path) {
        if (wasm !== undefined) return wasm;

        if (typeof module_or_path === 'undefined' && typeof script_src !== 'undefined') {
            module_or_path = script_src.replace(/\.js$/, '_bg.wasm');
        }
        const imports = __wbg_get_imports();

        if (typeof module_or_path === 'string' || (typeof URL === 'function' && module_or_path instanceof URL)) {
            module_or_path = fetch(module_or_path);
        }

        const { instance, module } = await __wbg_load(await module_or_path, imports);
        return __wbg_finalize_init(instance, module);
    }

    wasm_bindgen = Object.assign(__wbg_init, { initSync }, __exports);
})();
"#;

/// Write what wasm-pack would produce for `step` with the `no-modules` target.
pub(crate) fn write_no_modules_output(step: &CompileStep) -> BundleResult<CompileArtifacts> {
    fs::create_dir_all(step.out_dir())?;
    let artifacts = step.expected_artifacts();
    fs::write(&artifacts.loader_script, NO_MODULES_LOADER)?;
    fs::write(&artifacts.binary_module, WASM_MAGIC)?;
    Ok(artifacts)
}
