//! Configuration module for wasm-bundle
//!
//! Resolution order:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (WASM_BUNDLE_*)
//! 3. Project config (wasm-bundle.toml in the project root)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{
    load_or_default, load_with_warnings, mode_flag, with_env_overrides, ConfigWarning,
    CONFIG_FILE, ENV_MODE, ENV_PORT,
};
pub use types::{AppConfig, CompileConfig, Config, ServerConfig, WorkerConfig};
