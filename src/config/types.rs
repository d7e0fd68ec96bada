//! Configuration type definitions

use std::net::IpAddr;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::ports::CompileProfile;
use crate::domain::value_objects::{DEFAULT_HOST, DEFAULT_PORT};
use crate::error::BundleResult;

use super::loader;

/// Compilation delegate settings, shared shape for both pipelines
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompileConfig {
    /// Crate the delegate compiles, relative to the project root
    pub crate_dir: PathBuf,
    /// Delegate output directory; defaults to `<crate_dir>/pkg`
    pub out_dir: Option<PathBuf>,
    /// wasm-pack `--target`
    pub target: String,
    pub profile: CompileProfile,
    /// Passed through verbatim after the fixed flags
    pub extra_args: Vec<String>,
}

impl Default for CompileConfig {
    fn default() -> Self {
        Self {
            crate_dir: PathBuf::from("."),
            out_dir: None,
            target: "no-modules".to_string(),
            profile: CompileProfile::default(),
            extra_args: Vec::new(),
        }
    }
}

impl CompileConfig {
    pub fn resolved_out_dir(&self) -> PathBuf {
        self.out_dir
            .clone()
            .unwrap_or_else(|| self.crate_dir.join("pkg"))
    }
}

/// Dev server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST,
            port: DEFAULT_PORT,
        }
    }
}

/// Main-app pipeline configuration (`[app]`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub entry: PathBuf,
    pub out_dir: PathBuf,
    pub filename: String,
    pub wasm_filename: String,
    pub static_dir: PathBuf,
    pub compile: CompileConfig,
    pub server: ServerConfig,
    /// Additional directories that trigger a rebuild in watch mode
    pub watch_dirs: Vec<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            entry: PathBuf::from("ffxii_tza_rng.js"),
            out_dir: PathBuf::from("dist"),
            filename: "ffxii_tza_rng.js".to_string(),
            wasm_filename: "ffxii_tza_rng.wasm".to_string(),
            static_dir: PathBuf::from("static"),
            compile: CompileConfig::default(),
            server: ServerConfig::default(),
            watch_dirs: Vec::new(),
        }
    }
}

/// Worker pipeline configuration (`[worker]`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkerConfig {
    pub entry: PathBuf,
    pub out_dir: PathBuf,
    pub filename: String,
    pub wasm_filename: String,
    pub compile: CompileConfig,
    pub watch_dirs: Vec<PathBuf>,
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self {
            entry: PathBuf::from("webworker.js"),
            out_dir: PathBuf::from("dist"),
            filename: "webworker.js".to_string(),
            wasm_filename: "webworker.wasm".to_string(),
            compile: CompileConfig::default(),
            watch_dirs: Vec::new(),
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub app: AppConfig,

    #[serde(default)]
    pub worker: WorkerConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> BundleResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Apply WASM_BUNDLE_* environment overrides
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }
}
