//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{BundleError, BundleResult};

use super::types::Config;

/// Project config file name, looked up in the project root
pub const CONFIG_FILE: &str = "wasm-bundle.toml";

/// Environment variable consulted when `--mode` is not given
pub const ENV_MODE: &str = "WASM_BUNDLE_MODE";

/// Environment variable overriding the dev server port
pub const ENV_PORT: &str = "WASM_BUNDLE_PORT";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> BundleResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| BundleError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load the project config if present, otherwise defaults, then apply env overrides.
///
/// A config file that exists but does not parse is an error, never silently
/// replaced by defaults.
pub fn load_or_default(project_root: &Path) -> BundleResult<(Config, Vec<ConfigWarning>)> {
    let path = project_root.join(CONFIG_FILE);
    let (config, warnings) = if path.is_file() {
        tracing::debug!(config = %path.display(), "loading project config");
        load_with_warnings(&path)?
    } else {
        tracing::debug!(root = %project_root.display(), "no project config, using defaults");
        (Config::default(), Vec::new())
    };

    Ok((with_env_overrides(config), warnings))
}

/// Apply environment variable overrides (WASM_BUNDLE_* prefix)
pub fn with_env_overrides(mut config: Config) -> Config {
    if let Ok(port) = std::env::var(ENV_PORT) {
        match port.trim().parse::<u16>() {
            Ok(port) => config.app.server.port = port,
            Err(_) => tracing::warn!(value = %port, "ignoring invalid {ENV_PORT}"),
        }
    }

    config
}

/// Raw mode flag: the CLI value if given, else the environment, else none.
pub fn mode_flag(cli: Option<&str>) -> Option<String> {
    cli.map(str::to_string)
        .or_else(|| std::env::var(ENV_MODE).ok())
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|index| index + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "app",
        "worker",
        "entry",
        "out_dir",
        "filename",
        "wasm_filename",
        "static_dir",
        "watch_dirs",
        "compile",
        "crate_dir",
        "target",
        "profile",
        "extra_args",
        "server",
        "host",
        "port",
    ];

    CANDIDATES
        .iter()
        .map(|candidate| (*candidate, edit_distance(unknown, candidate)))
        .filter(|&(_, dist)| dist <= 2)
        .min_by_key(|&(_, dist)| dist)
        .map(|(candidate, _)| candidate.to_string())
}

/// Edit distance between two keys, counted in chars over a single row.
fn edit_distance(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=b.len()).collect();

    for (i, ca) in a.chars().enumerate() {
        // `diagonal` holds the previous row's value left of the current cell
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let substitute = diagonal + usize::from(ca != cb);
            diagonal = row[j + 1];
            row[j + 1] = substitute.min(diagonal + 1).min(row[j] + 1);
        }
    }
    row[b.len()]
}
