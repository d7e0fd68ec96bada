//! Build Mode Value Object
//!
//! Mode is the only input that changes behavior between builds of the same
//! pipeline. It drives exactly two flags: response compression and watching.

use std::path::{Component, Path, PathBuf};

use serde::{Deserialize, Serialize};

/// The only flag value that selects production mode.
pub const PRODUCTION_FLAG: &str = "production";

/// Build mode
///
/// - `Development`: watch sources, serve uncompressed (default)
/// - `Production`: single build, compressed responses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Development,
    Production,
}

impl Mode {
    /// Resolve a raw mode flag.
    ///
    /// Only the exact string `"production"` selects production. Anything
    /// else, including a missing flag, falls back to development.
    pub fn from_flag(flag: Option<&str>) -> Self {
        match flag {
            Some(PRODUCTION_FLAG) => Mode::Production,
            _ => Mode::Development,
        }
    }

    pub fn is_production(self) -> bool {
        self == Mode::Production
    }

    /// Whether the dev server compresses responses.
    pub fn compression_enabled(self) -> bool {
        self.is_production()
    }

    /// Whether the pipeline keeps rebuilding on source changes.
    pub fn watch_enabled(self) -> bool {
        !self.is_production()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Development => "development",
            Mode::Production => PRODUCTION_FLAG,
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-invocation build context handed to every pipeline constructor.
///
/// Built once from CLI flags and environment, never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildContext {
    mode: Mode,
    project_root: PathBuf,
}

impl BuildContext {
    pub fn new(mode: Mode, project_root: impl Into<PathBuf>) -> Self {
        Self {
            mode,
            project_root: project_root.into(),
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Resolve a configured path against the project root, dropping `.` segments.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        let joined = if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.project_root.join(path)
        };
        joined
            .components()
            .filter(|c| !matches!(c, Component::CurDir))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_development() {
        assert_eq!(Mode::default(), Mode::Development);
    }

    #[test]
    fn only_exact_production_flag_selects_production() {
        assert_eq!(Mode::from_flag(Some("production")), Mode::Production);
        assert_eq!(Mode::from_flag(Some("Production")), Mode::Development);
        assert_eq!(Mode::from_flag(Some("prod")), Mode::Development);
        assert_eq!(Mode::from_flag(Some("")), Mode::Development);
        assert_eq!(Mode::from_flag(None), Mode::Development);
    }

    #[test]
    fn production_compresses_and_does_not_watch() {
        let mode = Mode::Production;
        assert!(mode.compression_enabled());
        assert!(!mode.watch_enabled());
    }

    #[test]
    fn development_watches_without_compression() {
        let mode = Mode::Development;
        assert!(!mode.compression_enabled());
        assert!(mode.watch_enabled());
    }

    #[test]
    fn serde_lowercase() {
        let mode: Mode = serde_json::from_str(r#""production""#).unwrap();
        assert_eq!(mode, Mode::Production);
        assert_eq!(
            serde_json::to_string(&Mode::Development).unwrap(),
            r#""development""#
        );
    }

    #[test]
    fn context_resolves_relative_paths_against_root() {
        let ctx = BuildContext::new(Mode::Development, "/project");
        assert_eq!(ctx.resolve(Path::new("dist")), PathBuf::from("/project/dist"));
        assert_eq!(ctx.resolve(Path::new(".")), PathBuf::from("/project"));
        assert_eq!(ctx.resolve(Path::new("./pkg")), PathBuf::from("/project/pkg"));
    }

    #[cfg(unix)]
    #[test]
    fn context_keeps_absolute_paths() {
        let ctx = BuildContext::new(Mode::Development, "/project");
        assert_eq!(ctx.resolve(Path::new("/srv/www")), PathBuf::from("/srv/www"));
    }
}
