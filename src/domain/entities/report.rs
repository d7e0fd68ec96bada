//! Build report - what a successful run left in the output directory.

use std::path::PathBuf;
use std::time::Duration;

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildReport {
    /// Committed bundle directory
    pub output_dir: PathBuf,
    /// Files written, relative to `output_dir`, sorted
    pub files: Vec<PathBuf>,
    /// Number of files copied from static asset directories
    pub assets_copied: usize,
    #[serde(skip)]
    pub elapsed: Duration,
}

impl BuildReport {
    pub fn contains(&self, relative: &str) -> bool {
        self.files.iter().any(|f| f == std::path::Path::new(relative))
    }
}
