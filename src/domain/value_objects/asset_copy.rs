//! Asset copy rule value object

use std::path::{Path, PathBuf};

use serde::Serialize;

/// Copy every file under `source_dir` into `dest_dir`, keeping sub-paths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssetCopyRule {
    source_dir: PathBuf,
    dest_dir: PathBuf,
}

impl AssetCopyRule {
    pub fn new(source_dir: impl Into<PathBuf>, dest_dir: impl Into<PathBuf>) -> Self {
        Self {
            source_dir: source_dir.into(),
            dest_dir: dest_dir.into(),
        }
    }

    pub fn source_dir(&self) -> &Path {
        &self.source_dir
    }

    pub fn dest_dir(&self) -> &Path {
        &self.dest_dir
    }

    /// Destination path relative to the bundle root.
    ///
    /// Rules always land inside the bundle; a destination outside the output
    /// directory maps onto the bundle root.
    pub fn relative_dest(&self, output_dir: &Path) -> PathBuf {
        self.dest_dir
            .strip_prefix(output_dir)
            .map(Path::to_path_buf)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dest_at_output_root_is_empty_relative_path() {
        let rule = AssetCopyRule::new("/app/static", "/app/dist");
        assert_eq!(rule.relative_dest(Path::new("/app/dist")), PathBuf::new());
    }

    #[test]
    fn nested_dest_keeps_sub_path() {
        let rule = AssetCopyRule::new("/app/img", "/app/dist/img");
        assert_eq!(
            rule.relative_dest(Path::new("/app/dist")),
            PathBuf::from("img")
        );
    }
}
