//! Staged bundle directory
//!
//! A bundle is assembled in a temp directory next to the output directory
//! and renamed into place only once every file is written. A build that
//! fails midway drops the staging directory and leaves the previous bundle
//! untouched, so a directory at the output path is always a complete build.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::error::BundleResult;

const STAGING_PREFIX: &str = ".wasm-bundle-staging-";
const PREVIOUS_PREFIX: &str = ".wasm-bundle-previous-";

/// Bundle being assembled; dropped without `commit` it leaves no trace.
#[derive(Debug)]
pub struct StagedBundle {
    dir: TempDir,
    output_dir: PathBuf,
    files: BTreeSet<PathBuf>,
}

impl StagedBundle {
    /// Create a staging directory on the same file system as `output_dir`.
    pub fn new(output_dir: &Path) -> BundleResult<Self> {
        let parent = parent_of(output_dir);
        fs::create_dir_all(&parent)?;
        let dir = tempfile::Builder::new()
            .prefix(STAGING_PREFIX)
            .tempdir_in(&parent)?;
        tracing::debug!(staging = %dir.path().display(), "created staging directory");

        Ok(Self {
            dir,
            output_dir: output_dir.to_path_buf(),
            files: BTreeSet::new(),
        })
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Files written so far, relative to the bundle root.
    pub fn files(&self) -> impl Iterator<Item = &Path> {
        self.files.iter().map(PathBuf::as_path)
    }

    /// Write `content` to `relative` inside the bundle, replacing any earlier file.
    pub fn write(&mut self, relative: &Path, content: &[u8]) -> BundleResult<()> {
        let target = self.prepare(relative)?;
        fs::write(&target, content)?;
        self.files.insert(relative.to_path_buf());
        Ok(())
    }

    /// Copy `source` to `relative` inside the bundle, replacing any earlier file.
    pub fn copy_file(&mut self, source: &Path, relative: &Path) -> BundleResult<()> {
        let target = self.prepare(relative)?;
        fs::copy(source, &target)?;
        self.files.insert(relative.to_path_buf());
        Ok(())
    }

    fn prepare(&self, relative: &Path) -> BundleResult<PathBuf> {
        let target = self.dir.path().join(relative);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(target)
    }

    /// Swap the staged bundle into the output path.
    ///
    /// Returns the committed files, relative to the output directory.
    pub fn commit(self) -> BundleResult<Vec<PathBuf>> {
        let Self {
            dir,
            output_dir,
            files,
        } = self;
        set_public_permissions(dir.path())?;

        let parent = parent_of(&output_dir);
        // Dropping `previous` deletes the old bundle once the swap is done.
        let previous = tempfile::Builder::new()
            .prefix(PREVIOUS_PREFIX)
            .tempdir_in(&parent)?;
        let moved_aside = previous.path().join("bundle");

        let had_previous = output_dir.exists();
        if had_previous {
            fs::rename(&output_dir, &moved_aside)?;
        }

        let staged = dir.keep();
        if let Err(e) = fs::rename(&staged, &output_dir) {
            if had_previous {
                let _ = fs::rename(&moved_aside, &output_dir);
            }
            let _ = fs::remove_dir_all(&staged);
            return Err(e.into());
        }

        tracing::debug!(output = %output_dir.display(), "committed bundle");
        Ok(files.into_iter().collect())
    }
}

fn parent_of(path: &Path) -> PathBuf {
    match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

#[cfg(unix)]
fn set_public_permissions(dir: &Path) -> BundleResult<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(dir, fs::Permissions::from_mode(0o755))?;
    Ok(())
}

#[cfg(not(unix))]
fn set_public_permissions(_dir: &Path) -> BundleResult<()> {
    Ok(())
}
