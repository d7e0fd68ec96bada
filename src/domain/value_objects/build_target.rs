//! Build target value object - where a pipeline reads its entry script and
//! what it names the emitted files.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{BundleError, BundleResult};

/// Entry script plus the stable names of the two emitted artifacts.
///
/// The emitted script locates its binary module by `binary_output_filename`
/// at load time, so both names are fixed per pipeline and never depend on
/// the build mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildTarget {
    entry_path: PathBuf,
    output_dir: PathBuf,
    output_filename: String,
    binary_output_filename: String,
}

impl BuildTarget {
    pub fn new(
        entry_path: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
        output_filename: impl Into<String>,
        binary_output_filename: impl Into<String>,
    ) -> BundleResult<Self> {
        let entry_path = entry_path.into();
        let output_filename = output_filename.into();
        let binary_output_filename = binary_output_filename.into();

        if entry_path.as_os_str().is_empty() {
            return Err(BundleError::InvalidEntry {
                path: entry_path,
                reason: "path is empty".to_string(),
            });
        }
        if entry_path.file_name().is_none() {
            return Err(BundleError::InvalidEntry {
                path: entry_path,
                reason: "path does not name a file".to_string(),
            });
        }

        validate_filename(&output_filename)?;
        validate_filename(&binary_output_filename)?;
        if output_filename == binary_output_filename {
            return Err(BundleError::InvalidFilename {
                name: binary_output_filename,
                reason: "script and binary module must have distinct names".to_string(),
            });
        }

        Ok(Self {
            entry_path,
            output_dir: output_dir.into(),
            output_filename,
            binary_output_filename,
        })
    }

    pub fn entry_path(&self) -> &Path {
        &self.entry_path
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn output_filename(&self) -> &str {
        &self.output_filename
    }

    pub fn binary_output_filename(&self) -> &str {
        &self.binary_output_filename
    }

    /// File stem of the binary module, used as the compiler's output name.
    pub fn binary_stem(&self) -> &str {
        Path::new(&self.binary_output_filename)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(&self.binary_output_filename)
    }
}

fn validate_filename(name: &str) -> BundleResult<()> {
    let reason = if name.is_empty() {
        Some("name is empty")
    } else if name.contains('/') || name.contains('\\') {
        Some("name must not contain path separators")
    } else if name == "." || name == ".." {
        Some("name must not be a relative directory")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(BundleError::InvalidFilename {
            name: name.to_string(),
            reason: reason.to_string(),
        }),
        None => Ok(()),
    }
}
