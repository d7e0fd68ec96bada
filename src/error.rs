//! Error types for wasm-bundle
//!
//! Library code returns `BundleResult`; the binary wraps it in `anyhow`.

use std::net::SocketAddr;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for wasm-bundle operations
pub type BundleResult<T> = Result<T, BundleError>;

/// Main error type for wasm-bundle operations
#[derive(Error, Debug)]
pub enum BundleError {
    /// Entry script path is empty or otherwise unusable
    #[error("invalid entry path '{path}': {reason}")]
    InvalidEntry { path: PathBuf, reason: String },

    /// Entry script does not exist at build time
    #[error("entry script not found: {path}")]
    EntryNotFound { path: PathBuf },

    /// Output file names must be plain and distinct
    #[error("invalid output filename '{name}': {reason}")]
    InvalidFilename { name: String, reason: String },

    /// Config file could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// The compilation delegate executable is not available
    #[error("compiler '{program}' not found (install it or set WASM_PACK)")]
    CompilerNotFound { program: String },

    /// The compilation delegate ran but reported failure
    #[error("compilation failed ({status}): {stderr}")]
    CompilationFailed { status: String, stderr: String },

    /// The compilation delegate succeeded but an expected artifact is missing
    #[error("compiler did not produce expected artifact: {path}")]
    MissingArtifact { path: PathBuf },

    /// The loader script gives no way to point it at the bundled binary module
    #[error("loader script {path} never references its binary module '{binary}'")]
    UnlinkedLoader { path: PathBuf, binary: String },

    /// Asset copy source directory does not exist
    #[error("asset directory not found: {path}")]
    AssetDirNotFound { path: PathBuf },

    /// Dev server could not bind its listening address
    #[error("failed to bind dev server on {addr}: {source}")]
    ServerBind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    /// File watcher setup failed
    #[error("watch error: {0}")]
    Watch(#[from] notify::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
