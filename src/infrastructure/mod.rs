//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `compiler/` - Compilation delegates (wasm-pack)
//! - `fs/` - Staged bundle directories and asset copying
//! - `server` - HTTP dev server

pub mod compiler;
pub mod fs;
pub mod server;

// Re-export for convenience
pub use compiler::WasmPack;
pub use fs::{copy_assets, StagedBundle};
