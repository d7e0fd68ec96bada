//! Domain Ports (Interfaces)
//!
//! Infrastructure provides the concrete implementations.

pub mod compilation_delegate;

pub use compilation_delegate::{
    CompilationDelegate, CompileArtifacts, CompileProfile, CompileStep, NO_TYPESCRIPT_FLAG,
};
