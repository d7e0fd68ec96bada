//! Domain Layer
//!
//! Pure build-description logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `value_objects/` - Immutable value types (Mode, BuildTarget, AssetCopyRule, ServerOptions)
//! - `entities/` - The resolved `BuildDescription` and the `BuildReport` a run produces
//! - `ports/` - Interface definitions for infrastructure (the compilation delegate)

pub mod entities;
pub mod ports;
pub mod value_objects;
