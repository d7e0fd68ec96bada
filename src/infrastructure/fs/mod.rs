//! File system implementations
//!
//! - `staging` - build into a sibling temp directory, swap into place on success
//! - `assets` - copy static asset trees into a staged bundle

mod assets;
mod staging;

pub use assets::copy_assets;
pub use staging::StagedBundle;
