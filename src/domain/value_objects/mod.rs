//! Value Objects
//!
//! Immutable types describing one build.

mod asset_copy;
mod build_target;
mod mode;
mod server_options;

pub use asset_copy::AssetCopyRule;
pub use build_target::BuildTarget;
pub use mode::{BuildContext, Mode, PRODUCTION_FLAG};
pub use server_options::{ServerOptions, DEFAULT_HOST, DEFAULT_PORT};
