//! Build use case

#[cfg(test)]
pub(crate) mod fixtures;
#[cfg(test)]
mod tests;
mod use_case;

pub use use_case::{preflight, render_script, BuildUseCase, DERIVED_BINARY_PATH};
