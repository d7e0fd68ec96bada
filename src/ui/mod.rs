//! Terminal output for the CLI.
//!
//! Views render to strings; commands decide where they go.

pub mod blocks;
pub mod context;
pub mod primitives;
pub mod terminal;
pub mod theme;
pub mod views;
