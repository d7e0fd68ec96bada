//! Watch Use Case
//!
//! Rebuilds a pipeline whenever one of its inputs changes:
//! - Debouncing (100ms)
//! - Content hashing to drop no-op saves
//! - Graceful Ctrl+C shutdown via a shared running flag
//! - NDJSON-serializable events

mod event;
mod use_case;

pub use event::{compute_content_hash, WatchEvent, WatcherState, DEBOUNCE_MS};
pub use use_case::{is_ignored, watch_inputs, WatchSet, WatchUseCase};
