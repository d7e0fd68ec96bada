//! Compilation delegate implementations

mod wasm_pack;

pub use wasm_pack::{WasmPack, ENV_WASM_PACK};
