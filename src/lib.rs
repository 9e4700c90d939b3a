//! Puyo AI (workspace facade crate).
//!
//! Exposes `puyo_ai::{core,adapter,types}` while the implementation lives in
//! dedicated crates under `crates/`.

pub use puyo_ai_adapter as adapter;
pub use puyo_ai_core as core;
pub use puyo_ai_types as types;
