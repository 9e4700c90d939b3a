//! Adapter module - the JSON think protocol over stdin/stdout
//!
//! This crate turns one raw client snapshot into one placement response. It
//! owns everything the pure decision core does not: JSON decoding and
//! encoding, degraded-input handling, and configuration.
//!
//! # Protocol Overview
//!
//! The game client (through a thin server wrapper) spawns the engine once per
//! piece, writes a snapshot to stdin and reads a single JSON object back:
//!
//! 1. **Request**: `{"self": {"field": [int, ...], "queue": [[int, int], ...]}}`
//! 2. **Response**: `{"placement": {"x", "r"}, "inputs": [...], "eval", "pair"?, "used"?}`
//!
//! `field` is the row-major board with no explicit dimensions; `0` marks an
//! empty cell. `queue` lists upcoming pairs, next first. `r` is the rotation
//! code: `0` vertical, `1` satellite right, `3` satellite left.
//!
//! # Degraded Inputs
//!
//! | Input | Response |
//! |-------|----------|
//! | empty / not JSON / no board and no queue | fixed fallback, `eval` 12345 |
//! | no board, queue present | column 2, `["LEFT","DROP"]`, echo of the first pair |
//! | board present | full pipeline, `eval` 0 |
//!
//! # Environment Variables
//!
//! - `PUYO_AI_COMPACT`: Set to "1" or "true" for single-line output
//! - `PUYO_AI_LOG`: Log level (default: "warn")
//! - `PUYO_AI_LOG_PATH`: Append logs to this file instead of stderr
//!
//! # Example Exchange
//!
//! ```text
//! stdin:  {"mode":"think","self":{"field":[0,0,...,0],"queue":[[1,2]]}}
//! stdout: {"placement":{"x":3,"r":1},"inputs":["RIGHT","DROP"],"eval":0,"pair":[1,2],"used":{"type":"next","index":0}}
//! ```

pub mod protocol;
pub mod runtime;

pub use puyo_ai_core as core;
pub use puyo_ai_types as types;

// Re-export protocol types for convenience
pub use protocol::*;
pub use runtime::{respond, respond_bytes, Outcome, PipelineState, Responder, ResponderConfig};
