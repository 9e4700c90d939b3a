//! Core decision logic - pure, deterministic, and testable
//!
//! This crate contains the placement pipeline for a two-cell falling piece.
//! It has **zero dependencies** on JSON, I/O, or process plumbing, making it:
//!
//! - **Deterministic**: the same board and queue always give the same decision
//! - **Testable**: every stage is a plain function over plain data
//! - **Portable**: usable from the CLI responder, benches, or any other host
//!
//! # Module Structure
//!
//! - [`board`]: flat cell storage with geometry recovered from the cell count
//! - [`profile`]: per-column free space ([`HeightProfile`])
//! - [`select`]: target column and orientation heuristics
//! - [`plan`]: spawn-to-target move tokens
//! - [`decision`]: the [`decide`] pipeline plus fixed degraded decisions
//!
//! # Pipeline
//!
//! ```text
//! Board -> HeightProfile -> select_column -> select_rotation -> plan_moves -> Decision
//! ```
//!
//! The heuristics are local and greedy: no lookahead, no chain evaluation, and
//! no legality checks against game rules.
//!
//! # Example
//!
//! ```
//! use puyo_ai_core::{decide, Board};
//! use puyo_ai_types::{Cell, Pair, Rotation};
//!
//! // 6x13 board with a single occupied cell at the bottom of column 3.
//! let mut cells = vec![Cell::EMPTY; 78];
//! cells[12 * 6 + 3] = Cell(1);
//! let board = Board::from_cells(cells);
//!
//! let decision = decide(&board, &[Pair::new(1, 2)]);
//! assert_eq!(decision.column, 2);
//! assert_eq!(decision.rotation, Rotation::HorizontalLeft);
//! assert_eq!(decision.consumed, Some(Pair::new(1, 2)));
//! ```

pub mod board;
pub mod decision;
pub mod plan;
pub mod profile;
pub mod select;

pub use puyo_ai_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, Geometry};
pub use decision::{decide, Decision, Queue};
pub use plan::plan_moves;
pub use profile::HeightProfile;
pub use select::{select_column, select_rotation};
