//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the decision engine.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core heuristics, wire protocol, tests).
//!
//! # Board Geometry
//!
//! The wire format carries a flat cell array with no explicit dimensions, so the
//! geometry is recovered from the cell count:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `CANDIDATE_WIDTHS` | 6, 7, 8, 5 | Widths tried in priority order |
//! | `DEFAULT_WIDTH` | 6 | Width when no candidate divides the cell count |
//! | `DEFAULT_HEIGHT` | 13 | Height when the fallback width yields no rows |
//! | `MAX_BOARD_WIDTH` | 8 | Largest width inference can produce |
//!
//! # Placement Constants
//!
//! - `SPAWN_COLUMN`: 2 - column where a new pair enters the board
//! - `FALLBACK_COLUMN`: 2 - column used by degraded decisions
//! - `FALLBACK_EVAL`: 12345 - sentinel score of the fixed fallback decision
//!
//! # Examples
//!
//! ```
//! use puyo_ai_types::{Cell, MoveToken, Rotation, SPAWN_COLUMN};
//!
//! assert!(Cell::EMPTY.is_empty());
//! assert!(Cell(4).is_occupied());
//!
//! assert_eq!(Rotation::HorizontalLeft.code(), 3);
//!
//! assert_eq!(MoveToken::from_str("drop"), Some(MoveToken::Drop));
//! assert_eq!(MoveToken::Left.as_str(), "LEFT");
//!
//! assert_eq!(SPAWN_COLUMN, 2);
//! ```

use std::fmt;

/// Candidate column counts, tried in order during geometry inference
pub const CANDIDATE_WIDTHS: [usize; 4] = [6, 7, 8, 5];

/// Width used when no candidate divides the cell count
pub const DEFAULT_WIDTH: usize = 6;

/// Height used when the fallback width yields zero rows
pub const DEFAULT_HEIGHT: usize = 13;

/// Largest width geometry inference can produce.
pub const MAX_BOARD_WIDTH: usize = 8;

/// Column where a new pair enters the board (client contract).
pub const SPAWN_COLUMN: usize = 2;

/// Column anchoring every degraded decision
pub const FALLBACK_COLUMN: usize = 2;

/// Sentinel evaluation score of the fixed fallback decision
pub const FALLBACK_EVAL: i32 = 12345;

/// Evaluation score reported on the computed path (placeholder, no real evaluation)
pub const COMPUTED_EVAL: i32 = 0;


/// One grid position on the board.
///
/// The value is an opaque marker: `0` is empty, anything else is occupied.
/// The core never branches on which nonzero value a cell holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Cell(pub i64);

impl Cell {
    /// The empty cell
    pub const EMPTY: Cell = Cell(0);

    /// Check if the cell is empty
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Check if the cell holds any piece
    pub fn is_occupied(self) -> bool {
        self.0 != 0
    }
}

/// Opaque colour identifier of one half of a falling pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color(pub i64);

/// A queue entry: the two colours of one falling piece.
///
/// `pivot` is the cell the placement column refers to, `satellite` is the
/// second cell whose side is chosen by [`Rotation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pair {
    pub pivot: Color,
    pub satellite: Color,
}

impl Pair {
    pub fn new(pivot: i64, satellite: i64) -> Self {
        Self {
            pivot: Color(pivot),
            satellite: Color(satellite),
        }
    }
}

/// Orientation of a two-cell piece relative to its pivot column
///
/// Wire codes follow the client contract:
/// - **Vertical** (`0`): satellite stacked on the pivot, no horizontal offset
/// - **HorizontalRight** (`1`): satellite one column to the right
/// - **HorizontalLeft** (`3`): satellite one column to the left
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    Vertical,
    HorizontalRight,
    HorizontalLeft,
}

impl Rotation {
    /// Wire code of the rotation
    pub fn code(self) -> u8 {
        match self {
            Rotation::Vertical => 0,
            Rotation::HorizontalRight => 1,
            Rotation::HorizontalLeft => 3,
        }
    }
}

/// Discrete input sent to the game client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveToken {
    /// Shift the piece one column left
    Left,
    /// Shift the piece one column right
    Right,
    /// Drop the piece into place
    Drop,
}

impl MoveToken {
    /// Parse a token from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        if s.eq_ignore_ascii_case("left") {
            Some(MoveToken::Left)
        } else if s.eq_ignore_ascii_case("right") {
            Some(MoveToken::Right)
        } else if s.eq_ignore_ascii_case("drop") {
            Some(MoveToken::Drop)
        } else {
            None
        }
    }

    /// Upper-case wire spelling
    pub fn as_str(self) -> &'static str {
        match self {
            MoveToken::Left => "LEFT",
            MoveToken::Right => "RIGHT",
            MoveToken::Drop => "DROP",
        }
    }
}

impl fmt::Display for MoveToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
