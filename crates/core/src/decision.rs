//! Decision module - the placement pipeline and its degraded variants
//!
//! [`decide`] is the only path that looks at the board. The two fallbacks
//! ([`Decision::fallback`], [`Decision::queue_only`]) are fixed responses for
//! inputs that carry no usable board.

use crate::board::Board;
use crate::plan::plan_moves;
use crate::select::{select_column, select_rotation};
use crate::types::{
    MoveToken, Pair, Rotation, COMPUTED_EVAL, FALLBACK_COLUMN, FALLBACK_EVAL, SPAWN_COLUMN,
};

/// Upcoming pieces, next piece first
pub type Queue = Vec<Pair>;

/// A placement for the currently falling pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decision {
    /// Target column of the pivot cell
    pub column: usize,
    pub rotation: Rotation,
    /// Client inputs, always ending in [`MoveToken::Drop`]
    pub moves: Vec<MoveToken>,
    /// Placeholder score; carries no board evaluation
    pub eval: i32,
    /// First queue entry, when one was available
    pub consumed: Option<Pair>,
}

impl Decision {
    /// Fixed answer when there is neither a board nor a queue to act on.
    pub fn fallback() -> Self {
        Self {
            column: FALLBACK_COLUMN,
            rotation: Rotation::Vertical,
            moves: vec![MoveToken::Left, MoveToken::Left, MoveToken::Drop],
            eval: FALLBACK_EVAL,
            consumed: None,
        }
    }

    /// Minimal answer anchored at the fallback column, echoing `pair`.
    pub fn queue_only(pair: Pair) -> Self {
        Self {
            column: FALLBACK_COLUMN,
            rotation: Rotation::Vertical,
            moves: vec![MoveToken::Left, MoveToken::Drop],
            eval: COMPUTED_EVAL,
            consumed: Some(pair),
        }
    }

    /// Check if this is the fixed fallback decision
    pub fn is_fallback(&self) -> bool {
        self.eval == FALLBACK_EVAL
    }
}

/// Run the full placement pipeline on a decoded board.
///
/// Pure: the same board and queue always produce the same decision.
///
/// # Examples
///
/// ```
/// use puyo_ai_core::{decide, Board};
/// use puyo_ai_types::{MoveToken, Rotation};
///
/// let board = Board::blank(78);
/// let d = decide(&board, &[]);
/// assert_eq!(d.column, 3);
/// assert_eq!(d.rotation, Rotation::HorizontalRight);
/// assert_eq!(d.moves, vec![MoveToken::Right, MoveToken::Drop]);
/// ```
pub fn decide(board: &Board, queue: &[Pair]) -> Decision {
    let profile = board.height_profile();
    let column = select_column(&profile);
    let rotation = select_rotation(&profile, column);

    Decision {
        column,
        rotation,
        moves: plan_moves(SPAWN_COLUMN, column),
        eval: COMPUTED_EVAL,
        consumed: queue.first().copied(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Cell;

    #[test]
    fn fallback_is_fixed() {
        let d = Decision::fallback();
        assert_eq!(d.column, 2);
        assert_eq!(d.rotation, Rotation::Vertical);
        assert_eq!(
            d.moves,
            vec![MoveToken::Left, MoveToken::Left, MoveToken::Drop]
        );
        assert_eq!(d.eval, 12345);
        assert!(d.consumed.is_none());
        assert!(d.is_fallback());
    }

    #[test]
    fn queue_only_echoes_pair() {
        let d = Decision::queue_only(Pair::new(1, 4));
        assert_eq!(d.column, 2);
        assert_eq!(d.moves, vec![MoveToken::Left, MoveToken::Drop]);
        assert_eq!(d.eval, 0);
        assert_eq!(d.consumed, Some(Pair::new(1, 4)));
        assert!(!d.is_fallback());
    }

    #[test]
    fn decide_consumes_first_queue_entry_only() {
        let board = Board::blank(78);
        let d = decide(&board, &[Pair::new(3, 3), Pair::new(1, 2)]);
        assert_eq!(d.consumed, Some(Pair::new(3, 3)));
        assert_eq!(d.eval, 0);
    }

    #[test]
    fn decide_moves_left_toward_open_column() {
        // 6x13 board, every column but 0 filled up to row 4.
        let mut cells = vec![Cell::EMPTY; 78];
        for y in 4..13 {
            for x in 1..6 {
                cells[y * 6 + x] = Cell(2);
            }
        }
        let d = decide(&Board::from_cells(cells), &[]);
        assert_eq!(d.column, 0);
        assert_eq!(d.rotation, Rotation::HorizontalRight);
        assert_eq!(
            d.moves,
            vec![MoveToken::Left, MoveToken::Left, MoveToken::Drop]
        );
        assert!(d.consumed.is_none());
    }
}
