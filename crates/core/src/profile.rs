//! Per-column free space of a board.

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::types::MAX_BOARD_WIDTH;

/// One free-space value per column: the row index of the column's topmost
/// occupied cell, or the board height when the column is empty.
///
/// Larger values mean more room above the stack. Every value lies in
/// `[0, height]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeightProfile {
    free: ArrayVec<usize, MAX_BOARD_WIDTH>,
    height: usize,
}

impl HeightProfile {
    /// Scan every column of `board` from the top.
    pub fn from_board(board: &Board) -> Self {
        let mut free = ArrayVec::new();
        for x in 0..board.width() {
            free.push(board.column_top(x));
        }
        Self {
            free,
            height: board.height(),
        }
    }

    /// Build a profile directly from free-space values.
    ///
    /// Returns None if there are more than [`MAX_BOARD_WIDTH`] columns or a
    /// value exceeds `height`.
    pub fn from_values(values: &[usize], height: usize) -> Option<Self> {
        if values.iter().any(|&v| v > height) {
            return None;
        }
        let free = ArrayVec::try_from(values).ok()?;
        Some(Self { free, height })
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.free.len()
    }

    /// Board height the values are measured against
    pub fn height(&self) -> usize {
        self.height
    }

    /// Free space of column `x`, None if out of bounds
    pub fn free_space(&self, x: usize) -> Option<usize> {
        self.free.get(x).copied()
    }

    /// Check if column `x` holds no occupied cell
    pub fn is_column_empty(&self, x: usize) -> bool {
        self.free_space(x) == Some(self.height)
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.free
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Cell;

    #[test]
    fn empty_board_profile_is_full_height() {
        let board = Board::blank(78);
        let profile = board.height_profile();
        assert_eq!(profile.as_slice(), &[13; 6]);
        assert!((0..6).all(|x| profile.is_column_empty(x)));
    }

    #[test]
    fn profile_tracks_topmost_cell() {
        let mut board = Board::blank(78);
        board.set(0, 0, Cell(1));
        board.set(3, 12, Cell(2));
        board.set(3, 7, Cell(5));

        let profile = board.height_profile();
        assert_eq!(profile.as_slice(), &[0, 13, 13, 7, 13, 13]);
        assert!(!profile.is_column_empty(0));
        assert_eq!(profile.free_space(6), None);
    }

    #[test]
    fn from_values_rejects_out_of_range() {
        assert!(HeightProfile::from_values(&[1, 14], 13).is_none());
        assert!(HeightProfile::from_values(&[0; 9], 13).is_none());
        let p = HeightProfile::from_values(&[3, 13], 13).unwrap();
        assert_eq!(p.width(), 2);
        assert_eq!(p.height(), 13);
    }
}
