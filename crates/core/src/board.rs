//! Board module - the decoded playfield
//!
//! The wire format only carries a flat cell array, so the board recovers its
//! own dimensions from the cell count (see [`Geometry::infer`]).
//! Coordinates: (x, y) where x is the column (left to right) and y is the row,
//! row 0 being the top of the field. Storage is row-major (`y * width + x`).

use crate::profile::HeightProfile;
use crate::types::{Cell, CANDIDATE_WIDTHS, DEFAULT_HEIGHT, DEFAULT_WIDTH};

/// Board dimensions recovered from a cell count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    pub width: usize,
    pub height: usize,
}

impl Geometry {
    /// Infer dimensions from the total number of cells.
    ///
    /// The first of [`CANDIDATE_WIDTHS`] that divides `len` wins. Otherwise the
    /// width falls back to [`DEFAULT_WIDTH`] with as many whole rows as fit,
    /// or [`DEFAULT_HEIGHT`] rows when not even one fits.
    ///
    /// # Examples
    ///
    /// ```
    /// use puyo_ai_core::Geometry;
    ///
    /// assert_eq!(Geometry::infer(78), Geometry { width: 6, height: 13 });
    /// assert_eq!(Geometry::infer(91), Geometry { width: 7, height: 13 });
    /// assert_eq!(Geometry::infer(4), Geometry { width: 6, height: 13 });
    /// ```
    pub fn infer(len: usize) -> Self {
        if let Some(&width) = CANDIDATE_WIDTHS.iter().find(|&&w| len % w == 0) {
            return Self {
                width,
                height: len / width,
            };
        }

        let height = match len / DEFAULT_WIDTH {
            0 => DEFAULT_HEIGHT,
            rows => rows,
        };
        Self {
            width: DEFAULT_WIDTH,
            height,
        }
    }

    /// Total number of cells covered by this geometry
    pub fn area(&self) -> usize {
        self.width * self.height
    }

    /// Check if the geometry accounts for exactly `len` cells
    pub fn is_exact_for(&self, len: usize) -> bool {
        self.area() == len
    }
}

/// The decoded playfield, `width * height` cells in row-major order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: Vec<Cell>,
    geometry: Geometry,
}

impl Board {
    /// Build a board from a raw cell sequence, inferring its geometry.
    ///
    /// When no candidate width fits the count exactly, trailing cells that do
    /// not form a whole row are dropped, and a sequence shorter than one row
    /// is padded with empty cells up to the default height.
    pub fn from_cells(mut cells: Vec<Cell>) -> Self {
        let geometry = Geometry::infer(cells.len());
        cells.resize(geometry.area(), Cell::EMPTY);
        Self { cells, geometry }
    }

    /// Build an all-empty board of `len` cells
    pub fn blank(len: usize) -> Self {
        Self::from_cells(vec![Cell::EMPTY; len])
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: usize, y: usize) -> Option<usize> {
        if x >= self.geometry.width || y >= self.geometry.height {
            return None;
        }
        Some(y * self.geometry.width + x)
    }

    /// Get width of the board
    pub fn width(&self) -> usize {
        self.geometry.width
    }

    /// Get height of the board
    pub fn height(&self) -> usize {
        self.geometry.height
    }

    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    /// All cells, row-major
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: usize, y: usize) -> bool {
        matches!(self.get(x, y), Some(c) if c.is_occupied())
    }

    /// Row index of the topmost occupied cell in column `x`,
    /// or `height` if the column is empty
    pub fn column_top(&self, x: usize) -> usize {
        (0..self.height())
            .find(|&y| self.is_occupied(x, y))
            .unwrap_or(self.height())
    }

    /// Per-column free space
    pub fn height_profile(&self) -> HeightProfile {
        HeightProfile::from_board(self)
    }
}
