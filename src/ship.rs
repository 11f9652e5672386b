//! Ship runs on a fleet grid.

use crate::common::GameError;

/// Orientation of a ship on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// A run of `length` contiguous cells anchored at its top-left cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Ship {
    length: usize,
    orientation: Orientation,
    row: usize,
    col: usize,
}

impl Ship {
    /// Anchor a ship at (`row`, `col`) on a `size × size` grid.
    /// Fails if any cell of the run falls outside the grid.
    pub fn new(
        length: usize,
        orientation: Orientation,
        row: usize,
        col: usize,
        size: usize,
    ) -> Result<Self, GameError> {
        if length == 0 {
            return Err(GameError::InvalidConfig("ship length must be positive"));
        }
        let end = match orientation {
            Orientation::Horizontal => col.checked_add(length - 1).map(|c| (row, c)),
            Orientation::Vertical => row.checked_add(length - 1).map(|r| (r, col)),
        };
        let Some((end_row, end_col)) = end else {
            return Err(GameError::InvalidCoordinate { row, col });
        };
        if end_row >= size || end_col >= size {
            return Err(GameError::InvalidCoordinate {
                row: end_row,
                col: end_col,
            });
        }
        Ok(Ship {
            length,
            orientation,
            row,
            col,
        })
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Anchor of the ship (row, col).
    pub fn origin(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    /// Cells covered by the ship, starting at the anchor.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> {
        let Ship {
            length,
            orientation,
            row,
            col,
        } = *self;
        (0..length).map(move |i| match orientation {
            Orientation::Horizontal => (row, col + i),
            Orientation::Vertical => (row + i, col),
        })
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.cells().any(|cell| cell == (row, col))
    }
}
