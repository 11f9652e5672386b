//! Square grids of cell states.
//!
//! A [`Grid`] is a `size × size` matrix stored row-major in a single vector.
//! Two cell types give the two roles a grid can play: [`FleetCell`] for the
//! ground-truth board holding a side's ships, and [`ViewCell`] for what an
//! attacker has learned about the opponent's board. A view grid cannot hold a
//! ship marker by construction.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::common::GameError;

/// Cell of a fleet grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum FleetCell {
    #[default]
    Empty,
    Ship,
    Hit,
}

/// Cell of a view grid. `Empty` means the coordinate has not been shot yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ViewCell {
    #[default]
    Empty,
    Hit,
    Miss,
}

/// Display symbol of a cell state.
pub trait Symbol {
    fn symbol(self) -> char;
}

impl Symbol for FleetCell {
    fn symbol(self) -> char {
        match self {
            FleetCell::Empty => '.',
            FleetCell::Ship => 'A',
            FleetCell::Hit => 'X',
        }
    }
}

impl Symbol for ViewCell {
    fn symbol(self) -> char {
        match self {
            ViewCell::Empty => '.',
            ViewCell::Hit => 'X',
            ViewCell::Miss => 'o',
        }
    }
}

/// A `size × size` matrix of cells.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid<C> {
    size: usize,
    cells: Vec<C>,
}

/// Ground-truth board of one side.
pub type FleetGrid = Grid<FleetCell>;
/// An attacker's knowledge of the opponent's fleet grid.
pub type ViewGrid = Grid<ViewCell>;

impl<C: Copy + Default + PartialEq> Grid<C> {
    /// Create a grid with every cell at its default (empty) state.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![C::default(); size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// `true` when the cell storage holds exactly `size²` cells. Only a
    /// deserialized grid can fail this.
    pub fn is_well_formed(&self) -> bool {
        self.size.checked_mul(self.size) == Some(self.cells.len())
    }

    #[inline]
    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> Result<usize, GameError> {
        if !self.in_bounds(row, col) {
            return Err(GameError::InvalidCoordinate { row, col });
        }
        Ok(row * self.size + col)
    }

    /// Cell state at (`row`, `col`).
    pub fn get(&self, row: usize, col: usize) -> Result<C, GameError> {
        let idx = self.index(row, col)?;
        Ok(self.cells[idx])
    }

    /// Overwrite the cell at (`row`, `col`).
    pub fn set(&mut self, row: usize, col: usize, cell: C) -> Result<(), GameError> {
        let idx = self.index(row, col)?;
        self.cells[idx] = cell;
        Ok(())
    }

    /// Number of cells equal to `cell`.
    pub fn count(&self, cell: C) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// Iterate `(row, col, cell)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, C)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &c)| (i / size, i % size, c))
    }

    /// Coordinates of every cell equal to `cell`, row-major.
    pub fn positions(&self, cell: C) -> Vec<(usize, usize)> {
        self.iter()
            .filter(|&(_, _, c)| c == cell)
            .map(|(r, c, _)| (r, c))
            .collect()
    }

    /// Cells of one row.
    pub fn row(&self, row: usize) -> &[C] {
        &self.cells[row * self.size..(row + 1) * self.size]
    }
}

impl FleetGrid {
    /// Ship cells not yet hit.
    pub fn ships_remaining(&self) -> usize {
        self.count(FleetCell::Ship)
    }

    /// `true` once no cell holds an unhit ship.
    pub fn is_sunk(&self) -> bool {
        self.ships_remaining() == 0
    }
}

impl ViewGrid {
    /// Coordinates that have not been shot yet.
    pub fn unknown_cells(&self) -> Vec<(usize, usize)> {
        self.positions(ViewCell::Empty)
    }

    /// Number of coordinates already shot.
    pub fn shots(&self) -> usize {
        self.cells.len() - self.count(ViewCell::Empty)
    }
}

impl<C: Copy + Symbol> fmt::Debug for Grid<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid {{ size: {} }}", self.size)?;
        for row in self.cells.chunks(self.size.max(1)) {
            for &c in row {
                write!(f, "{}", c.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
