//! Square grid of cells with checked placement and scoped speculation.

use crate::{Cell, Coord, EngineError, IllegalMoveReason, Mark};
use serde::Serialize;
use std::iter::Enumerate;
use std::ops::{Deref, DerefMut};
use std::slice::Iter;
use tracing::{instrument, warn};

/// Smallest supported side length.
pub const MIN_SIDE: usize = 3;

/// Largest supported side length.
pub const MAX_SIDE: usize = 64;

/// N x N board stored row-major (`index = row * N + col`).
///
/// The occupied-cell count only grows through [`Board::place`]; the one
/// way back is [`Board::clear`], which the search uses to undo its own
/// speculative placements.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Board {
    side: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates an empty board with the given side length.
    #[instrument]
    pub fn new(side: usize) -> Result<Self, EngineError> {
        let count = cell_count(side)?;
        Ok(Self {
            side,
            cells: vec![Cell::Empty; count],
        })
    }

    /// Builds a board from row-major cells.
    ///
    /// Fails with [`EngineError::InvalidSize`] unless `cells.len() == side * side`.
    #[instrument(skip(cells), fields(len = cells.len()))]
    pub fn from_cells(side: usize, cells: Vec<Cell>) -> Result<Self, EngineError> {
        let count = cell_count(side)?;
        if cells.len() != count {
            warn!(side, len = cells.len(), "Cell count does not match side length");
            return Err(EngineError::InvalidSize { side });
        }
        Ok(Self { side, cells })
    }

    /// A fresh empty board with the same side length.
    pub fn blank(&self) -> Self {
        Self {
            side: self.side,
            cells: vec![Cell::Empty; self.cells.len()],
        }
    }

    /// Side length N.
    pub fn side(&self) -> usize {
        self.side
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// The cell at `coord`, or `None` if it is off the board.
    pub fn get(&self, coord: Coord) -> Option<Cell> {
        self.index_of(coord).map(|index| self.cells[index])
    }

    /// Puts `mark` on an empty cell.
    ///
    /// The board is left untouched when the move is rejected.
    pub fn place(&mut self, coord: Coord, mark: Mark) -> Result<(), EngineError> {
        let index = self.checked_index(coord)?;
        if !self.cells[index].is_empty() {
            return Err(EngineError::IllegalMove {
                coord,
                reason: IllegalMoveReason::Occupied,
            });
        }
        self.cells[index] = Cell::Occupied(mark);
        Ok(())
    }

    /// Resets a cell to empty.
    pub fn clear(&mut self, coord: Coord) -> Result<(), EngineError> {
        let index = self.checked_index(coord)?;
        self.cells[index] = Cell::Empty;
        Ok(())
    }

    /// Places `mark` and hands back a guard that clears the cell on drop.
    ///
    /// While the guard lives it stands in for the board, so recursive
    /// searches can keep speculating on top of it.
    pub fn speculate(&mut self, coord: Coord, mark: Mark) -> Result<Speculation<'_>, EngineError> {
        self.place(coord, mark)?;
        let index = coord.index(self.side);
        Ok(Speculation { board: self, index })
    }

    /// Empty cells in row-major order.
    ///
    /// Call again to restart from the top-left cell.
    pub fn empty_cells(&self) -> EmptyCells<'_> {
        EmptyCells {
            side: self.side,
            cells: self.cells.iter().enumerate(),
        }
    }

    /// True when no empty cell remains.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    fn index_of(&self, coord: Coord) -> Option<usize> {
        (coord.row < self.side && coord.col < self.side).then(|| coord.index(self.side))
    }

    fn checked_index(&self, coord: Coord) -> Result<usize, EngineError> {
        self.index_of(coord).ok_or(EngineError::IllegalMove {
            coord,
            reason: IllegalMoveReason::OutOfRange,
        })
    }
}

fn cell_count(side: usize) -> Result<usize, EngineError> {
    if !(MIN_SIDE..=MAX_SIDE).contains(&side) {
        warn!(side, "Rejected board size");
        return Err(EngineError::InvalidSize { side });
    }
    Ok(side * side)
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, line) in self.cells.chunks(self.side).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for (col, cell) in line.iter().enumerate() {
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", cell.symbol())?;
            }
        }
        Ok(())
    }
}

/// Iterator over the empty cells of a board, top-left to bottom-right.
#[derive(Debug, Clone)]
pub struct EmptyCells<'a> {
    side: usize,
    cells: Enumerate<Iter<'a, Cell>>,
}

impl Iterator for EmptyCells<'_> {
    type Item = Coord;

    fn next(&mut self) -> Option<Coord> {
        let side = self.side;
        self.cells
            .find(|(_, cell)| cell.is_empty())
            .map(|(index, _)| Coord::from_index(side, index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.cells.size_hint().1)
    }
}

/// A speculative placement that is undone when dropped.
///
/// Dereferences to the underlying [`Board`].
#[derive(Debug)]
pub struct Speculation<'a> {
    board: &'a mut Board,
    index: usize,
}

impl Deref for Speculation<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for Speculation<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for Speculation<'_> {
    fn drop(&mut self) {
        self.board.cells[self.index] = Cell::Empty;
    }
}
