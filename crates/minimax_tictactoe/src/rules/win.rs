//! Win detection by streak scanning over full-length lines.

use crate::{Board, Cell, Coord, Mark};
use serde::{Deserialize, Serialize};

/// A full-length line across the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Line {
    /// Row `r`, scanned left to right.
    Row(usize),
    /// Column `c`, scanned top to bottom.
    Column(usize),
    /// Top-left to bottom-right.
    MainDiagonal,
    /// Top-right to bottom-left.
    AntiDiagonal,
}

impl Line {
    /// Every line on a board of `side`, in evaluation order.
    pub fn all(side: usize) -> impl Iterator<Item = Line> {
        (0..side)
            .map(Line::Row)
            .chain((0..side).map(Line::Column))
            .chain([Line::MainDiagonal, Line::AntiDiagonal])
    }

    /// Coordinates of this line in scan order.
    pub fn coords(self, side: usize) -> impl Iterator<Item = Coord> {
        (0..side).map(move |i| match self {
            Line::Row(row) => Coord::new(row, i),
            Line::Column(col) => Coord::new(i, col),
            Line::MainDiagonal => Coord::new(i, i),
            Line::AntiDiagonal => Coord::new(i, side - 1 - i),
        })
    }
}

/// A completed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Win {
    /// Owner of the line.
    pub mark: Mark,
    /// The line that fired.
    pub line: Line,
}

/// Run of identical marks along one line.
///
/// A cell extends the run only when it holds a mark equal to the mark
/// that opened the run. Anything else, including an empty cell or a run
/// opened by an empty cell, restarts it at length one.
#[derive(Debug, Clone, Copy, Default)]
struct Streak {
    opened_by: Option<Cell>,
    length: usize,
}

impl Streak {
    /// Feeds the next cell and returns the current run length.
    fn push(&mut self, cell: Cell) -> usize {
        match (self.opened_by, cell) {
            (Some(Cell::Occupied(held)), Cell::Occupied(mark)) if held == mark => {
                self.length += 1;
            }
            _ => {
                self.opened_by = Some(cell);
                self.length = 1;
            }
        }
        self.length
    }
}

/// Returns the first complete line in evaluation order, if any.
pub fn check_winner(board: &Board) -> Option<Win> {
    let side = board.side();
    let cells = board.cells();

    Line::all(side).find_map(|line| {
        let mut streak = Streak::default();
        line.coords(side).find_map(|coord| {
            let cell = cells[coord.index(side)];
            match (streak.push(cell), cell) {
                (length, Cell::Occupied(mark)) if length == side => Some(Win { mark, line }),
                _ => None,
            }
        })
    })
}
