//! Core domain types: marks, cells, coordinates and moves.

use derive_more::Display;
use serde::{Deserialize, Serialize};
use strum::EnumIter;

/// One of the two sides in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
    strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Mark {
    /// The person at the keyboard (drawn as a cross).
    Human,
    /// The engine (drawn as a circle).
    Computer,
}

impl Mark {
    /// Returns the other side.
    pub fn opponent(self) -> Self {
        match self {
            Mark::Human => Mark::Computer,
            Mark::Computer => Mark::Human,
        }
    }

    /// Single-character symbol used in plain-text rendering.
    pub fn symbol(self) -> char {
        match self {
            Mark::Human => 'X',
            Mark::Computer => 'O',
        }
    }
}

/// State of a single board cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Holds a mark.
    Occupied(Mark),
}

impl Cell {
    /// True for [`Cell::Empty`].
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// The mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(mark) => Some(mark),
        }
    }

    /// Single-character symbol used in plain-text rendering.
    pub fn symbol(self) -> char {
        self.mark().map_or('.', Mark::symbol)
    }
}

/// A `(row, column)` pair addressing one cell.
///
/// Coordinates are not tied to a board; range checks happen when a
/// coordinate is applied.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display,
)]
#[display("({row}, {col})")]
pub struct Coord {
    /// Zero-based row, top to bottom.
    pub row: usize,
    /// Zero-based column, left to right.
    pub col: usize,
}

impl Coord {
    /// Creates a coordinate.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Converts a row-major index on a board of `side` into coordinates.
    pub fn from_index(side: usize, index: usize) -> Self {
        Self {
            row: index / side,
            col: index % side,
        }
    }

    /// Row-major index of this coordinate on a board of `side`.
    pub fn index(self, side: usize) -> usize {
        self.row * side + self.col
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

/// A mark placed at a coordinate, as recorded in game history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[display("{mark} -> {coord}")]
pub struct Move {
    /// Side that moved.
    pub mark: Mark,
    /// Where the mark went.
    pub coord: Coord,
}

impl Move {
    /// Creates a move.
    pub fn new(mark: Mark, coord: Coord) -> Self {
        Self { mark, coord }
    }
}
