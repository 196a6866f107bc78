//! Error types for board, search and session operations.

use crate::{Coord, Mark};
use derive_more::Display;

/// Why a placement was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum IllegalMoveReason {
    /// The target cell already holds a mark.
    #[display("cell is already occupied")]
    Occupied,
    /// The coordinates fall outside the board.
    #[display("coordinates are off the board")]
    OutOfRange,
}

/// Errors raised by the engine.
///
/// Every variant leaves the board exactly as it was before the failing call.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum EngineError {
    /// Board side length outside `MIN_SIDE..=MAX_SIDE`.
    #[display("Invalid board size {side}: side length must be at least 3 and at most 64")]
    InvalidSize {
        /// Requested side length.
        side: usize,
    },

    /// Placement on an occupied or off-board cell.
    #[display("Illegal move at {coord}: {reason}")]
    IllegalMove {
        /// Rejected coordinates.
        coord: Coord,
        /// Why the move was rejected.
        reason: IllegalMoveReason,
    },

    /// Search requested on a board with no empty cells.
    #[display("No legal move: the board is full")]
    NoLegalMove,

    /// A move was offered after the game ended.
    #[display("Game is already over")]
    GameOver,

    /// A half-move was requested for the side that is not to move.
    #[display("It's {expected}'s turn")]
    WrongTurn {
        /// The side that is to move.
        expected: Mark,
    },

    /// The search visited more nodes than its configured cap.
    #[display("Search aborted after {limit} nodes")]
    SearchBudgetExhausted {
        /// Node cap that was hit.
        limit: u64,
    },
}

impl std::error::Error for EngineError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_illegal_move_display() {
        let err = EngineError::IllegalMove {
            coord: Coord::new(1, 2),
            reason: IllegalMoveReason::Occupied,
        };
        assert_eq!(err.to_string(), "Illegal move at (1, 2): cell is already occupied");
    }

    #[test]
    fn test_invalid_size_display() {
        let err = EngineError::InvalidSize { side: 2 };
        assert!(err.to_string().contains("at least 3"));
    }

    #[test]
    fn test_wrong_turn_display() {
        let err = EngineError::WrongTurn { expected: Mark::Computer };
        assert_eq!(err.to_string(), "It's computer's turn");
    }
}
