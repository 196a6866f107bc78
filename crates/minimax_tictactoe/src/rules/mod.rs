//! Game rules: line detection and board evaluation.
//!
//! Rules are pure functions over a borrowed [`Board`]; they never mutate
//! and never cache, so an evaluation always reflects the current cells.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{Line, Win, check_winner};

use crate::{Board, Outcome};

/// Evaluates the board.
///
/// Lines are scanned rows first, then columns, then the main diagonal,
/// then the anti-diagonal; the first complete line decides the winner.
/// A full board with no complete line is a draw.
pub fn evaluate(board: &Board) -> Outcome {
    if let Some(win) = check_winner(board) {
        return Outcome::won_by(win.mark);
    }
    if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::Undecided
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, Mark};

    const E: Cell = Cell::Empty;
    const H: Cell = Cell::Occupied(Mark::Human);
    const C: Cell = Cell::Occupied(Mark::Computer);

    #[test]
    fn test_empty_board_is_undecided() {
        let board = Board::new(3).unwrap();
        assert_eq!(evaluate(&board), Outcome::Undecided);
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let board = Board::from_cells(3, vec![H, C, H, H, C, C, C, H, H]).unwrap();
        assert_eq!(evaluate(&board), Outcome::Draw);
    }

    #[test]
    fn test_full_board_with_line_is_a_win() {
        let board = Board::from_cells(3, vec![C, C, C, H, H, C, H, C, H]).unwrap();
        assert_eq!(evaluate(&board), Outcome::ComputerWins);
    }

    #[test]
    fn test_partial_board_is_undecided() {
        let board = Board::from_cells(3, vec![H, C, E, E, H, E, E, E, C]).unwrap();
        assert_eq!(evaluate(&board), Outcome::Undecided);
    }
}
