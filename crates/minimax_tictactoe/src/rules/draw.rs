//! Draw detection.

use super::win::check_winner;
use crate::Board;

/// Checks if every cell is occupied.
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

/// A full board where nobody owns a complete line.
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, Coord, Mark};

    #[test]
    fn test_empty_board_not_full() {
        let board = Board::new(3).unwrap();
        assert!(!is_full(&board));
        assert!(!is_draw(&board));
    }

    #[test]
    fn test_draw_on_four_by_four() {
        // X X O O
        // O O X X
        // X X O O
        // O O X X
        let h = Cell::Occupied(Mark::Human);
        let c = Cell::Occupied(Mark::Computer);
        let board = Board::from_cells(
            4,
            vec![h, h, c, c, c, c, h, h, h, h, c, c, c, c, h, h],
        )
        .unwrap();
        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        let mut board = Board::new(3).unwrap();
        for (index, mark) in [
            Mark::Human,
            Mark::Human,
            Mark::Human,
            Mark::Computer,
            Mark::Computer,
            Mark::Human,
            Mark::Computer,
            Mark::Human,
            Mark::Computer,
        ]
        .into_iter()
        .enumerate()
        {
            board.place(Coord::from_index(3, index), mark).unwrap();
        }
        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }
}
