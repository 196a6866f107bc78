//! Session invariants checked after every move in debug builds.

use crate::{Board, Game};

/// A property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants checked together.
///
/// Implemented for pairs of invariants.
pub trait InvariantSet<S> {
    /// Returns every violated invariant, or `Ok(())` when all hold.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Cells are never overwritten.
///
/// Replaying the history onto an empty board must succeed move by move
/// and reproduce the current board exactly.
pub struct MonotonicBoard;

impl Invariant<Game> for MonotonicBoard {
    fn holds(game: &Game) -> bool {
        let Ok(mut reconstructed) = Board::new(game.board().side()) else {
            return false;
        };

        for mv in game.history() {
            if reconstructed.place(mv.coord, mv.mark).is_err() {
                return false;
            }
        }

        reconstructed == *game.board()
    }

    fn description() -> &'static str {
        "Board cells are monotonic (never overwritten)"
    }
}

/// Consecutive moves come from alternating sides.
pub struct AlternatingTurns;

impl Invariant<Game> for AlternatingTurns {
    fn holds(game: &Game) -> bool {
        game.history()
            .windows(2)
            .all(|pair| pair[0].mark != pair[1].mark)
    }

    fn description() -> &'static str {
        "Players alternate turns"
    }
}

/// Every session invariant.
pub type GameInvariants = (MonotonicBoard, AlternatingTurns);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Coord, GameConfig, Mark, Opening};

    fn game() -> Game {
        Game::new(
            GameConfig::default()
                .with_first(Mark::Human)
                .with_opening(Opening::Search),
        )
        .unwrap()
    }

    #[test]
    fn test_fresh_game_holds() {
        assert!(GameInvariants::check_all(&game()).is_ok());
    }

    #[test]
    fn test_holds_after_turns() {
        let mut game = game();
        game.play_turn(Coord::new(1, 1)).unwrap();
        // The computer answers the centre with the top-left corner.
        game.play_turn(Coord::new(2, 2)).unwrap();
        assert!(MonotonicBoard::holds(&game));
        assert!(AlternatingTurns::holds(&game));
    }

    #[test]
    fn test_detects_tampered_board() {
        let mut game = game();
        game.play_turn(Coord::new(1, 1)).unwrap();
        game.board.clear(Coord::new(1, 1)).unwrap();

        let violations = GameInvariants::check_all(&game).unwrap_err();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].description, MonotonicBoard::description());
    }

    #[test]
    fn test_detects_repeated_side() {
        let mut game = game();
        game.play_turn(Coord::new(1, 1)).unwrap();
        let last = *game.history().last().unwrap();
        game.history.push(crate::Move::new(last.mark, Coord::new(2, 2)));

        assert!(!AlternatingTurns::holds(&game));
    }
}
