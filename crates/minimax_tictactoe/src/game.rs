//! Human-versus-computer session built on the board, rules and search.
//!
//! A session runs the synchronous half-move cycle: apply a move,
//! re-evaluate the board from scratch, and hand the turn to the other
//! side until a terminal outcome is reached. Terminal sessions accept
//! no moves until [`Game::reset`].

use crate::rules::evaluate;
use crate::{
    Board, Coord, Decision, EngineError, GameConfig, Mark, Move, Opening, Outcome, Searcher,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

/// How the computer arrived at its move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComputerMove {
    /// Random cell on an empty board.
    Opening(Coord),
    /// Result of a full search.
    Searched(Decision),
}

impl ComputerMove {
    /// The cell that was played.
    pub fn coord(&self) -> Coord {
        match self {
            ComputerMove::Opening(coord) => *coord,
            ComputerMove::Searched(decision) => decision.coord,
        }
    }
}

/// Everything that happened during one [`Game::play_turn`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnReport {
    /// The human's move.
    pub human: Coord,
    /// The computer's reply, absent when the human's move ended the game.
    pub computer: Option<ComputerMove>,
    /// Outcome after the last applied move.
    pub outcome: Outcome,
}

/// A game session owning its board.
#[derive(Debug, Clone)]
pub struct Game {
    pub(crate) config: GameConfig,
    pub(crate) board: Board,
    pub(crate) outcome: Outcome,
    pub(crate) to_move: Mark,
    pub(crate) history: Vec<Move>,
    searcher: Searcher,
    rng: StdRng,
}

impl Game {
    /// Starts a session with an empty board.
    #[instrument(skip(config), fields(side = config.side(), first = %config.first()))]
    pub fn new(config: GameConfig) -> Result<Self, EngineError> {
        let board = Board::new(*config.side())?;
        let searcher = config
            .max_nodes()
            .map_or_else(Searcher::new, Searcher::with_max_nodes);
        let rng = match config.seed() {
            Some(seed) => StdRng::seed_from_u64(*seed),
            None => StdRng::from_os_rng(),
        };

        info!("Game started");
        Ok(Self {
            to_move: *config.first(),
            config,
            board,
            outcome: Outcome::Undecided,
            history: Vec::new(),
            searcher,
            rng,
        })
    }

    /// Session settings.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Outcome after the last move.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Side expected to move next.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Moves applied since the last reset, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Applies the human's move and returns the new outcome.
    #[instrument(skip(self), fields(%coord))]
    pub fn play_human(&mut self, coord: Coord) -> Result<Outcome, EngineError> {
        self.ensure_turn(Mark::Human)?;
        self.apply(Move::new(Mark::Human, coord))
    }

    /// Chooses and applies the computer's move.
    #[instrument(skip(self))]
    pub fn play_computer(&mut self) -> Result<ComputerMove, EngineError> {
        self.ensure_turn(Mark::Computer)?;

        let random_opening =
            self.board.occupied_count() == 0 && *self.config.opening() == Opening::Random;
        let choice = if random_opening {
            let empty: Vec<Coord> = self.board.empty_cells().collect();
            let coord = empty[self.rng.random_range(0..empty.len())];
            ComputerMove::Opening(coord)
        } else {
            ComputerMove::Searched(self.searcher.choose_move(&mut self.board)?)
        };

        self.apply(Move::new(Mark::Computer, choice.coord()))?;
        Ok(choice)
    }

    /// Human move followed, if the game is still open, by the computer's reply.
    #[instrument(skip(self), fields(%coord))]
    pub fn play_turn(&mut self, coord: Coord) -> Result<TurnReport, EngineError> {
        let outcome = self.play_human(coord)?;
        if outcome.is_terminal() {
            return Ok(TurnReport {
                human: coord,
                computer: None,
                outcome,
            });
        }

        let computer = self.play_computer()?;
        Ok(TurnReport {
            human: coord,
            computer: Some(computer),
            outcome: self.outcome,
        })
    }

    /// Discards the current board and starts over.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board = self.board.blank();
        self.outcome = Outcome::Undecided;
        self.to_move = *self.config.first();
        self.history.clear();
        info!("Game reset");
    }

    fn ensure_turn(&self, mark: Mark) -> Result<(), EngineError> {
        if self.outcome.is_terminal() {
            warn!(outcome = ?self.outcome, "Move offered after game over");
            return Err(EngineError::GameOver);
        }
        if self.to_move != mark {
            warn!(expected = %self.to_move, offered = %mark, "Move offered out of turn");
            return Err(EngineError::WrongTurn {
                expected: self.to_move,
            });
        }
        Ok(())
    }

    fn apply(&mut self, mv: Move) -> Result<Outcome, EngineError> {
        if let Err(e) = self.board.place(mv.coord, mv.mark) {
            warn!(error = %e, "Move rejected");
            return Err(e);
        }
        self.history.push(mv);
        self.to_move = mv.mark.opponent();
        self.outcome = evaluate(&self.board);

        #[cfg(debug_assertions)]
        self.assert_invariants();

        info!(%mv, outcome = ?self.outcome, "Move applied");
        Ok(self.outcome)
    }

    #[cfg(debug_assertions)]
    fn assert_invariants(&self) {
        use crate::{GameInvariants, InvariantSet};

        if let Err(violations) = GameInvariants::check_all(self) {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            panic!("Invariant violation: {}", descriptions);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn human_first() -> GameConfig {
        GameConfig::default()
            .with_first(Mark::Human)
            .with_opening(Opening::Search)
    }

    #[test]
    fn test_new_rejects_small_board() {
        let result = Game::new(GameConfig::default().with_side(2));
        assert!(matches!(result, Err(EngineError::InvalidSize { side: 2 })));
    }

    #[test]
    fn test_human_cannot_move_out_of_turn() {
        let mut game = Game::new(GameConfig::default().with_seed(1)).unwrap();
        assert_eq!(
            game.play_human(Coord::new(0, 0)),
            Err(EngineError::WrongTurn {
                expected: Mark::Computer,
            })
        );
        assert_eq!(game.board().occupied_count(), 0);
    }

    #[test]
    fn test_random_opening_is_seeded() {
        let mut a = Game::new(GameConfig::default().with_seed(42)).unwrap();
        let mut b = Game::new(GameConfig::default().with_seed(42)).unwrap();
        let first = a.play_computer().unwrap();
        assert!(matches!(first, ComputerMove::Opening(_)));
        assert_eq!(first, b.play_computer().unwrap());
        assert_eq!(a.to_move(), Mark::Human);
    }

    #[test]
    fn test_search_opening_plays_top_left() {
        let config = GameConfig::default().with_opening(Opening::Search);
        let mut game = Game::new(config).unwrap();
        let choice = game.play_computer().unwrap();
        assert_eq!(choice.coord(), Coord::new(0, 0));
    }

    #[test]
    fn test_occupied_cell_leaves_game_unchanged() {
        let mut game = Game::new(human_first()).unwrap();
        let report = game.play_turn(Coord::new(1, 1)).unwrap();
        let taken = report.computer.unwrap().coord();
        let board = game.board().clone();

        assert!(matches!(
            game.play_turn(taken),
            Err(EngineError::IllegalMove { .. })
        ));
        assert_eq!(game.board(), &board);
        assert_eq!(game.to_move(), Mark::Human);
        assert_eq!(game.history().len(), 2);
    }

    #[test]
    fn test_reset_restores_fresh_state() {
        let mut game = Game::new(human_first()).unwrap();
        game.play_turn(Coord::new(0, 0)).unwrap();
        game.reset();
        assert_eq!(game.board().occupied_count(), 0);
        assert_eq!(game.outcome(), Outcome::Undecided);
        assert_eq!(game.to_move(), Mark::Human);
        assert!(game.history().is_empty());
    }
}
