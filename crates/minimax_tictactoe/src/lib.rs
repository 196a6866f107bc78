//! Minimax tic-tac-toe engine
//!
//! A human-versus-computer grid game on an N x N board (N >= 3) where the
//! computer plays perfectly by exhaustive minimax search.
//!
//! # Architecture
//!
//! - **Board**: row-major grid with checked placement and scoped speculation
//! - **Rules**: streak-based line detection and outcome evaluation
//! - **Search**: unpruned minimax with first-best tie-breaking
//! - **Game**: the half-move cycle a presentation layer drives
//!
//! # Example
//!
//! ```
//! use minimax_tictactoe::{Coord, Game, GameConfig, Mark, Opening, Outcome};
//!
//! # fn example() -> Result<(), minimax_tictactoe::EngineError> {
//! let config = GameConfig::default()
//!     .with_first(Mark::Human)
//!     .with_opening(Opening::Search);
//! let mut game = Game::new(config)?;
//!
//! let report = game.play_turn(Coord::new(1, 1))?;
//! assert_eq!(report.outcome, Outcome::Undecided);
//! assert!(report.computer.is_some());
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod board;
mod config;
mod error;
mod game;
mod invariants;
mod outcome;
mod rules;
mod search;
mod types;

// Crate-level exports - Domain types
pub use types::{Cell, Coord, Mark, Move};

// Crate-level exports - Board model
pub use board::{Board, EmptyCells, MAX_SIDE, MIN_SIDE, Speculation};

// Crate-level exports - Outcome evaluation
pub use outcome::{Outcome, Score};
pub use rules::{Line, Win, check_winner, evaluate, is_draw, is_full};

// Crate-level exports - Search engine
pub use search::{Decision, Searcher, choose_move, minimax};

// Crate-level exports - Game session
pub use game::{ComputerMove, Game, TurnReport};

// Crate-level exports - Invariants
pub use invariants::{
    AlternatingTurns, GameInvariants, Invariant, InvariantSet, InvariantViolation, MonotonicBoard,
};

// Crate-level exports - Configuration and errors
pub use config::{ConfigError, GameConfig, Opening};
pub use error::{EngineError, IllegalMoveReason};
