//! Exhaustive minimax move selection.
//!
//! The computer maximizes and the human minimizes. Every empty cell is
//! tried at every level; there is no pruning, move ordering or caching,
//! so the chosen move depends only on the board and the row-major scan
//! order. Among equally scored candidates the first one found wins.
//!
//! Speculative placements go through [`Board::speculate`], so the board
//! is restored on every exit path, including an aborted search.

use crate::rules::evaluate;
use crate::{Board, Coord, EngineError, Mark, Score};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// A chosen move with its minimax value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    /// Cell the computer plays.
    pub coord: Coord,
    /// Guaranteed value of the move under optimal replies.
    pub score: Score,
    /// Positions visited while deciding.
    pub nodes: u64,
}

/// Minimax searcher with an optional node cap.
///
/// The cap is a safety valve for large boards. When it is not reached
/// the result is identical to an uncapped search.
#[derive(Debug, Clone, Default)]
pub struct Searcher {
    max_nodes: Option<u64>,
    nodes: u64,
}

impl Searcher {
    /// Creates an uncapped searcher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a searcher that gives up after `limit` positions.
    pub fn with_max_nodes(limit: u64) -> Self {
        Self {
            max_nodes: Some(limit),
            nodes: 0,
        }
    }

    /// The configured node cap, if any.
    pub fn max_nodes(&self) -> Option<u64> {
        self.max_nodes
    }

    /// Picks the computer's move.
    ///
    /// Candidates are tried in row-major order and a later candidate only
    /// replaces the current best when its score is strictly greater.
    #[instrument(skip_all, fields(side = board.side(), empty = board.cells().len() - board.occupied_count()))]
    pub fn choose_move(&mut self, board: &mut Board) -> Result<Decision, EngineError> {
        self.nodes = 0;
        let candidates: Vec<Coord> = board.empty_cells().collect();
        if candidates.is_empty() {
            warn!("Search requested on a full board");
            return Err(EngineError::NoLegalMove);
        }

        let mut best: Option<(Coord, Score)> = None;
        for coord in candidates {
            let score = {
                let mut speculation = board.speculate(coord, Mark::Computer)?;
                self.minimax(&mut speculation, false)?
            };
            debug!(%coord, ?score, "Scored candidate");
            if best.is_none_or(|(_, best_score)| score > best_score) {
                best = Some((coord, score));
            }
        }

        let (coord, score) = best.ok_or(EngineError::NoLegalMove)?;
        info!(%coord, ?score, nodes = self.nodes, "Computer move chosen");
        Ok(Decision {
            coord,
            score,
            nodes: self.nodes,
        })
    }

    /// Minimax value of `board` with the given side to move.
    ///
    /// `maximizing` means the computer moves next. Terminal boards score
    /// immediately.
    pub fn minimax(&mut self, board: &mut Board, maximizing: bool) -> Result<Score, EngineError> {
        self.visit()?;
        if let Some(score) = evaluate(board).score() {
            return Ok(score);
        }

        let mark = if maximizing { Mark::Computer } else { Mark::Human };
        let candidates: Vec<Coord> = board.empty_cells().collect();
        let mut best: Option<Score> = None;
        for coord in candidates {
            let score = {
                let mut speculation = board.speculate(coord, mark)?;
                self.minimax(&mut speculation, !maximizing)?
            };
            best = Some(match best {
                None => score,
                Some(current) if maximizing => current.max(score),
                Some(current) => current.min(score),
            });
        }

        // An undecided board always has an empty cell.
        best.ok_or(EngineError::NoLegalMove)
    }

    fn visit(&mut self) -> Result<(), EngineError> {
        self.nodes += 1;
        if let Some(limit) = self.max_nodes
            && self.nodes > limit
        {
            warn!(limit, "Search node budget exhausted");
            return Err(EngineError::SearchBudgetExhausted { limit });
        }
        Ok(())
    }
}

/// Picks the computer's move with an uncapped search.
pub fn choose_move(board: &mut Board) -> Result<Coord, EngineError> {
    Searcher::new().choose_move(board).map(|decision| decision.coord)
}

/// Uncapped minimax value of `board`.
pub fn minimax(board: &mut Board, maximizing: bool) -> Result<Score, EngineError> {
    Searcher::new().minimax(board, maximizing)
}
