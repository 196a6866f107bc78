//! Game outcomes and the scores the search assigns to them.

use crate::Mark;
use serde::{Deserialize, Serialize};

/// Result of evaluating a board.
///
/// Recomputed from scratch after every move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No line is complete and empty cells remain.
    Undecided,
    /// The human owns a full line.
    HumanWins,
    /// The computer owns a full line.
    ComputerWins,
    /// Every cell is occupied and no line is complete.
    Draw,
}

impl Outcome {
    /// The winning outcome for `mark`.
    pub fn won_by(mark: Mark) -> Self {
        match mark {
            Mark::Human => Outcome::HumanWins,
            Mark::Computer => Outcome::ComputerWins,
        }
    }

    /// True for every outcome except [`Outcome::Undecided`].
    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::Undecided)
    }

    /// The winner, if any.
    pub fn winner(self) -> Option<Mark> {
        match self {
            Outcome::HumanWins => Some(Mark::Human),
            Outcome::ComputerWins => Some(Mark::Computer),
            Outcome::Undecided | Outcome::Draw => None,
        }
    }

    /// Search score of a terminal outcome; `None` while undecided.
    pub fn score(self) -> Option<Score> {
        match self {
            Outcome::Undecided => None,
            Outcome::HumanWins => Some(Score::HumanWins),
            Outcome::Draw => Some(Score::Draw),
            Outcome::ComputerWins => Some(Score::ComputerWins),
        }
    }
}

/// Minimax value of a position from the computer's point of view.
///
/// Variants are declared in ascending order so the derived `Ord`
/// matches the numeric values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Score {
    /// -1
    HumanWins = -1,
    /// 0
    Draw = 0,
    /// +1
    ComputerWins = 1,
}

impl Score {
    /// Numeric value in `{-1, 0, 1}`.
    pub fn value(self) -> i8 {
        self as i8
    }
}
