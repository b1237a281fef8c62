//! Move results and refusals.
//!
//! A refused move is an ordinary outcome, not a failure. [`MoveOutcome::Ignored`]
//! is what presentation code sees; [`MoveError`] carries the reason for callers
//! of the checked API.

use super::{GameStatus, Mark, Position};
use serde::{Deserialize, Serialize};

/// Result of applying a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// The move had no effect.
    Ignored,
    /// The move was placed; the given mark moves next.
    Continued(Mark),
    /// The move completed a line for this mark.
    Won(Mark),
    /// The move filled the board with no winner.
    Draw,
}

impl MoveOutcome {
    /// True if the move changed the game.
    pub fn is_accepted(self) -> bool {
        !matches!(self, MoveOutcome::Ignored)
    }

    /// True if the move ended the game.
    pub fn is_terminal(self) -> bool {
        matches!(self, MoveOutcome::Won(_) | MoveOutcome::Draw)
    }

    /// Outcome of an accepted move, given the status it produced and the next player.
    pub(crate) fn from_status(status: GameStatus, next: Mark) -> Self {
        match status {
            GameStatus::InProgress => MoveOutcome::Continued(next),
            GameStatus::Won(mark) => MoveOutcome::Won(mark),
            GameStatus::Draw => MoveOutcome::Draw,
        }
    }
}

/// Reason a move was refused.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The index is not a board cell.
    #[display("Cell index {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(usize),

    /// The cell at the position already holds a mark.
    #[display("{} is already occupied", _0)]
    CellOccupied(Position),

    /// The game has ended.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}
