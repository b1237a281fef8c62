//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. The engine calls into these after every
//! accepted move; they never mutate anything.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{WinningLine, check_winner};

use super::{Board, GameStatus};
use tracing::instrument;

/// Evaluates the terminal condition of a board.
///
/// A completed line takes precedence over a full board.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> GameStatus {
    if let Some((mark, _)) = check_winner(board) {
        GameStatus::Won(mark)
    } else if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}
