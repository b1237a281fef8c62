//! Win detection logic for tic-tac-toe.

use super::super::{Board, Mark, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One of the eight lines that wins the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WinningLine {
    /// Indices 0, 1, 2.
    TopRow,
    /// Indices 3, 4, 5.
    MiddleRow,
    /// Indices 6, 7, 8.
    BottomRow,
    /// Indices 0, 3, 6.
    LeftColumn,
    /// Indices 1, 4, 7.
    CenterColumn,
    /// Indices 2, 5, 8.
    RightColumn,
    /// Indices 0, 4, 8.
    MainDiagonal,
    /// Indices 2, 4, 6.
    AntiDiagonal,
}

impl WinningLine {
    /// All lines in evaluation order: rows, columns, then diagonals.
    pub const ALL: [WinningLine; 8] = [
        WinningLine::TopRow,
        WinningLine::MiddleRow,
        WinningLine::BottomRow,
        WinningLine::LeftColumn,
        WinningLine::CenterColumn,
        WinningLine::RightColumn,
        WinningLine::MainDiagonal,
        WinningLine::AntiDiagonal,
    ];

    /// The three positions on this line.
    pub fn positions(self) -> [Position; 3] {
        use Position::*;
        match self {
            WinningLine::TopRow => [TopLeft, TopCenter, TopRight],
            WinningLine::MiddleRow => [MiddleLeft, Center, MiddleRight],
            WinningLine::BottomRow => [BottomLeft, BottomCenter, BottomRight],
            WinningLine::LeftColumn => [TopLeft, MiddleLeft, BottomLeft],
            WinningLine::CenterColumn => [TopCenter, Center, BottomCenter],
            WinningLine::RightColumn => [TopRight, MiddleRight, BottomRight],
            WinningLine::MainDiagonal => [TopLeft, Center, BottomRight],
            WinningLine::AntiDiagonal => [TopRight, Center, BottomLeft],
        }
    }

    /// The three board indices on this line.
    pub fn indices(self) -> [usize; 3] {
        self.positions().map(Position::to_index)
    }

    /// True when `pos` lies on this line.
    pub fn contains(self, pos: Position) -> bool {
        self.positions().contains(&pos)
    }

    /// The mark owning all three cells, if any.
    pub fn owner(self, board: &Board) -> Option<Mark> {
        let [a, b, c] = self.positions();
        let mark = board.at(a).mark()?;
        (board.at(b).mark() == Some(mark) && board.at(c).mark() == Some(mark)).then_some(mark)
    }
}

/// Checks if there is a winner on the board.
///
/// Returns the mark and the first completed line in [`WinningLine::ALL`] order.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<(Mark, WinningLine)> {
    WinningLine::ALL
        .iter()
        .find_map(|line| line.owner(board).map(|mark| (mark, *line)))
}
