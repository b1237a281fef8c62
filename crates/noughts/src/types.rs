//! Core domain types for tic-tac-toe.

use super::position::Position;
use serde::{Deserialize, Serialize};

/// A player's mark.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Mark {
    /// Mark X (moves first).
    #[display("X")]
    X,
    /// Mark O (moves second).
    #[display("O")]
    O,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// No mark placed.
    #[default]
    Empty,
    /// Cell holds a mark.
    Occupied(Mark),
}

impl Cell {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(mark) => Some(mark),
        }
    }
}

/// 3x3 board in row-major order (indices 0-8).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; 9],
}

impl Board {
    /// Number of cells on the board.
    pub const SIZE: usize = 9;

    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; Self::SIZE],
        }
    }

    /// Gets the cell at a raw index, `None` when out of range.
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Gets the cell at a position.
    pub fn at(&self, pos: Position) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Places a cell value. Only the engine writes to the board.
    pub(crate) fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.to_index()] = cell;
    }

    /// True when the position holds no mark.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.at(pos) == Cell::Empty
    }

    /// True when every cell holds a mark.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| *c != Cell::Empty)
    }

    /// All cells.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Number of cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .filter(|c| **c == Cell::Occupied(mark))
            .count()
    }

    /// Number of marks placed so far.
    pub fn marks_placed(&self) -> usize {
        self.cells.iter().filter(|c| **c != Cell::Empty).count()
    }

    /// Positions that can still be played.
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|pos| self.is_empty(*pos))
            .collect()
    }

    /// Formats the board as a plain-text grid. Empty cells show their 1-based number.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let index = row * 3 + col;
                let symbol = match self.cells[index] {
                    Cell::Empty => (index + 1).to_string(),
                    Cell::Occupied(mark) => mark.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves are accepted.
    #[default]
    InProgress,
    /// A mark completed a line.
    Won(Mark),
    /// The board filled with no winner.
    Draw,
}

impl GameStatus {
    /// True for `Won` and `Draw`.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// The winning mark, if any.
    pub fn winner(self) -> Option<Mark> {
        match self {
            GameStatus::Won(mark) => Some(mark),
            _ => None,
        }
    }
}
