//! Typed board positions.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A position on the board (0-8, row-major).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Position {
    /// Top-left (index 0)
    TopLeft,
    /// Top-center (index 1)
    TopCenter,
    /// Top-right (index 2)
    TopRight,
    /// Middle-left (index 3)
    MiddleLeft,
    /// Center (index 4)
    Center,
    /// Middle-right (index 5)
    MiddleRight,
    /// Bottom-left (index 6)
    BottomLeft,
    /// Bottom-center (index 7)
    BottomCenter,
    /// Bottom-right (index 8)
    BottomRight,
}

impl Position {
    /// All 9 positions in index order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Position for a board index, `None` outside 0-8.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Parses a board index (0-8) or a label, ignoring case.
    ///
    /// Labels must match exactly after trimming, so "top" is rejected
    /// rather than guessed.
    #[instrument]
    pub fn parse(s: &str) -> Option<Position> {
        let s = s.trim();
        if let Ok(num) = s.parse::<usize>() {
            return Self::from_index(num);
        }

        <Position as strum::IntoEnumIterator>::iter()
            .find(|pos| pos.label().eq_ignore_ascii_case(s))
    }
}

impl From<Position> for usize {
    fn from(pos: Position) -> Self {
        pos.to_index()
    }
}

impl TryFrom<usize> for Position {
    type Error = usize;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::from_index(index).ok_or(index)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
