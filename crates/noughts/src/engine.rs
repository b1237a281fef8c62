//! Game engine for tic-tac-toe.
//!
//! [`Engine`] owns the board, the player to move, and the game status. All
//! state changes go through [`Engine::apply_move`], [`Engine::try_move`] and
//! [`Engine::reset`]; readers get shared references or a [`GameSnapshot`].

use super::action::{MoveError, MoveOutcome};
use super::invariants::{EngineInvariants, InvariantSet};
use super::message_config::MessageConfig;
use super::rules::{self, WinningLine};
use super::types::{Board, Cell, GameStatus, Mark};
use super::Position;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Tic-tac-toe game engine.
#[derive(Debug, Clone)]
pub struct Engine {
    pub(crate) board: Board,
    pub(crate) current_player: Mark,
    pub(crate) status: GameStatus,
    pub(crate) winning_line: Option<WinningLine>,
    messages: MessageConfig,
}

/// Point-in-time copy of the engine state.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Board contents.
    pub board: Board,
    /// Mark to move (the last mover once the game is over).
    pub current_player: Mark,
    /// Game status.
    pub status: GameStatus,
    /// Completed line, when the game was won.
    pub winning_line: Option<WinningLine>,
}

impl Engine {
    /// Creates a new game with the default status texts.
    #[instrument]
    pub fn new() -> Self {
        Self::with_messages(MessageConfig::default())
    }

    /// Creates a new game using custom status texts.
    #[instrument(skip(messages))]
    pub fn with_messages(messages: MessageConfig) -> Self {
        Self {
            board: Board::new(),
            current_player: Mark::X,
            status: GameStatus::InProgress,
            winning_line: None,
            messages,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark to move.
    pub fn current_player(&self) -> Mark {
        self.current_player
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the completed line of a won game.
    pub fn winning_line(&self) -> Option<WinningLine> {
        self.winning_line
    }

    /// True once the game is won or drawn.
    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// Returns the status text templates.
    pub fn messages(&self) -> &MessageConfig {
        &self.messages
    }

    /// Copies the current state.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board.clone(),
            current_player: self.current_player,
            status: self.status,
            winning_line: self.winning_line,
        }
    }

    /// Places the current player's mark at `cell_index`.
    ///
    /// Anything that cannot be played (an index outside 0-8, including
    /// negative ones, an occupied cell, or a finished game) returns
    /// [`MoveOutcome::Ignored`] and leaves the state untouched.
    #[instrument(skip(self, cell_index), fields(player = %self.current_player))]
    pub fn apply_move<I>(&mut self, cell_index: I) -> MoveOutcome
    where
        I: TryInto<usize>,
    {
        let Ok(index) = cell_index.try_into() else {
            debug!("Ignoring move: index not representable as a cell");
            return MoveOutcome::Ignored;
        };

        self.try_move(index).unwrap_or_else(|error| {
            debug!(index, %error, "Ignoring move");
            MoveOutcome::Ignored
        })
    }

    /// Places the current player's mark at `index`, reporting why a move was refused.
    ///
    /// # Errors
    ///
    /// - [`MoveError::OutOfBounds`] if `index` is not 0-8
    /// - [`MoveError::GameOver`] if the game is won or drawn
    /// - [`MoveError::CellOccupied`] if the cell already holds a mark
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn try_move(&mut self, index: usize) -> Result<MoveOutcome, MoveError> {
        let pos = Position::from_index(index).ok_or(MoveError::OutOfBounds(index))?;
        self.play(pos)
    }

    /// Places the current player's mark at `pos`.
    ///
    /// # Errors
    ///
    /// See [`Engine::try_move`]; out-of-bounds cannot occur.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn play(&mut self, pos: Position) -> Result<MoveOutcome, MoveError> {
        if self.status.is_terminal() {
            return Err(MoveError::GameOver);
        }
        if !self.board.is_empty(pos) {
            return Err(MoveError::CellOccupied(pos));
        }

        let mover = self.current_player;
        self.board.set(pos, Cell::Occupied(mover));
        debug!(position = %pos, mark = %mover, "Mark placed");

        self.update_status();

        if self.status.is_terminal() {
            info!(status = ?self.status, line = ?self.winning_line, "Game over");
        } else {
            self.current_player = mover.opponent();
        }

        debug_assert!(
            EngineInvariants::check_all(self).is_ok(),
            "engine invariants violated after move at {}",
            pos
        );

        Ok(MoveOutcome::from_status(self.status, self.current_player))
    }

    /// Restores the initial state. Status texts are kept.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.current_player = Mark::X;
        self.status = GameStatus::InProgress;
        self.winning_line = None;
        info!("Game reset");
    }

    /// Text naming the mark to move, e.g. "It's X's turn".
    pub fn current_player_label(&self) -> String {
        self.messages.turn_text(self.current_player)
    }

    /// Text describing the status: turn, winner, or draw.
    pub fn status_label(&self) -> String {
        match self.status {
            GameStatus::InProgress => self.current_player_label(),
            GameStatus::Won(mark) => self.messages.won_text(mark),
            GameStatus::Draw => self.messages.draw_text(),
        }
    }

    fn update_status(&mut self) {
        if let Some((mark, line)) = rules::check_winner(&self.board) {
            self.status = GameStatus::Won(mark);
            self.winning_line = Some(line);
        } else if rules::is_full(&self.board) {
            self.status = GameStatus::Draw;
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
