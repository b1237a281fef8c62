//! Noughts - a tic-tac-toe game engine
//!
//! The engine owns the board, the mark to move, and the game status. A
//! presentation layer forwards cell selections and restart requests, then
//! renders whatever the engine reports back.
//!
//! # Architecture
//!
//! - **Engine**: state transitions (`apply_move`, `try_move`, `reset`) and status text
//! - **Rules**: pure win/draw evaluation over a board
//! - **Invariants**: consistency checks run after every accepted move in debug builds
//! - **Session**: lock-guarded engines for concurrent hosts
//!
//! # Example
//!
//! ```
//! use noughts::{Engine, Mark, MoveOutcome};
//!
//! let mut engine = Engine::new();
//! assert_eq!(engine.apply_move(4), MoveOutcome::Continued(Mark::O));
//! assert_eq!(engine.apply_move(4), MoveOutcome::Ignored);
//! assert_eq!(engine.status_label(), "It's O's turn");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod engine;
mod message_config;
mod position;
mod types;

pub mod invariants;
pub mod rules;
pub mod session;

pub use action::{MoveError, MoveOutcome};
pub use engine::{Engine, GameSnapshot};
pub use message_config::{ConfigError, MessageConfig, PLAYER_PLACEHOLDER};
pub use position::Position;
pub use rules::WinningLine;
pub use session::{SessionError, SessionId, SessionManager, SharedGame};
pub use types::{Board, Cell, GameStatus, Mark};
