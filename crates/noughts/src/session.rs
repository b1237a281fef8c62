//! Shared game sessions for concurrent hosts.
//!
//! Each [`SharedGame`] serializes access to one engine; moves on different
//! sessions never contend with each other.

use super::action::{MoveError, MoveOutcome};
use super::engine::{Engine, GameSnapshot};
use super::message_config::MessageConfig;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{debug, info, instrument, warn};

/// Unique identifier for a game session.
pub type SessionId = String;

/// Lock a mutex, recovering the data if a previous holder panicked.
///
/// The engine is valid between operations, so a poisoned lock still guards
/// consistent state.
fn lock_or_recover<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| {
        warn!("Recovering poisoned lock");
        poisoned.into_inner()
    })
}

/// A game engine that can be shared across threads.
///
/// Clones refer to the same game.
#[derive(Debug, Clone, Default)]
pub struct SharedGame {
    engine: Arc<Mutex<Engine>>,
}

impl SharedGame {
    /// Wraps an engine.
    pub fn new(engine: Engine) -> Self {
        Self {
            engine: Arc::new(Mutex::new(engine)),
        }
    }

    /// Applies a move while holding the game lock.
    #[instrument(skip(self, cell_index))]
    pub fn apply_move<I>(&self, cell_index: I) -> MoveOutcome
    where
        I: TryInto<usize>,
    {
        lock_or_recover(&self.engine).apply_move(cell_index)
    }

    /// Applies a checked move while holding the game lock.
    ///
    /// # Errors
    ///
    /// Same as [`Engine::try_move`].
    #[instrument(skip(self))]
    pub fn try_move(&self, index: usize) -> Result<MoveOutcome, MoveError> {
        lock_or_recover(&self.engine).try_move(index)
    }

    /// Resets the game.
    #[instrument(skip(self))]
    pub fn reset(&self) {
        lock_or_recover(&self.engine).reset();
    }

    /// Copies the current state.
    pub fn snapshot(&self) -> GameSnapshot {
        lock_or_recover(&self.engine).snapshot()
    }

    /// Current status text.
    pub fn status_label(&self) -> String {
        lock_or_recover(&self.engine).status_label()
    }

    /// Runs `f` with exclusive access to the engine.
    pub fn with<R>(&self, f: impl FnOnce(&mut Engine) -> R) -> R {
        let mut engine = lock_or_recover(&self.engine);
        f(&mut engine)
    }
}

/// Error from session management.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum SessionError {
    /// A session with this id already exists.
    #[display("Session {} already exists", _0)]
    AlreadyExists(SessionId),
}

impl std::error::Error for SessionError {}

/// Manages all game sessions.
#[derive(Debug, Clone, Default)]
pub struct SessionManager {
    sessions: Arc<Mutex<HashMap<SessionId, SharedGame>>>,
    messages: MessageConfig,
}

impl SessionManager {
    /// Creates a session manager whose games use default status texts.
    #[instrument]
    pub fn new() -> Self {
        Self::with_messages(MessageConfig::default())
    }

    /// Creates a session manager whose games use `messages`.
    #[instrument(skip(messages))]
    pub fn with_messages(messages: MessageConfig) -> Self {
        info!("Creating session manager");
        Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
            messages,
        }
    }

    /// Creates a new game session.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::AlreadyExists`] if `id` is taken.
    #[instrument(skip(self))]
    pub fn create_session(&self, id: &str) -> Result<SharedGame, SessionError> {
        let mut sessions = lock_or_recover(&self.sessions);

        if sessions.contains_key(id) {
            warn!("Session already exists");
            return Err(SessionError::AlreadyExists(id.to_string()));
        }

        let game = SharedGame::new(Engine::with_messages(self.messages.clone()));
        sessions.insert(id.to_string(), game.clone());

        info!("Created new session");
        Ok(game)
    }

    /// Gets a session by id.
    #[instrument(skip(self))]
    pub fn get(&self, id: &str) -> Option<SharedGame> {
        let game = lock_or_recover(&self.sessions).get(id).cloned();
        if game.is_none() {
            debug!("Session not found");
        }
        game
    }

    /// Removes a session, returning its game.
    #[instrument(skip(self))]
    pub fn remove(&self, id: &str) -> Option<SharedGame> {
        let removed = lock_or_recover(&self.sessions).remove(id);
        if removed.is_some() {
            info!("Removed session");
        }
        removed
    }

    /// Lists all session ids in sorted order.
    #[instrument(skip(self))]
    pub fn list_sessions(&self) -> Vec<SessionId> {
        let mut ids: Vec<_> = lock_or_recover(&self.sessions).keys().cloned().collect();
        ids.sort();
        debug!(count = ids.len(), "Listed sessions");
        ids
    }
}
