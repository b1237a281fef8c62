//! First-class invariants for the engine.
//!
//! Invariants are properties that hold between any two engine operations.
//! The engine checks them after every accepted move in debug builds; each can
//! also be tested on its own.

use super::engine::Engine;
use super::rules;
use super::types::{GameStatus, Mark};
use tracing::warn;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn gather_violations(results: &[(bool, &'static str)]) -> Result<(), Vec<InvariantViolation>> {
    let violations: Vec<_> = results
        .iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| {
            warn!(invariant = *description, "Invariant violated");
            InvariantViolation::new(*description)
        })
        .collect();

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        gather_violations(&[
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
        ])
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        gather_violations(&[
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
            (I3::holds(state), I3::description()),
        ])
    }
}

/// X has placed as many marks as O, or exactly one more.
pub struct MarkBalanceInvariant;

impl Invariant<Engine> for MarkBalanceInvariant {
    fn holds(engine: &Engine) -> bool {
        let x = engine.board().count(Mark::X);
        let o = engine.board().count(Mark::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X count equals O count or exceeds it by one"
    }
}

/// While in progress, X is to move exactly when the mark counts are equal.
pub struct TurnParityInvariant;

impl Invariant<Engine> for TurnParityInvariant {
    fn holds(engine: &Engine) -> bool {
        if engine.status().is_terminal() {
            return true;
        }
        let expected = if engine.board().count(Mark::X) == engine.board().count(Mark::O) {
            Mark::X
        } else {
            Mark::O
        };
        engine.current_player() == expected
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

/// Stored status agrees with the rules applied to the board.
pub struct TerminalConsistencyInvariant;

impl Invariant<Engine> for TerminalConsistencyInvariant {
    fn holds(engine: &Engine) -> bool {
        let line_matches = match (engine.status(), engine.winning_line()) {
            (GameStatus::Won(mark), Some(line)) => line.owner(engine.board()) == Some(mark),
            (GameStatus::Won(_), None) => false,
            (_, line) => line.is_none(),
        };
        line_matches && engine.status() == rules::evaluate(engine.board())
    }

    fn description() -> &'static str {
        "Status matches the board"
    }
}

/// All engine invariants as a composable set.
pub type EngineInvariants = (
    MarkBalanceInvariant,
    TurnParityInvariant,
    TerminalConsistencyInvariant,
);
