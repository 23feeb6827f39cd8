//! Errors returned by the engine.

use thiserror::Error;

use crate::core::{Action, PlayerId};
use crate::games::tarok::GamePhase;

/// Errors raised by game construction, queries and transitions.
///
/// A failed `apply_action` leaves the state untouched.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TarokError {
    #[error("action {action} is not legal in phase {phase}")]
    InvalidAction { action: Action, phase: GamePhase },

    #[error("{operation} is not available in phase {phase}")]
    PhaseViolation {
        operation: &'static str,
        phase: GamePhase,
    },

    #[error("invalid configuration: {0}")]
    Configuration(String),

    #[error("{0} is not seated at this table")]
    UnknownPlayer(PlayerId),

    #[error("no card has action id {0}")]
    UnknownCard(Action),

    #[error("no game registered under the name {0:?}")]
    UnknownGame(String),
}

pub type Result<T> = std::result::Result<T, TarokError>;
