//! # open-tarok
//!
//! Slovenian Tarok as an extensive-form game, for search and RL.
//!
//! ## Design Principles
//!
//! 1. **One chance node**: the deal is the only random event. Every later
//!    transition is deterministic, so a round is reproducible from its deal
//!    seed and action history.
//!
//! 2. **Values, not handles**: a state is a plain value. Cloning is cheap
//!    (persistent history via `im-rs`), so search clones one per branch.
//!
//! 3. **Legal or nothing**: `apply_action` rejects illegal actions and
//!    leaves the state untouched.
//!
//! ## Modules
//!
//! - `core`: seats, actions, RNG, configuration
//! - `games`: the Tarok rules and a by-name registry
//! - `rules`: the `ExtensiveFormState` trait search code talks to
//! - `simulation`: random playouts

pub mod core;
pub mod error;
pub mod games;
pub mod rules;
pub mod simulation;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord, ChanceOutcome,
    GameConfig, GameParams, ParamValue,
    GameRng,
    PlayerId, PlayerMap, Turn,
};

pub use crate::error::TarokError;

pub use crate::games::{load_game, registered_names, GameType, Registry};

pub use crate::games::tarok::{
    Card, CompletedTrick, Contract, Deal, GamePhase, Suit, TarokGame, TarokState,
};

pub use crate::rules::ExtensiveFormState;

pub use crate::simulation::{PlayoutOutcome, PlayoutPolicy, RandomPlayout, UniformRandom};
