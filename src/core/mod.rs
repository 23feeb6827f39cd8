//! Core engine types: seats, actions, RNG, configuration.
//!
//! These building blocks know nothing about Tarok's rules; the game layer
//! in `games::tarok` gives actions and phases their meaning.

pub mod player;
pub mod rng;
pub mod config;
pub mod action;

pub use player::{PlayerId, PlayerMap, Turn};
pub use rng::GameRng;
pub use config::{parse_game_string, GameConfig, GameParams, ParamValue, MAX_PLAYERS, MIN_PLAYERS};
pub use action::{Action, ActionRecord, ChanceOutcome};
