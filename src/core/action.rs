//! Action identifiers and history records.
//!
//! Every decision in the game is a small integer. Its meaning depends on
//! the phase the state is in:
//!
//! - Dealing: `0` is the single chance outcome that commits the deal
//! - Bidding: `0` is pass, `1..=12` select a contract
//! - Talon exchange: first the index of a talon set, then card ids to discard
//! - King calling and trick play: card ids `0..54`
//!
//! The game layer assigns these meanings; this module only stores them.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// Opaque action identifier, interpreted by the current phase.
pub type Action = u8;

/// A chance outcome paired with its probability.
pub type ChanceOutcome = (Action, f64);

/// A recorded action with the seat that took it.
///
/// Chance actions carry no seat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The seat that took this action, `None` for chance.
    pub player: Option<PlayerId>,

    /// The action taken.
    pub action: Action,
}

impl ActionRecord {
    /// Record a seat's decision.
    #[must_use]
    pub fn player(player: PlayerId, action: Action) -> Self {
        Self {
            player: Some(player),
            action,
        }
    }

    /// Record a chance outcome.
    #[must_use]
    pub fn chance(action: Action) -> Self {
        Self {
            player: None,
            action,
        }
    }

    /// Whether this record is a chance outcome.
    #[must_use]
    pub fn is_chance(&self) -> bool {
        self.player.is_none()
    }
}
