//! King calling and the talon exchange.
//!
//! With four players and a contract of Three, Two or One, the declarer
//! first calls a king; whoever holds it is the declarer's hidden partner.
//! Then the declarer picks one of the `6 / k` talon sets of `k` cards and
//! discards `k` cards. Colour cards go face down, taroks face up.

use super::cards::{is_king, is_trula, KINGS};
use crate::core::Action;

/// Progress through the exchange.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TalonStep {
    /// The declarer is choosing a talon set.
    ChooseSet,
    /// The declarer still has to discard `remaining` cards.
    Discard { remaining: usize },
}

/// Kings that can be called.
#[must_use]
pub fn legal_king_calls() -> Vec<Action> {
    KINGS.to_vec()
}

/// Split the talon into sets of `exchanges` cards, left to right.
#[must_use]
pub fn talon_sets(talon: &[Action], exchanges: usize) -> Vec<Vec<Action>> {
    talon.chunks(exchanges.max(1)).map(<[Action]>::to_vec).collect()
}

/// Set indices the declarer may choose from.
#[must_use]
pub fn legal_set_choices(talon: &[Action], exchanges: usize) -> Vec<Action> {
    (0..talon.len() / exchanges.max(1)).map(|i| i as Action).collect()
}

/// Cards the declarer may discard: anything but kings and the trula.
#[must_use]
pub fn legal_discards(hand: &[Action]) -> Vec<Action> {
    let allowed: Vec<Action> = hand
        .iter()
        .copied()
        .filter(|&c| !is_king(c) && !is_trula(c))
        .collect();
    if allowed.is_empty() {
        // Only reachable with a hand of kings and trula cards.
        return hand.to_vec();
    }
    allowed
}
