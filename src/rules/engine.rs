//! The surface search algorithms see.
//!
//! A state of a sequential game with chance nodes and imperfect
//! information:
//!
//! - `current_player`: who acts (chance, a seat, or nobody)
//! - `legal_actions` / `chance_outcomes`: what may happen next
//! - `apply_action`: deterministic transition
//! - `rewards`: zero-sum payoff once terminal
//! - `information_state_string`: what one seat has observed
//!
//! Search clones a state per branch, so implementations should clone cheaply.

use crate::core::{Action, ChanceOutcome, PlayerId, Turn};

/// A state in an extensive-form game.
pub trait ExtensiveFormState: Clone {
    type Error: std::error::Error;

    /// Number of seats at the table.
    fn num_players(&self) -> usize;

    /// Who acts next.
    fn current_player(&self) -> Turn;

    /// Legal actions for the acting seat, ascending. Empty when terminal.
    fn legal_actions(&self) -> Vec<Action>;

    /// Outcomes and probabilities at a chance node. Empty elsewhere.
    fn chance_outcomes(&self) -> Vec<ChanceOutcome>;

    /// Apply an action. On error the state is unchanged.
    fn apply_action(&mut self, action: Action) -> Result<(), Self::Error>;

    fn is_terminal(&self) -> bool;

    /// Payoff per seat, summing to zero. Only defined for terminal states.
    fn rewards(&self) -> Result<Vec<f64>, Self::Error>;

    /// Canonical description of what `player` has observed.
    fn information_state_string(&self, player: PlayerId) -> Result<String, Self::Error>;

    /// Actions applied so far.
    fn history(&self) -> Vec<Action>;

    // === Convenience Methods ===

    fn is_chance_node(&self) -> bool {
        self.current_player() == Turn::Chance
    }

    /// A copy of this state with `action` applied.
    fn child(&self, action: Action) -> Result<Self, Self::Error> {
        let mut child = self.clone();
        child.apply_action(action)?;
        Ok(child)
    }
}
