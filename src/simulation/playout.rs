//! Playout policies and the playout driver.

use tracing::trace;

use crate::core::{Action, GameRng, Turn};
use crate::rules::ExtensiveFormState;

// =============================================================================
// Playout Policy
// =============================================================================

/// Policy choosing a seat's action during a playout.
pub trait PlayoutPolicy<S: ExtensiveFormState>: Send + Sync {
    /// Choose one of `legal`. Returns `None` if `legal` is empty.
    fn choose_action(&self, state: &S, legal: &[Action], rng: &mut GameRng) -> Option<Action>;
}

/// Uniform random policy.
///
/// Selects uniformly from legal actions.
#[derive(Clone, Debug, Default)]
pub struct UniformRandom;

impl<S: ExtensiveFormState> PlayoutPolicy<S> for UniformRandom {
    fn choose_action(&self, _state: &S, legal: &[Action], rng: &mut GameRng) -> Option<Action> {
        rng.choose(legal).copied()
    }
}

// =============================================================================
// Playout
// =============================================================================

/// How a playout ended.
#[derive(Clone, Debug, PartialEq)]
pub struct PlayoutOutcome {
    /// Rewards per seat; zeros if the depth limit cut the playout short.
    pub rewards: Vec<f64>,
    /// Actions applied during the playout.
    pub depth: u32,
    pub reached_terminal: bool,
}

/// Plays a state forward with a policy until it is terminal.
///
/// Chance nodes are sampled by their outcome probabilities.
#[derive(Clone, Debug)]
pub struct RandomPlayout<P = UniformRandom> {
    policy: P,
    /// Maximum actions per playout. 0 = unlimited.
    max_depth: u32,
}

impl Default for RandomPlayout<UniformRandom> {
    fn default() -> Self {
        Self {
            policy: UniformRandom,
            max_depth: 0,
        }
    }
}

impl<P> RandomPlayout<P> {
    /// Playout driven by a custom policy.
    pub fn with_policy(policy: P) -> Self {
        Self {
            policy,
            max_depth: 0,
        }
    }

    /// Stop after `max_depth` actions.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Play `state` forward in place.
    pub fn run<S>(&self, state: &mut S, rng: &mut GameRng) -> Result<PlayoutOutcome, S::Error>
    where
        S: ExtensiveFormState,
        P: PlayoutPolicy<S>,
    {
        let mut depth = 0;

        loop {
            if state.is_terminal() {
                return Ok(PlayoutOutcome {
                    rewards: state.rewards()?,
                    depth,
                    reached_terminal: true,
                });
            }

            if self.max_depth > 0 && depth >= self.max_depth {
                return Ok(PlayoutOutcome {
                    rewards: vec![0.0; state.num_players()],
                    depth,
                    reached_terminal: false,
                });
            }

            let action = match state.current_player() {
                Turn::Chance => {
                    let outcomes = state.chance_outcomes();
                    let weights: Vec<f64> = outcomes.iter().map(|(_, p)| *p).collect();
                    rng.choose_weighted(&weights).map(|i| outcomes[i].0)
                }
                Turn::Player(_) => {
                    let legal = state.legal_actions();
                    self.policy.choose_action(state, &legal, rng)
                }
                Turn::Terminal => None,
            };

            let Some(action) = action else {
                trace!(depth, "playout stopped without legal actions");
                return Ok(PlayoutOutcome {
                    rewards: vec![0.0; state.num_players()],
                    depth,
                    reached_terminal: false,
                });
            };

            state.apply_action(action)?;
            depth += 1;
        }
    }
}
