//! Game object: configuration, new rounds, replay and game-level facts.

use std::sync::atomic::{AtomicU64, Ordering};

use tracing::debug;

use super::cards::DECK_SIZE;
use super::contracts::Contract;
use super::deal::{hand_size, Deal};
use super::state::TarokState;
use crate::core::{Action, GameConfig, GameParams, GameRng};
use crate::error::{Result, TarokError};

/// Longest bidding for each table size: two bids per contract level that
/// can still be held, the passes, and the final confirming bid.
fn max_bidding_length(num_players: usize) -> usize {
    match num_players {
        3 => 17,
        _ => 24,
    }
}

/// A Tarok table.
///
/// With a configured seed the table is a deterministic stream of rounds:
/// round `k` is dealt from a seed derived from the configured seed and `k`,
/// so two tables with the same configuration deal the same sequence.
///
/// ## Example
///
/// ```
/// use open_tarok::games::tarok::{GamePhase, TarokGame};
/// use open_tarok::core::GameConfig;
///
/// let game = TarokGame::new(GameConfig::default().with_seed(3)).unwrap();
/// let mut state = game.new_initial_state();
/// state.apply_action(0).unwrap();
/// assert_eq!(state.current_game_phase(), GamePhase::Bidding);
/// ```
#[derive(Debug, Default)]
pub struct TarokGame {
    config: GameConfig,
    /// Rounds started so far from the configured seed.
    rounds: AtomicU64,
}

impl Clone for TarokGame {
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            rounds: AtomicU64::new(self.rounds.load(Ordering::Relaxed)),
        }
    }
}

impl PartialEq for TarokGame {
    fn eq(&self, other: &Self) -> bool {
        self.config == other.config
    }
}

impl Eq for TarokGame {}

/// Deal seed of round `round` on a table seeded with `seed`.
fn round_seed(seed: u64, round: u64) -> u64 {
    GameRng::new(seed)
        .for_context(&format!("round {}", round))
        .seed()
}

impl TarokGame {
    /// Create a table from a validated configuration.
    pub fn new(config: GameConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            rounds: AtomicU64::new(0),
        })
    }

    /// Create a table from named options.
    pub fn from_params(params: &GameParams) -> Result<Self> {
        Self::new(GameConfig::from_params(params)?)
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn num_players(&self) -> usize {
        self.config.num_players
    }

    /// The next round. Its deal seed comes from the configured seed and the
    /// round number, or is drawn fresh; either way it is recorded.
    #[must_use]
    pub fn new_initial_state(&self) -> TarokState {
        let seed = match self.config.seed {
            Some(seed) => round_seed(seed, self.rounds.fetch_add(1, Ordering::Relaxed)),
            None => GameRng::entropy_seed(),
        };
        self.new_initial_state_with_seed(seed)
    }

    /// A new round dealt from `seed`.
    #[must_use]
    pub fn new_initial_state_with_seed(&self, seed: u64) -> TarokState {
        debug!(seed, num_players = self.num_players(), "new round");
        TarokState::new(Deal::from_seed(self.num_players(), seed), Some(seed))
    }

    /// A new round with a fixed deal, committed by the usual chance action.
    pub fn new_initial_state_from_deal(&self, deal: Deal) -> Result<TarokState> {
        if deal.num_players() != self.num_players() {
            return Err(TarokError::Configuration(format!(
                "deal is for {} players, table seats {}",
                deal.num_players(),
                self.num_players()
            )));
        }
        Ok(TarokState::new(deal, None))
    }

    /// Rebuild a round from its deal seed and action history.
    pub fn replay(&self, seed: u64, history: &[Action]) -> Result<TarokState> {
        let mut state = self.new_initial_state_with_seed(seed);
        for &action in history {
            state.apply_action(action)?;
        }
        Ok(state)
    }

    /// Distinct action ids across all phases (the card ids).
    #[must_use]
    pub fn num_distinct_actions(&self) -> usize {
        DECK_SIZE
    }

    #[must_use]
    pub fn max_chance_outcomes(&self) -> usize {
        1
    }

    /// Longest possible history, deal action included.
    #[must_use]
    pub fn max_game_length(&self) -> usize {
        let cards_played = hand_size(self.num_players()) * self.num_players();
        1 + max_bidding_length(self.num_players()) + cards_played
    }

    /// Lower bound on rewards.
    #[must_use]
    pub fn min_utility(&self) -> f64 {
        -f64::from(Contract::ValatWithout.score())
    }

    /// Upper bound on rewards.
    #[must_use]
    pub fn max_utility(&self) -> f64 {
        f64::from(Contract::ValatWithout.score())
    }
}
