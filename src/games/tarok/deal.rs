//! Dealing: a seeded shuffle split into the talon and one hand per seat.

use serde::{Deserialize, Serialize};

use super::cards::{DECK_SIZE, TALON_SIZE};
use crate::core::{Action, GameRng, PlayerId, PlayerMap};
use crate::error::{Result, TarokError};

/// Cards dealt to each seat of a validated table.
#[must_use]
pub(crate) fn hand_size(num_players: usize) -> usize {
    (DECK_SIZE - TALON_SIZE) / num_players
}

/// A complete deal: the talon and every seat's hand, hands sorted ascending.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Deal {
    talon: Vec<Action>,
    hands: PlayerMap<Vec<Action>>,
}

impl Deal {
    /// Deal from a seed. The same seed always produces the same deal.
    ///
    /// Seeded deals go through [`TarokGame`](super::TarokGame), which has
    /// already checked the table size.
    #[must_use]
    pub(crate) fn from_seed(num_players: usize, seed: u64) -> Self {
        let mut rng = GameRng::new(seed).for_context("deal");
        Self::shuffled(num_players, &mut rng)
    }

    /// Shuffle the deck, take the first six cards as the talon and deal the
    /// rest in consecutive blocks.
    #[must_use]
    pub(crate) fn shuffled(num_players: usize, rng: &mut GameRng) -> Self {
        let mut deck: Vec<Action> = (0..DECK_SIZE as Action).collect();
        rng.shuffle(&mut deck);

        let size = hand_size(num_players);
        let talon = deck[..TALON_SIZE].to_vec();
        let hands = PlayerMap::new(num_players, |player| {
            let start = TALON_SIZE + player.index() * size;
            let mut hand = deck[start..start + size].to_vec();
            hand.sort_unstable();
            hand
        });

        Self { talon, hands }
    }

    /// Build a deal from explicit cards, e.g. to set up a known position.
    ///
    /// The talon must hold six cards and the hands must split the rest of
    /// the deck evenly between three or four seats.
    pub fn new(talon: Vec<Action>, hands: Vec<Vec<Action>>) -> Result<Self> {
        let num_players = hands.len();
        if !(3..=4).contains(&num_players) {
            return Err(TarokError::Configuration(format!(
                "a deal needs 3 or 4 hands, got {}",
                num_players
            )));
        }
        if talon.len() != TALON_SIZE {
            return Err(TarokError::Configuration(format!(
                "the talon must hold {} cards, got {}",
                TALON_SIZE,
                talon.len()
            )));
        }
        let size = hand_size(num_players);
        if let Some(hand) = hands.iter().find(|h| h.len() != size) {
            return Err(TarokError::Configuration(format!(
                "every hand must hold {} cards, got one with {}",
                size,
                hand.len()
            )));
        }

        let mut seen = [false; DECK_SIZE];
        for &card in talon.iter().chain(hands.iter().flatten()) {
            let slot = seen
                .get_mut(usize::from(card))
                .ok_or(TarokError::UnknownCard(card))?;
            if *slot {
                return Err(TarokError::Configuration(format!(
                    "card {} is dealt twice",
                    card
                )));
            }
            *slot = true;
        }

        let hands = PlayerMap::new(num_players, |player| {
            let mut hand = hands[player.index()].clone();
            hand.sort_unstable();
            hand
        });
        Ok(Self { talon, hands })
    }

    /// Number of seats dealt to.
    #[must_use]
    pub fn num_players(&self) -> usize {
        self.hands.player_count()
    }

    /// The six talon cards in deal order.
    #[must_use]
    pub fn talon(&self) -> &[Action] {
        &self.talon
    }

    /// A seat's hand, sorted ascending.
    #[must_use]
    pub fn hand(&self, player: PlayerId) -> Option<&[Action]> {
        self.hands.get(player).map(Vec::as_slice)
    }

    /// Split into the talon and the hands.
    pub(crate) fn into_parts(self) -> (Vec<Action>, PlayerMap<Vec<Action>>) {
        (self.talon, self.hands)
    }
}
