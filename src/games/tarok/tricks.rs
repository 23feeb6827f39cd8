//! Trick play: which cards may be played and who wins a trick.
//!
//! ## Following
//!
//! A player must follow the led suit if possible, otherwise play a tarok if
//! holding one, otherwise anything.
//!
//! ## Negative contracts
//!
//! In Klop, Beggar and Open beggar a player must also beat the best card of
//! the suit they are obliged to play, when they can. The Pagat may only be
//! played as the last remaining option, except that it is forced once the
//! Mond and Škis are both in the trick (the emperor trick).
//!
//! ## Winning
//!
//! The emperor trick is won by the Pagat. Otherwise the highest tarok wins,
//! or the highest card of the led suit if no tarok was played. In Colour
//! valat without taroks are not trumps.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::cards::{known, Suit, MOND, PAGAT, SKIS};
use super::contracts::Contract;
use crate::core::{Action, PlayerId};

/// Cards of one trick in play order.
pub type TrickCards = SmallVec<[Action; 4]>;

/// A trick being played.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Trick {
    pub leader: PlayerId,
    pub cards: TrickCards,
}

impl Trick {
    #[must_use]
    pub fn new(leader: PlayerId) -> Self {
        Self {
            leader,
            cards: SmallVec::new(),
        }
    }

    /// The seat that plays the `index`-th card of this trick.
    #[must_use]
    pub fn player_at(&self, index: usize, num_players: usize) -> PlayerId {
        self.leader.offset(index, num_players)
    }

    /// The seat to play next.
    #[must_use]
    pub fn next_player(&self, num_players: usize) -> PlayerId {
        self.player_at(self.cards.len(), num_players)
    }
}

/// A resolved trick.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CompletedTrick {
    pub leader: PlayerId,
    pub cards: TrickCards,
    pub winner: PlayerId,
    /// Talon card handed to the winner in Klop.
    pub gift: Option<Action>,
}

impl CompletedTrick {
    /// The card that won the trick.
    #[must_use]
    pub fn winning_card(&self, num_players: usize) -> Action {
        let offset = (self.winner.index() + num_players - self.leader.index()) % num_players;
        self.cards[offset]
    }

    /// The seat that played `card` in this trick.
    #[must_use]
    pub fn player_of(&self, card: Action, num_players: usize) -> Option<PlayerId> {
        self.cards
            .iter()
            .position(|&c| c == card)
            .map(|i| self.leader.offset(i, num_players))
    }
}

fn suit_of(card: Action) -> Suit {
    known(card).suit
}

fn rank_of(card: Action) -> u8 {
    known(card).rank
}

/// Cards `hand` may play onto `trick` under `contract`, ascending.
#[must_use]
pub fn legal_cards(hand: &[Action], trick: &[Action], contract: Contract) -> Vec<Action> {
    let Some(&led) = trick.first() else {
        if contract.is_negative() {
            return without_pagat_unless_alone(hand.to_vec());
        }
        return hand.to_vec();
    };

    let led_suit = suit_of(led);
    let obliged = if hand.iter().any(|&c| suit_of(c) == led_suit) {
        led_suit
    } else if hand.iter().any(|&c| suit_of(c) == Suit::Taroks) {
        Suit::Taroks
    } else {
        return hand.to_vec();
    };

    if contract.is_negative() {
        negative_follow(hand, trick, obliged)
    } else {
        cards_of_suit(hand, obliged)
    }
}

fn cards_of_suit(hand: &[Action], suit: Suit) -> Vec<Action> {
    hand.iter().copied().filter(|&c| suit_of(c) == suit).collect()
}

fn negative_follow(hand: &[Action], trick: &[Action], obliged: Suit) -> Vec<Action> {
    let holds_pagat = hand.contains(&PAGAT);
    if holds_pagat && obliged == Suit::Taroks && trick.contains(&MOND) && trick.contains(&SKIS) {
        return vec![PAGAT];
    }

    let in_suit = cards_of_suit(hand, obliged);
    let actions = match card_to_beat(trick, obliged) {
        Some(best) => {
            let higher: Vec<Action> = in_suit
                .iter()
                .copied()
                .filter(|&c| rank_of(c) > rank_of(best))
                .collect();
            if higher.is_empty() {
                in_suit
            } else {
                higher
            }
        }
        None => in_suit,
    };

    if holds_pagat {
        without_pagat_unless_alone(actions)
    } else {
        actions
    }
}

/// The card of `suit` a player in a negative contract must try to beat.
///
/// There is none when following a colour after someone trumped, or when
/// trumping a trick that holds no tarok yet.
fn card_to_beat(trick: &[Action], suit: Suit) -> Option<Action> {
    let trumped = trick.iter().any(|&c| suit_of(c) == Suit::Taroks);
    if (suit != Suit::Taroks && trumped) || (suit == Suit::Taroks && !trumped) {
        return None;
    }
    trick
        .iter()
        .copied()
        .filter(|&c| suit_of(c) == suit)
        .max_by_key(|&c| rank_of(c))
}

fn without_pagat_unless_alone(mut actions: Vec<Action>) -> Vec<Action> {
    if actions.len() > 1 {
        actions.retain(|&c| c != PAGAT);
    }
    actions
}

/// Index within `cards` of the card that wins the trick.
#[must_use]
pub fn winning_index(cards: &[Action], contract: Contract) -> usize {
    let colour_valat = contract == Contract::ColourValatWithout;
    let emperor = cards.contains(&PAGAT) && cards.contains(&MOND) && cards.contains(&SKIS);
    let tarok_led = cards.first().is_some_and(|&c| suit_of(c) == Suit::Taroks);

    if emperor && (!colour_valat || tarok_led) {
        if let Some(i) = cards.iter().position(|&c| c == PAGAT) {
            return i;
        }
    }

    let mut winner = 0;
    for (i, &card) in cards.iter().enumerate().skip(1) {
        let best = known(cards[winner]);
        let candidate = known(card);
        let trumps = candidate.suit == Suit::Taroks && !colour_valat;
        if (trumps || candidate.suit == best.suit) && candidate.rank > best.rank {
            winner = i;
        }
    }
    winner
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opening_takes_whole_hand() {
        let hand = [0, 5, 22, 40];
        assert_eq!(legal_cards(&hand, &[], Contract::Three), vec![0, 5, 22, 40]);
        assert_eq!(legal_cards(&hand, &[], Contract::Klop), vec![5, 22, 40]);
        assert_eq!(legal_cards(&[0], &[], Contract::Beggar), vec![0]);
    }

    #[test]
    fn test_follow_suit_then_tarok_then_anything() {
        let hand = [3, 24, 25, 40];
        assert_eq!(legal_cards(&hand, &[22], Contract::Three), vec![24, 25]);
        assert_eq!(legal_cards(&hand, &[31], Contract::Three), vec![3]);
        assert_eq!(legal_cards(&[24, 40], &[31], Contract::Three), vec![24, 40]);
    }

    #[test]
    fn test_negative_must_beat_in_suit() {
        let hand = [22, 23, 27, 28];
        // 3 of Hearts is led; only higher hearts may be played.
        assert_eq!(legal_cards(&hand, &[24], Contract::Klop), vec![27, 28]);
        // Nothing beats the Queen, so any heart goes.
        assert_eq!(legal_cards(&[22, 23], &[28], Contract::Klop), vec![22, 23]);
    }

    #[test]
    fn test_negative_no_obligation_after_trump() {
        let hand = [22, 23, 27];
        assert_eq!(legal_cards(&hand, &[24, 10], Contract::Klop), vec![22, 23, 27]);
    }

    #[test]
    fn test_negative_trumping_untrumped_trick() {
        let hand = [2, 9, 15];
        assert_eq!(legal_cards(&hand, &[30], Contract::Beggar), vec![2, 9, 15]);
        // Tarok led: must beat XIII with XVI.
        assert_eq!(legal_cards(&hand, &[12], Contract::Beggar), vec![15]);
    }

    #[test]
    fn test_negative_pagat_only_when_alone() {
        assert_eq!(legal_cards(&[0, 5], &[12], Contract::Klop), vec![5]);
        assert_eq!(legal_cards(&[0, 5], &[3], Contract::Klop), vec![5]);
        assert_eq!(legal_cards(&[0, 22], &[30], Contract::Klop), vec![0]);
    }

    #[test]
    fn test_negative_emperor_forces_pagat() {
        assert_eq!(legal_cards(&[0, 5, 9], &[20, 21], Contract::Klop), vec![0]);
        // Following hearts is still obligatory.
        assert_eq!(legal_cards(&[0, 22], &[23, 20, 21], Contract::Klop), vec![22]);
    }

    #[test]
    fn test_winner_by_rank_and_trump() {
        assert_eq!(winning_index(&[22, 29, 23], Contract::Three), 1);
        assert_eq!(winning_index(&[22, 29, 1], Contract::Three), 2);
        assert_eq!(winning_index(&[29, 53, 30], Contract::Three), 0);
        assert_eq!(winning_index(&[5, 29, 10, 2], Contract::Three), 2);
    }

    #[test]
    fn test_emperor_trick() {
        assert_eq!(winning_index(&[20, 0, 21], Contract::Three), 1);
        assert_eq!(winning_index(&[21, 20, 0], Contract::ColourValatWithout), 2);
        assert_eq!(winning_index(&[22, 21, 20, 0], Contract::Klop), 3);
    }

    #[test]
    fn test_colour_valat_taroks_not_trumps() {
        assert_eq!(winning_index(&[22, 21, 23], Contract::ColourValatWithout), 2);
        assert_eq!(winning_index(&[22, 20, 0, 21], Contract::ColourValatWithout), 0);
    }

    #[test]
    fn test_trick_seats() {
        let mut trick = Trick::new(PlayerId::new(2));
        assert_eq!(trick.next_player(3), PlayerId::new(2));
        trick.cards.push(22);
        assert_eq!(trick.next_player(3), PlayerId::new(0));
        assert_eq!(trick.player_at(2, 3), PlayerId::new(1));

        let done = CompletedTrick {
            leader: PlayerId::new(2),
            cards: [22, 29, 23].into_iter().collect(),
            winner: PlayerId::new(0),
            gift: None,
        };
        assert_eq!(done.winning_card(3), 29);
        assert_eq!(done.player_of(23, 3), Some(PlayerId::new(1)));
        assert_eq!(done.player_of(40, 3), None);
    }
}
