//! The 54-card Tarok deck.
//!
//! ## Catalog order
//!
//! A card's action id is its index in [`all_cards`]:
//!
//! | ids | cards |
//! |---|---|
//! | 0..=21 | taroks, Pagat (I) to Škis |
//! | 22..=29 | Hearts, 4 up to King |
//! | 30..=37 | Diamonds, 4 up to King |
//! | 38..=45 | Spades, 7 up to King |
//! | 46..=53 | Clubs, 7 up to King |
//!
//! ## Counting
//!
//! Cards are counted in the traditional way: every card is worth its point
//! value minus two thirds, and a pile is rounded to the nearest whole point.
//! The whole deck counts 70.

use serde::{Deserialize, Serialize};

use crate::core::Action;
use crate::error::{Result, TarokError};

/// Number of cards in the deck.
pub const DECK_SIZE: usize = 54;

/// Number of cards in the talon.
pub const TALON_SIZE: usize = 6;

/// Tarok I.
pub const PAGAT: Action = 0;

/// Tarok XXI.
pub const MOND: Action = 20;

/// The fool, highest tarok.
pub const SKIS: Action = 21;

/// The four kings, in suit order.
pub const KINGS: [Action; 4] = [29, 37, 45, 53];

/// Total card points in a deck; a side needs more than half to win.
pub const TOTAL_POINTS: i32 = 70;

/// Card suit. Taroks are the trump suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Hearts,
    Diamonds,
    Spades,
    Clubs,
    Taroks,
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Suit::Hearts => "Hearts",
            Suit::Diamonds => "Diamonds",
            Suit::Spades => "Spades",
            Suit::Clubs => "Clubs",
            Suit::Taroks => "Taroks",
        };
        f.write_str(name)
    }
}

/// An immutable catalog entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Card {
    pub suit: Suit,
    /// Trick-taking strength. Colour cards rank 0..=7, taroks 8..=29.
    pub rank: u8,
    pub points: u8,
    pub short_name: &'static str,
    pub long_name: &'static str,
}

impl Card {
    const fn new(
        suit: Suit,
        rank: u8,
        points: u8,
        short_name: &'static str,
        long_name: &'static str,
    ) -> Self {
        Self {
            suit,
            rank,
            points,
            short_name,
            long_name,
        }
    }

    /// Whether this card is a tarok (trump).
    #[must_use]
    pub fn is_tarok(&self) -> bool {
        self.suit == Suit::Taroks
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.long_name)
    }
}

use Suit::{Clubs, Diamonds, Hearts, Spades, Taroks};

static DECK: [Card; DECK_SIZE] = [
    Card::new(Taroks, 8, 5, "T1", "Pagat"),
    Card::new(Taroks, 9, 1, "T2", "II"),
    Card::new(Taroks, 10, 1, "T3", "III"),
    Card::new(Taroks, 11, 1, "T4", "IIII"),
    Card::new(Taroks, 12, 1, "T5", "V"),
    Card::new(Taroks, 13, 1, "T6", "VI"),
    Card::new(Taroks, 14, 1, "T7", "VII"),
    Card::new(Taroks, 15, 1, "T8", "VIII"),
    Card::new(Taroks, 16, 1, "T9", "IX"),
    Card::new(Taroks, 17, 1, "T10", "X"),
    Card::new(Taroks, 18, 1, "T11", "XI"),
    Card::new(Taroks, 19, 1, "T12", "XII"),
    Card::new(Taroks, 20, 1, "T13", "XIII"),
    Card::new(Taroks, 21, 1, "T14", "XIV"),
    Card::new(Taroks, 22, 1, "T15", "XV"),
    Card::new(Taroks, 23, 1, "T16", "XVI"),
    Card::new(Taroks, 24, 1, "T17", "XVII"),
    Card::new(Taroks, 25, 1, "T18", "XVIII"),
    Card::new(Taroks, 26, 1, "T19", "XIX"),
    Card::new(Taroks, 27, 1, "T20", "XX"),
    Card::new(Taroks, 28, 5, "T21", "Mond"),
    Card::new(Taroks, 29, 5, "T22", "Skis"),
    Card::new(Hearts, 0, 1, "H4", "4 of Hearts"),
    Card::new(Hearts, 1, 1, "H3", "3 of Hearts"),
    Card::new(Hearts, 2, 1, "H2", "2 of Hearts"),
    Card::new(Hearts, 3, 1, "H1", "1 of Hearts"),
    Card::new(Hearts, 4, 2, "HJ", "Jack of Hearts"),
    Card::new(Hearts, 5, 3, "HKN", "Knight of Hearts"),
    Card::new(Hearts, 6, 4, "HQ", "Queen of Hearts"),
    Card::new(Hearts, 7, 5, "HKI", "King of Hearts"),
    Card::new(Diamonds, 0, 1, "D4", "4 of Diamonds"),
    Card::new(Diamonds, 1, 1, "D3", "3 of Diamonds"),
    Card::new(Diamonds, 2, 1, "D2", "2 of Diamonds"),
    Card::new(Diamonds, 3, 1, "D1", "1 of Diamonds"),
    Card::new(Diamonds, 4, 2, "DJ", "Jack of Diamonds"),
    Card::new(Diamonds, 5, 3, "DKN", "Knight of Diamonds"),
    Card::new(Diamonds, 6, 4, "DQ", "Queen of Diamonds"),
    Card::new(Diamonds, 7, 5, "DKI", "King of Diamonds"),
    Card::new(Spades, 0, 1, "S7", "7 of Spades"),
    Card::new(Spades, 1, 1, "S8", "8 of Spades"),
    Card::new(Spades, 2, 1, "S9", "9 of Spades"),
    Card::new(Spades, 3, 1, "S10", "10 of Spades"),
    Card::new(Spades, 4, 2, "SJ", "Jack of Spades"),
    Card::new(Spades, 5, 3, "SKN", "Knight of Spades"),
    Card::new(Spades, 6, 4, "SQ", "Queen of Spades"),
    Card::new(Spades, 7, 5, "SKI", "King of Spades"),
    Card::new(Clubs, 0, 1, "C7", "7 of Clubs"),
    Card::new(Clubs, 1, 1, "C8", "8 of Clubs"),
    Card::new(Clubs, 2, 1, "C9", "9 of Clubs"),
    Card::new(Clubs, 3, 1, "C10", "10 of Clubs"),
    Card::new(Clubs, 4, 2, "CJ", "Jack of Clubs"),
    Card::new(Clubs, 5, 3, "CKN", "Knight of Clubs"),
    Card::new(Clubs, 6, 4, "CQ", "Queen of Clubs"),
    Card::new(Clubs, 7, 5, "CKI", "King of Clubs"),
];

/// The full catalog in action-id order.
#[must_use]
pub fn all_cards() -> &'static [Card; DECK_SIZE] {
    &DECK
}

/// Look up a card by action id.
#[must_use]
pub fn card(action: Action) -> Option<&'static Card> {
    DECK.get(usize::from(action))
}

/// Look up a card that is known to come from a hand, trick or talon.
///
/// Every id stored in game state has been validated against the catalog.
pub(crate) fn known(action: Action) -> &'static Card {
    &DECK[usize::from(action)]
}

/// Look up a card by action id, failing on ids outside the deck.
pub fn try_card(action: Action) -> Result<&'static Card> {
    card(action).ok_or(TarokError::UnknownCard(action))
}

/// Point value of a card.
#[must_use]
pub fn point_value(card: &Card) -> u8 {
    card.points
}

/// Whether a card is one of Pagat, Mond or Škis.
#[must_use]
pub fn is_trula(action: Action) -> bool {
    matches!(action, PAGAT | MOND | SKIS)
}

/// Whether a card is a king.
#[must_use]
pub fn is_king(action: Action) -> bool {
    KINGS.contains(&action)
}

/// Whether a card is a tarok.
#[must_use]
pub fn is_tarok(action: Action) -> bool {
    card(action).is_some_and(Card::is_tarok)
}

/// Count a pile of cards, rounding to the nearest point.
///
/// Cards are counted in threes: each group scores its card values minus two.
/// Fails on ids outside the deck.
///
/// ```
/// use open_tarok::games::tarok::cards::{card_points, TOTAL_POINTS};
///
/// let deck: Vec<u8> = (0..54).collect();
/// assert_eq!(card_points(&deck), Ok(TOTAL_POINTS));
/// assert!(card_points(&[54]).is_err());
/// ```
pub fn card_points(cards: &[Action]) -> Result<i32> {
    for &c in cards {
        try_card(c)?;
    }
    Ok(pile_points(cards))
}

/// [`card_points`] for piles built by the engine, which only hold dealt cards.
pub(crate) fn pile_points(cards: &[Action]) -> i32 {
    let raw: i32 = cards.iter().map(|&c| i32::from(known(c).points)).sum();
    let count = cards.len() as i32;
    (3 * raw - 2 * count + 1) / 3
}
