//! Slovenian Tarok for three or four players.
//!
//! One round is played per game:
//!
//! - **Dealing**: a single chance action deals six talon cards and a hand
//!   to every seat
//! - **Bidding**: seats bid for contracts, the winner becomes declarer
//! - **King calling**: with four players the declarer of Three, Two or One
//!   calls a king to find a partner
//! - **Talon exchange**: the declarer picks talon cards and discards
//! - **Tricks playing**: all cards are played out in tricks
//! - **Finished**: scores and rewards are available
//!
//! [`TarokGame`] creates rounds; [`TarokState`] is the round itself.

pub mod bidding;
pub mod cards;
pub mod contracts;
pub mod deal;
mod game;
mod info_state;
pub mod scoring;
mod state;
pub mod talon;
pub mod tricks;

pub use cards::{all_cards, card, card_points, point_value, Card, Suit};
pub use contracts::Contract;
pub use deal::Deal;
pub use game::TarokGame;
pub use state::{GamePhase, TarokState, DEAL_ACTION};
pub use tricks::CompletedTrick;
