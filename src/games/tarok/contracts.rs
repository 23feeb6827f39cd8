//! Contracts and their scoring properties.
//!
//! Contracts are ranked by their bid action id: a higher id is a stronger
//! bid. Bid `0` is a pass.

use serde::{Deserialize, Serialize};

use crate::core::Action;

/// Bid action for passing.
pub const PASS: Action = 0;

/// A contract a declarer can win the bidding with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Contract {
    Klop,
    Three,
    Two,
    One,
    SoloThree,
    SoloTwo,
    SoloOne,
    Beggar,
    SoloWithout,
    OpenBeggar,
    ColourValatWithout,
    ValatWithout,
}

impl Contract {
    /// Every contract, weakest first.
    pub const ALL: [Contract; 12] = [
        Contract::Klop,
        Contract::Three,
        Contract::Two,
        Contract::One,
        Contract::SoloThree,
        Contract::SoloTwo,
        Contract::SoloOne,
        Contract::Beggar,
        Contract::SoloWithout,
        Contract::OpenBeggar,
        Contract::ColourValatWithout,
        Contract::ValatWithout,
    ];

    /// The contract selected by a bid action, `None` for pass or unknown ids.
    #[must_use]
    pub fn from_bid(action: Action) -> Option<Self> {
        match action {
            PASS => None,
            _ => Self::ALL.get(usize::from(action) - 1).copied(),
        }
    }

    /// The bid action selecting this contract.
    #[must_use]
    pub fn bid_action(self) -> Action {
        self as Action + 1
    }

    /// Base score won or lost by the declarer.
    #[must_use]
    pub fn score(self) -> i32 {
        match self {
            Contract::Klop => 70,
            Contract::Three => 10,
            Contract::Two => 20,
            Contract::One => 30,
            Contract::SoloThree => 40,
            Contract::SoloTwo => 50,
            Contract::SoloOne => 60,
            Contract::Beggar => 70,
            Contract::SoloWithout => 80,
            Contract::OpenBeggar => 90,
            Contract::ColourValatWithout => 125,
            Contract::ValatWithout => 500,
        }
    }

    /// Number of talon cards the declarer exchanges.
    #[must_use]
    pub fn talon_exchanges(self) -> usize {
        match self {
            Contract::Three | Contract::SoloThree => 3,
            Contract::Two | Contract::SoloTwo => 2,
            Contract::One | Contract::SoloOne => 1,
            _ => 0,
        }
    }

    /// Whether the declarer calls a king when four play.
    #[must_use]
    pub fn needs_king_calling(self) -> bool {
        matches!(self, Contract::Three | Contract::Two | Contract::One)
    }

    /// Whether the declarer leads the first trick instead of the forehand.
    #[must_use]
    pub fn declarer_starts(self) -> bool {
        matches!(
            self,
            Contract::Beggar
                | Contract::SoloWithout
                | Contract::OpenBeggar
                | Contract::ColourValatWithout
                | Contract::ValatWithout
        )
    }

    /// Whether tricks are to be avoided.
    #[must_use]
    pub fn is_negative(self) -> bool {
        matches!(self, Contract::Klop | Contract::Beggar | Contract::OpenBeggar)
    }

    /// Solo contracts with an exchange; only biddable with four players.
    #[must_use]
    pub fn is_solo_with_exchange(self) -> bool {
        matches!(self, Contract::SoloThree | Contract::SoloTwo | Contract::SoloOne)
    }

    /// Contracts scored by card points with silent bonuses.
    #[must_use]
    pub fn is_point_contract(self) -> bool {
        self.talon_exchanges() > 0
    }

    /// Human-readable name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Contract::Klop => "Klop",
            Contract::Three => "Three",
            Contract::Two => "Two",
            Contract::One => "One",
            Contract::SoloThree => "Solo three",
            Contract::SoloTwo => "Solo two",
            Contract::SoloOne => "Solo one",
            Contract::Beggar => "Beggar",
            Contract::SoloWithout => "Solo without",
            Contract::OpenBeggar => "Open beggar",
            Contract::ColourValatWithout => "Colour valat without",
            Contract::ValatWithout => "Valat without",
        }
    }
}

impl std::fmt::Display for Contract {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
