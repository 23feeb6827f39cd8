//! Score sheet for a finished round.
//!
//! ## Klop
//!
//! Everybody plays for themselves. A player who collects more than 35
//! points loses 70, a player who collects no cards wins 70; when either
//! happens everybody else scores 0. Otherwise each player loses what they
//! collected.
//!
//! ## Contracts with an exchange
//!
//! The declarer side counts its cards: `points - 35` plus the contract
//! score when it wins (`> 35`), minus it when it loses. Silent bonuses are
//! added for trula, all four kings, king ultimo and pagat ultimo. Winning
//! every trick replaces all of that with ±250.
//!
//! ## Higher contracts
//!
//! Beggar and Open beggar are won by taking no trick, Solo without by
//! counting more than 35, the valats by taking every trick. The declarer
//! wins or loses the contract score.
//!
//! A player whose Mond is captured in a positive contract loses 20 on top.

use im::Vector;

use super::cards::{pile_points, KINGS, MOND, PAGAT, SKIS};
use super::contracts::Contract;
use super::tricks::CompletedTrick;
use crate::core::{Action, PlayerId, PlayerMap};

/// Half of the deck's points; more than this wins.
const HALF_POINTS: i32 = 35;
const VALAT_SCORE: i32 = 250;
const TRULA_BONUS: i32 = 10;
const KINGS_BONUS: i32 = 10;
const KING_ULTIMO_BONUS: i32 = 10;
const PAGAT_ULTIMO_BONUS: i32 = 25;
const KLOP_LIMIT: i32 = 70;

/// Penalty for losing the Mond.
pub const CAPTURED_MOND_PENALTY: i32 = 20;

/// Everything needed to score a finished round.
#[derive(Clone, Copy, Debug)]
pub struct RoundSummary<'a> {
    pub num_players: usize,
    pub contract: Contract,
    pub declarer: PlayerId,
    pub partner: Option<PlayerId>,
    pub called_king: Option<Action>,
    pub tricks: &'a Vector<CompletedTrick>,
    pub collected: &'a PlayerMap<Vec<Action>>,
    /// Talon cards nobody picked up.
    pub talon: &'a [Action],
    pub captured_mond_player: Option<PlayerId>,
}

impl RoundSummary<'_> {
    fn on_declarer_side(&self, player: PlayerId) -> bool {
        player == self.declarer || Some(player) == self.partner
    }

    /// Cards won by the declarer and partner.
    fn declarer_pile(&self) -> Vec<Action> {
        self.collected
            .iter()
            .filter(|(player, _)| self.on_declarer_side(*player))
            .flat_map(|(_, cards)| cards.iter().copied())
            .collect()
    }

    /// Cards won by the opponents, plus the talon left over.
    fn opponent_pile(&self) -> Vec<Action> {
        self.collected
            .iter()
            .filter(|(player, _)| !self.on_declarer_side(*player))
            .flat_map(|(_, cards)| cards.iter().copied())
            .chain(self.talon.iter().copied())
            .collect()
    }

    fn declarer_side_won_all(&self) -> bool {
        self.tricks.iter().all(|t| self.on_declarer_side(t.winner))
    }

    fn declarer_side_won_none(&self) -> bool {
        self.tricks.iter().all(|t| !self.on_declarer_side(t.winner))
    }
}

/// `1` for a side that won, `-1` otherwise.
fn sign(won: bool) -> i32 {
    if won {
        1
    } else {
        -1
    }
}

/// Raw scores per seat, including captured-Mond penalties.
#[must_use]
pub fn scores(round: &RoundSummary<'_>) -> Vec<i32> {
    let mut scores = match round.contract {
        Contract::Klop => klop_scores(round),
        contract if contract.is_point_contract() => point_contract_scores(round),
        _ => higher_contract_scores(round),
    };

    if !round.contract.is_negative() {
        if let Some(player) = round.captured_mond_player {
            scores[player.index()] -= CAPTURED_MOND_PENALTY;
        }
    }
    scores
}

/// Captured-Mond penalty per seat (zero or negative).
#[must_use]
pub fn captured_mond_penalties(round: &RoundSummary<'_>) -> Vec<i32> {
    let mut penalties = vec![0; round.num_players];
    if !round.contract.is_negative() {
        if let Some(player) = round.captured_mond_player {
            penalties[player.index()] = -CAPTURED_MOND_PENALTY;
        }
    }
    penalties
}

fn klop_scores(round: &RoundSummary<'_>) -> Vec<i32> {
    let mut scores: Vec<i32> = round
        .collected
        .values()
        .map(|cards| {
            let points = pile_points(cards);
            if points > HALF_POINTS {
                -KLOP_LIMIT
            } else if cards.is_empty() {
                KLOP_LIMIT
            } else {
                -points
            }
        })
        .collect();

    if scores.iter().any(|s| s.abs() == KLOP_LIMIT) {
        for score in &mut scores {
            if score.abs() != KLOP_LIMIT {
                *score = 0;
            }
        }
    }
    scores
}

fn point_contract_scores(round: &RoundSummary<'_>) -> Vec<i32> {
    let side_score = if round.declarer_side_won_all() {
        VALAT_SCORE
    } else if round.declarer_side_won_none() {
        -VALAT_SCORE
    } else {
        let declarer_pile = round.declarer_pile();
        let opponent_pile = round.opponent_pile();
        let points = pile_points(&declarer_pile);
        let contract = round.contract.score();
        let base = if points > HALF_POINTS {
            points - HALF_POINTS + contract
        } else {
            points - HALF_POINTS - contract
        };
        base + silent_bonuses(round, &declarer_pile, &opponent_pile)
    };

    PlayerId::all(round.num_players)
        .map(|player| if round.on_declarer_side(player) { side_score } else { 0 })
        .collect()
}

fn silent_bonuses(round: &RoundSummary<'_>, declarer_pile: &[Action], opponent_pile: &[Action]) -> i32 {
    let holds_all = |pile: &[Action], cards: &[Action]| cards.iter().all(|c| pile.contains(c));
    let mut bonus = 0;

    for (cards, value) in [(&[PAGAT, MOND, SKIS][..], TRULA_BONUS), (&KINGS[..], KINGS_BONUS)] {
        if holds_all(declarer_pile, cards) {
            bonus += value;
        } else if holds_all(opponent_pile, cards) {
            bonus -= value;
        }
    }

    if let Some(last) = round.tricks.last() {
        let side = sign(round.on_declarer_side(last.winner));
        if let Some(king) = round.called_king {
            if last.cards.contains(&king) {
                bonus += side * KING_ULTIMO_BONUS;
            }
        }
        if last.winning_card(round.num_players) == PAGAT {
            bonus += side * PAGAT_ULTIMO_BONUS;
        }
    }
    bonus
}

fn higher_contract_scores(round: &RoundSummary<'_>) -> Vec<i32> {
    let won = match round.contract {
        Contract::Beggar | Contract::OpenBeggar => round.declarer_side_won_none(),
        Contract::SoloWithout => pile_points(&round.declarer_pile()) > HALF_POINTS,
        _ => round.declarer_side_won_all(),
    };
    let score = sign(won) * round.contract.score();

    PlayerId::all(round.num_players)
        .map(|player| if player == round.declarer { score } else { 0 })
        .collect()
}

/// Zero-sum rewards: each score minus the table mean.
#[must_use]
pub fn rewards(scores: &[i32]) -> Vec<f64> {
    if scores.is_empty() {
        return Vec::new();
    }
    let mean = scores.iter().map(|&s| f64::from(s)).sum::<f64>() / scores.len() as f64;
    scores.iter().map(|&s| f64::from(s) - mean).collect()
}
