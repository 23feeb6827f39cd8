//! Round state machine.
//!
//! ## Phases
//!
//! `Dealing → Bidding → [KingCalling] → [TalonExchange] → TricksPlaying →
//! Finished`. Each phase owns the data only it needs (the contract once it
//! is known, the talon step, the trick in play); everything that outlives a
//! phase lives on the state.
//!
//! ## Values
//!
//! A state is a plain value. Cloning gives an independent copy that shares
//! the persistent history and trick list, so cloning per branch is cheap.
//! `apply_action` either applies a legal action completely or returns an
//! error and leaves the state untouched.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::bidding::{apply_bid, legal_bids, BidOutcome, Bids, FIRST_BIDDER, FOREHAND};
use super::cards::{known, try_card, MOND};
use super::contracts::Contract;
use super::deal::Deal;
use super::info_state;
use super::scoring::{self, RoundSummary};
use super::talon::{legal_discards, legal_king_calls, legal_set_choices, talon_sets, TalonStep};
use super::tricks::{legal_cards, winning_index, CompletedTrick, Trick};
use crate::core::{Action, ActionRecord, ChanceOutcome, PlayerId, PlayerMap, Turn};
use crate::error::{Result, TarokError};
use crate::rules::ExtensiveFormState;

/// The single chance action that commits the deal.
pub const DEAL_ACTION: Action = 0;

/// Phase of a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    Dealing,
    Bidding,
    KingCalling,
    TalonExchange,
    TricksPlaying,
    Finished,
}

impl std::fmt::Display for GamePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            GamePhase::Dealing => "Dealing",
            GamePhase::Bidding => "Bidding",
            GamePhase::KingCalling => "KingCalling",
            GamePhase::TalonExchange => "TalonExchange",
            GamePhase::TricksPlaying => "TricksPlaying",
            GamePhase::Finished => "Finished",
        };
        f.write_str(name)
    }
}

/// Phase together with the data only that phase uses.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(super) enum Stage {
    Dealing,
    Bidding,
    KingCalling(Contract),
    TalonExchange(Contract, TalonStep),
    TricksPlaying(Contract, Trick),
    Finished,
}

impl Stage {
    fn phase(&self) -> GamePhase {
        match self {
            Stage::Dealing => GamePhase::Dealing,
            Stage::Bidding => GamePhase::Bidding,
            Stage::KingCalling(_) => GamePhase::KingCalling,
            Stage::TalonExchange(..) => GamePhase::TalonExchange,
            Stage::TricksPlaying(..) => GamePhase::TricksPlaying,
            Stage::Finished => GamePhase::Finished,
        }
    }
}

/// State of one Tarok round.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TarokState {
    pub(super) num_players: usize,
    pub(super) deal_seed: Option<u64>,
    /// The deal committed by the chance action.
    pub(super) deal: Deal,
    pub(super) stage: Stage,
    pub(super) current_player: PlayerId,
    pub(super) hands: PlayerMap<Vec<Action>>,
    pub(super) talon: Vec<Action>,
    pub(super) bids: Bids,
    /// Bid actions in the order they were made.
    pub(super) bid_log: Vec<Action>,
    pub(super) declarer: Option<PlayerId>,
    pub(super) contract: Option<Contract>,
    pub(super) called_king: Option<Action>,
    pub(super) called_king_in_talon: bool,
    pub(super) partner: Option<PlayerId>,
    /// The talon as it was shown at the start of the exchange.
    pub(super) revealed_talon: Option<Vec<Action>>,
    pub(super) chosen_set: Option<Action>,
    pub(super) discards: Vec<Action>,
    /// Declarer's hand shown to everybody in Open beggar.
    pub(super) open_hand: Option<Vec<Action>>,
    pub(super) tricks: Vector<CompletedTrick>,
    pub(super) collected: PlayerMap<Vec<Action>>,
    pub(super) captured_mond_player: Option<PlayerId>,
    pub(super) history: Vector<ActionRecord>,
}

impl TarokState {
    /// A state waiting for `deal` to be committed by the chance action.
    pub(super) fn new(deal: Deal, deal_seed: Option<u64>) -> Self {
        let num_players = deal.num_players();
        Self {
            num_players,
            deal_seed,
            deal,
            stage: Stage::Dealing,
            current_player: FOREHAND,
            hands: PlayerMap::with_default(num_players),
            talon: Vec::new(),
            bids: PlayerMap::with_value(num_players, None),
            bid_log: Vec::new(),
            declarer: None,
            contract: None,
            called_king: None,
            called_king_in_talon: false,
            partner: None,
            revealed_talon: None,
            chosen_set: None,
            discards: Vec::new(),
            open_hand: None,
            tricks: Vector::new(),
            collected: PlayerMap::with_default(num_players),
            captured_mond_player: None,
            history: Vector::new(),
        }
    }

    // === Queries ===

    #[must_use]
    pub fn num_players(&self) -> usize {
        self.num_players
    }

    /// Seed the deal was drawn from, `None` for an explicitly built deal.
    #[must_use]
    pub fn deal_seed(&self) -> Option<u64> {
        self.deal_seed
    }

    #[must_use]
    pub fn current_game_phase(&self) -> GamePhase {
        self.stage.phase()
    }

    #[must_use]
    pub fn current_player(&self) -> Turn {
        match self.stage {
            Stage::Dealing => Turn::Chance,
            Stage::Finished => Turn::Terminal,
            _ => Turn::Player(self.current_player),
        }
    }

    /// The contract being played, once bidding is over.
    #[must_use]
    pub fn selected_contract(&self) -> Option<Contract> {
        self.contract
    }

    #[must_use]
    pub fn declarer(&self) -> Option<PlayerId> {
        self.declarer
    }

    /// The holder of the called king. Hidden information during play.
    #[must_use]
    pub fn partner(&self) -> Option<PlayerId> {
        self.partner
    }

    #[must_use]
    pub fn called_king(&self) -> Option<Action> {
        self.called_king
    }

    /// Latest bid per seat.
    #[must_use]
    pub fn bids(&self) -> &Bids {
        &self.bids
    }

    /// A seat's current hand, sorted ascending. Empty before the deal.
    pub fn player_cards(&self, player: PlayerId) -> Result<&[Action]> {
        self.hands
            .get(player)
            .map(Vec::as_slice)
            .ok_or(TarokError::UnknownPlayer(player))
    }

    /// Talon cards nobody has taken yet.
    #[must_use]
    pub fn talon(&self) -> &[Action] {
        &self.talon
    }

    /// The talon split into sets of the contract's exchange size.
    pub fn talon_sets(&self) -> Result<Vec<Vec<Action>>> {
        match &self.stage {
            Stage::TalonExchange(contract, _) => {
                Ok(talon_sets(&self.talon, contract.talon_exchanges()))
            }
            _ => Err(self.phase_violation("talon_sets")),
        }
    }

    /// Cards of the trick in play, in play order.
    #[must_use]
    pub fn trick_cards(&self) -> &[Action] {
        match &self.stage {
            Stage::TricksPlaying(_, trick) => &trick.cards,
            _ => &[],
        }
    }

    /// Tricks already resolved, in play order.
    #[must_use]
    pub fn completed_tricks(&self) -> &Vector<CompletedTrick> {
        &self.tricks
    }

    /// Cards a seat has won, including discards and talon cards.
    pub fn collected_cards(&self, player: PlayerId) -> Result<&[Action]> {
        self.collected
            .get(player)
            .map(Vec::as_slice)
            .ok_or(TarokError::UnknownPlayer(player))
    }

    /// Seat currently charged with losing the Mond.
    #[must_use]
    pub fn captured_mond_player(&self) -> Option<PlayerId> {
        self.captured_mond_player
    }

    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.stage == Stage::Finished
    }

    /// Action ids applied so far, starting with the deal.
    #[must_use]
    pub fn history(&self) -> Vec<Action> {
        self.history.iter().map(|r| r.action).collect()
    }

    /// Applied actions with the seat that took each.
    #[must_use]
    pub fn history_records(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    // === Legal actions ===

    /// Legal actions for the player to act, ascending.
    #[must_use]
    pub fn legal_actions(&self) -> Vec<Action> {
        let current = self.current_player;
        match &self.stage {
            Stage::Dealing => vec![DEAL_ACTION],
            Stage::Bidding => legal_bids(&self.bids, current),
            Stage::KingCalling(_) => legal_king_calls(),
            Stage::TalonExchange(contract, TalonStep::ChooseSet) => {
                legal_set_choices(&self.talon, contract.talon_exchanges())
            }
            Stage::TalonExchange(_, TalonStep::Discard { .. }) => {
                legal_discards(&self.hands[current])
            }
            Stage::TricksPlaying(contract, trick) => {
                legal_cards(&self.hands[current], &trick.cards, *contract)
            }
            Stage::Finished => Vec::new(),
        }
    }

    /// Chance outcomes with probabilities. Only the deal is a chance node.
    #[must_use]
    pub fn chance_outcomes(&self) -> Vec<ChanceOutcome> {
        match self.stage {
            Stage::Dealing => vec![(DEAL_ACTION, 1.0)],
            _ => Vec::new(),
        }
    }

    // === Transitions ===

    /// Apply a legal action. Illegal actions leave the state untouched.
    pub fn apply_action(&mut self, action: Action) -> Result<()> {
        if !self.legal_actions().contains(&action) {
            return Err(TarokError::InvalidAction {
                action,
                phase: self.current_game_phase(),
            });
        }

        let record = match self.current_player() {
            Turn::Player(player) => ActionRecord::player(player, action),
            Turn::Chance | Turn::Terminal => ActionRecord::chance(action),
        };

        let stage = std::mem::replace(&mut self.stage, Stage::Finished);
        self.stage = match stage {
            Stage::Dealing => self.commit_deal(),
            Stage::Bidding => self.bid(action),
            Stage::KingCalling(contract) => self.call_king(contract, action),
            Stage::TalonExchange(contract, step) => self.exchange(contract, step, action),
            Stage::TricksPlaying(contract, trick) => self.play_card(contract, trick, action),
            Stage::Finished => Stage::Finished,
        };
        self.history.push_back(record);
        Ok(())
    }

    fn commit_deal(&mut self) -> Stage {
        let (talon, hands) = self.deal.clone().into_parts();
        self.talon = talon;
        self.hands = hands;
        self.current_player = FIRST_BIDDER;
        debug!(seed = ?self.deal_seed, num_players = self.num_players, "cards dealt");
        Stage::Bidding
    }

    fn bid(&mut self, action: Action) -> Stage {
        self.bid_log.push(action);
        match apply_bid(&mut self.bids, self.current_player, action) {
            BidOutcome::Continue(next) => {
                self.current_player = next;
                Stage::Bidding
            }
            BidOutcome::Won { declarer, contract } => self.finish_bidding(declarer, contract),
        }
    }

    fn finish_bidding(&mut self, declarer: PlayerId, contract: Contract) -> Stage {
        debug!(declarer = declarer.0, contract = %contract, "bidding finished");
        self.declarer = Some(declarer);
        self.contract = Some(contract);
        self.current_player = declarer;

        if self.num_players == 4 && contract.needs_king_calling() {
            Stage::KingCalling(contract)
        } else if contract.talon_exchanges() > 0 {
            self.start_talon_exchange(contract)
        } else {
            self.start_tricks_playing(contract, declarer)
        }
    }

    fn call_king(&mut self, contract: Contract, king: Action) -> Stage {
        let declarer = self.current_player;
        self.called_king = Some(king);
        self.partner = self
            .hands
            .iter()
            .find(|(player, hand)| *player != declarer && hand.contains(&king))
            .map(|(player, _)| player);
        self.called_king_in_talon = self.talon.contains(&king);
        debug!(
            king = known(king).long_name,
            in_talon = self.called_king_in_talon,
            "king called"
        );
        self.start_talon_exchange(contract)
    }

    fn start_talon_exchange(&mut self, contract: Contract) -> Stage {
        self.revealed_talon = Some(self.talon.clone());
        Stage::TalonExchange(contract, TalonStep::ChooseSet)
    }

    fn exchange(&mut self, contract: Contract, step: TalonStep, action: Action) -> Stage {
        let declarer = self.current_player;
        let exchanges = contract.talon_exchanges();

        match step {
            TalonStep::ChooseSet => {
                let start = usize::from(action) * exchanges;
                let hand = &mut self.hands[declarer];
                hand.extend(self.talon.drain(start..start + exchanges));
                hand.sort_unstable();
                self.chosen_set = Some(action);
                trace!(set = action, "talon set chosen");
                Stage::TalonExchange(
                    contract,
                    TalonStep::Discard {
                        remaining: exchanges,
                    },
                )
            }
            TalonStep::Discard { remaining } => {
                self.hands[declarer].retain(|&c| c != action);
                self.collected[declarer].push(action);
                self.discards.push(action);
                if remaining > 1 {
                    return Stage::TalonExchange(
                        contract,
                        TalonStep::Discard {
                            remaining: remaining - 1,
                        },
                    );
                }
                if self.talon.contains(&MOND) {
                    self.captured_mond_player = Some(declarer);
                }
                self.start_tricks_playing(contract, declarer)
            }
        }
    }

    fn start_tricks_playing(&mut self, contract: Contract, declarer: PlayerId) -> Stage {
        let leader = if contract.declarer_starts() {
            declarer
        } else {
            FOREHAND
        };
        if contract == Contract::OpenBeggar {
            self.open_hand = Some(self.hands[declarer].clone());
        }
        self.current_player = leader;
        debug!(leader = leader.0, "trick play started");
        Stage::TricksPlaying(contract, Trick::new(leader))
    }

    fn play_card(&mut self, contract: Contract, mut trick: Trick, card: Action) -> Stage {
        self.hands[self.current_player].retain(|&c| c != card);
        trick.cards.push(card);

        if trick.cards.len() < self.num_players {
            self.current_player = trick.next_player(self.num_players);
            return Stage::TricksPlaying(contract, trick);
        }

        let winner = self.resolve_trick(contract, trick);
        self.current_player = winner;
        if self.hands[winner].is_empty() {
            debug!(tricks = self.tricks.len(), "round finished");
            Stage::Finished
        } else {
            Stage::TricksPlaying(contract, Trick::new(winner))
        }
    }

    fn on_declarer_side(&self, player: PlayerId) -> bool {
        Some(player) == self.declarer || Some(player) == self.partner
    }

    fn resolve_trick(&mut self, contract: Contract, trick: Trick) -> PlayerId {
        let winner = trick.player_at(winning_index(&trick.cards, contract), self.num_players);
        self.collected[winner].extend(trick.cards.iter().copied());

        let mut gift = None;
        if contract == Contract::Klop && !self.talon.is_empty() {
            let card = self.talon.remove(0);
            self.collected[winner].push(card);
            gift = Some(card);
        }

        if let Some(king) = self.called_king {
            if self.called_king_in_talon && trick.cards.contains(&king) {
                let rest: Vec<Action> = self.talon.drain(..).collect();
                if rest.contains(&MOND)
                    && self.on_declarer_side(winner)
                    && self.captured_mond_player == self.declarer
                {
                    self.captured_mond_player = None;
                }
                self.collected[winner].extend(rest);
            }
        }

        if !contract.is_negative() {
            if let Some(index) = trick.cards.iter().position(|&c| c == MOND) {
                let owner = trick.player_at(index, self.num_players);
                if owner != winner {
                    self.captured_mond_player = Some(owner);
                }
            }
        }

        trace!(winner = winner.0, cards = ?trick.cards, "trick resolved");
        self.tricks.push_back(CompletedTrick {
            leader: trick.leader,
            cards: trick.cards,
            winner,
            gift,
        });
        winner
    }

    // === Outcome ===

    fn round_summary(&self) -> Option<RoundSummary<'_>> {
        Some(RoundSummary {
            num_players: self.num_players,
            contract: self.contract?,
            declarer: self.declarer?,
            partner: self.partner,
            called_king: self.called_king,
            tricks: &self.tricks,
            collected: &self.collected,
            talon: &self.talon,
            captured_mond_player: self.captured_mond_player,
        })
    }

    /// Captured-Mond penalty per seat as things stand.
    #[must_use]
    pub fn captured_mond_penalties(&self) -> Vec<i32> {
        self.round_summary()
            .map_or_else(|| vec![0; self.num_players], |round| scoring::captured_mond_penalties(&round))
    }

    /// Raw score per seat. Only available once the round is over.
    pub fn scores(&self) -> Result<Vec<i32>> {
        match self.round_summary() {
            Some(round) if self.is_terminal() => Ok(scoring::scores(&round)),
            _ => Err(self.phase_violation("scores")),
        }
    }

    /// Zero-sum rewards per seat. Only available once the round is over.
    pub fn rewards(&self) -> Result<Vec<f64>> {
        let scores = self.scores().map_err(|_| self.phase_violation("rewards"))?;
        Ok(scoring::rewards(&scores))
    }

    fn phase_violation(&self, operation: &'static str) -> TarokError {
        TarokError::PhaseViolation {
            operation,
            phase: self.current_game_phase(),
        }
    }

    // === Strings ===

    /// Everything `player` has observed, as a canonical string.
    pub fn information_state_string(&self, player: PlayerId) -> Result<String> {
        if player.index() >= self.num_players {
            return Err(TarokError::UnknownPlayer(player));
        }
        Ok(info_state::information_state(self, player))
    }

    /// Describe an action in the current phase.
    #[must_use]
    pub fn action_to_string(&self, action: Action) -> String {
        match &self.stage {
            Stage::Dealing => "Deal".to_string(),
            Stage::Bidding => match Contract::from_bid(action) {
                Some(contract) => contract.name().to_string(),
                None if action == 0 => "Pass".to_string(),
                None => format!("Unknown bid {}", action),
            },
            Stage::TalonExchange(_, TalonStep::ChooseSet) => {
                format!("Talon set {}", u16::from(action) + 1)
            }
            Stage::KingCalling(_) | Stage::TalonExchange(..) | Stage::TricksPlaying(..) => self
                .card_action_to_string(action)
                .unwrap_or_else(|_| format!("Unknown card {}", action)),
            Stage::Finished => String::new(),
        }
    }

    /// Long name of a card action.
    pub fn card_action_to_string(&self, action: Action) -> Result<String> {
        Ok(try_card(action)?.long_name.to_string())
    }
}

fn short_names(cards: &[Action]) -> String {
    cards
        .iter()
        .map(|&c| known(c).short_name)
        .collect::<Vec<_>>()
        .join(" ")
}

impl std::fmt::Display for TarokState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Phase: {}", self.current_game_phase())?;
        writeln!(f, "To act: {}", self.current_player())?;
        if let (Some(contract), Some(declarer)) = (self.contract, self.declarer) {
            writeln!(f, "Contract: {} by {}", contract, declarer)?;
        }
        if let Some(king) = self.called_king {
            writeln!(f, "Called king: {}", known(king).long_name)?;
        }
        for (player, hand) in self.hands.iter() {
            writeln!(f, "{}: {}", player, short_names(hand))?;
        }
        writeln!(f, "Talon: {}", short_names(&self.talon))?;
        write!(f, "Trick: {}", short_names(self.trick_cards()))
    }
}

impl ExtensiveFormState for TarokState {
    type Error = TarokError;

    fn num_players(&self) -> usize {
        self.num_players
    }

    fn current_player(&self) -> Turn {
        TarokState::current_player(self)
    }

    fn legal_actions(&self) -> Vec<Action> {
        TarokState::legal_actions(self)
    }

    fn chance_outcomes(&self) -> Vec<ChanceOutcome> {
        TarokState::chance_outcomes(self)
    }

    fn apply_action(&mut self, action: Action) -> Result<()> {
        TarokState::apply_action(self, action)
    }

    fn is_terminal(&self) -> bool {
        TarokState::is_terminal(self)
    }

    fn rewards(&self) -> Result<Vec<f64>> {
        TarokState::rewards(self)
    }

    fn information_state_string(&self, player: PlayerId) -> Result<String> {
        TarokState::information_state_string(self, player)
    }

    fn history(&self) -> Vec<Action> {
        TarokState::history(self)
    }
}
