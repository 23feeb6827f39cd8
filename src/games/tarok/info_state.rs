//! Information state strings.
//!
//! A player's information state lists, in order, the sections of the round
//! they have observed so far, separated by `;`:
//!
//! 1. their own hand as dealt
//! 2. the bids in order
//! 3. the called king
//! 4. the talon sets as shown during the exchange, separated by `|`
//! 5. the chosen talon set
//! 6. the discards; others see taroks but an `x` for each colour card
//! 7. the declarer's hand in Open beggar
//! 8. one section per trick; a Klop gift is appended as `+card`
//!
//! Sections only appear once the round has reached them. Items within a
//! section are separated by `,`.

use super::cards::is_tarok;
use super::state::{Stage, TarokState};
use super::talon::talon_sets;
use super::tricks::CompletedTrick;
use crate::core::{Action, PlayerId};

fn join(cards: &[Action]) -> String {
    cards
        .iter()
        .map(Action::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

fn trick_section(trick: &CompletedTrick) -> String {
    match trick.gift {
        Some(gift) => format!("{}+{}", join(&trick.cards), gift),
        None => join(&trick.cards),
    }
}

/// The information state of `player`, who must be seated at the table.
pub(super) fn information_state(state: &TarokState, player: PlayerId) -> String {
    if state.stage == Stage::Dealing {
        return String::new();
    }

    let mut sections = vec![join(state.deal.hand(player).unwrap_or_default()), join(&state.bid_log)];

    if let Some(king) = state.called_king {
        sections.push(king.to_string());
    }

    if let (Some(talon), Some(contract)) = (&state.revealed_talon, state.contract) {
        let sets: Vec<String> = talon_sets(talon, contract.talon_exchanges())
            .iter()
            .map(|set| join(set))
            .collect();
        sections.push(sets.join("|"));
    }

    if let Some(set) = state.chosen_set {
        sections.push(set.to_string());
    }

    if !state.discards.is_empty() {
        if state.declarer == Some(player) {
            sections.push(join(&state.discards));
        } else {
            let shown: Vec<String> = state
                .discards
                .iter()
                .map(|&c| if is_tarok(c) { c.to_string() } else { "x".to_string() })
                .collect();
            sections.push(shown.join(","));
        }
    }

    if let Some(open) = &state.open_hand {
        sections.push(join(open));
    }

    sections.extend(state.tricks.iter().map(trick_section));

    if let Stage::TricksPlaying(_, trick) = &state.stage {
        if !trick.cards.is_empty() {
            sections.push(join(&trick.cards));
        }
    }

    sections.join(";")
}
