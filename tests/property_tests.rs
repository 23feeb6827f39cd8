//! Property tests over randomly played rounds.

mod common;

use common::*;
use open_tarok::core::{Action, GameRng, PlayerId, Turn};
use open_tarok::games::tarok::{card_points, Contract, Deal, TarokState};
use proptest::prelude::*;

/// Play a seeded round to the end, choosing uniformly with `choice_seed`.
fn play_round(num_players: usize, deal_seed: u64, choice_seed: u64) -> TarokState {
    let mut state = game(num_players).new_initial_state_with_seed(deal_seed);
    let mut rng = GameRng::new(choice_seed);
    while !state.is_terminal() {
        let legal = state.legal_actions();
        let action = *rng.choose(&legal).unwrap();
        state.apply_action(action).unwrap();
    }
    state
}

/// The deal of a seeded round, and the same deal with one card swapped
/// between two seats other than `seat`.
fn deals_differing_outside(
    num_players: usize,
    deal_seed: u64,
    seat: PlayerId,
    (i, j): (usize, usize),
) -> (Deal, Deal) {
    let base = dealt(num_players, deal_seed);
    let talon = base.talon().to_vec();
    let hands: Vec<Vec<Action>> = PlayerId::all(num_players)
        .map(|p| base.player_cards(p).unwrap().to_vec())
        .collect();

    let others: Vec<usize> = PlayerId::all(num_players)
        .filter(|&p| p != seat)
        .map(PlayerId::index)
        .collect();
    let (q, r) = (others[0], others[1]);
    let mut swapped = hands.clone();
    let (i, j) = (i % swapped[q].len(), j % swapped[r].len());
    let card = swapped[q][i];
    swapped[q][i] = swapped[r][j];
    swapped[r][j] = card;

    (
        Deal::new(talon.clone(), hands).unwrap(),
        Deal::new(talon, swapped).unwrap(),
    )
}

fn table_size() -> impl Strategy<Value = usize> {
    prop_oneof![Just(3usize), Just(4usize)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Same seed and same choices give the same round.
    #[test]
    fn prop_rounds_are_deterministic(
        num_players in table_size(),
        deal_seed in any::<u64>(),
        choice_seed in any::<u64>(),
    ) {
        let a = play_round(num_players, deal_seed, choice_seed);
        let b = play_round(num_players, deal_seed, choice_seed);

        prop_assert_eq!(a.history(), b.history());
        prop_assert_eq!(a.scores().unwrap(), b.scores().unwrap());
        for player in PlayerId::all(num_players) {
            prop_assert_eq!(
                a.information_state_string(player).unwrap(),
                b.information_state_string(player).unwrap()
            );
        }
    }

    /// Rewards of every finished round sum to zero.
    #[test]
    fn prop_rewards_are_zero_sum(
        num_players in table_size(),
        deal_seed in any::<u64>(),
        choice_seed in any::<u64>(),
    ) {
        let state = play_round(num_players, deal_seed, choice_seed);
        let rewards = state.rewards().unwrap();
        let table = game(num_players);

        prop_assert_eq!(rewards.len(), num_players);
        prop_assert!(rewards.iter().sum::<f64>().abs() < 1e-9);
        for reward in rewards {
            prop_assert!(reward >= table.min_utility() && reward <= table.max_utility());
        }
    }

    /// Legal actions apply; anything else is rejected without side effects.
    #[test]
    fn prop_legality_is_closed(
        num_players in table_size(),
        deal_seed in any::<u64>(),
        choice_seed in any::<u64>(),
    ) {
        let mut state = game(num_players).new_initial_state_with_seed(deal_seed);
        let mut rng = GameRng::new(choice_seed);

        while !state.is_terminal() {
            let legal = state.legal_actions();
            prop_assert!(!legal.is_empty());
            prop_assert!(legal.windows(2).all(|w| w[0] < w[1]));

            let illegal: Vec<Action> = (0..54).filter(|a| !legal.contains(a)).collect();
            if let Some(&action) = rng.choose(&illegal) {
                let before = state.clone();
                prop_assert!(state.apply_action(action).is_err());
                prop_assert_eq!(&state, &before);
            }

            let action = *rng.choose(&legal).unwrap();
            prop_assert!(state.apply_action(action).is_ok());
        }
        prop_assert_eq!(state.current_player(), Turn::Terminal);
        prop_assert!(state.history().len() <= game(num_players).max_game_length());
    }

    /// A round rebuilt from its seed and history equals the original.
    #[test]
    fn prop_replay_rebuilds_state(
        num_players in table_size(),
        deal_seed in any::<u64>(),
        choice_seed in any::<u64>(),
    ) {
        let state = play_round(num_players, deal_seed, choice_seed);
        let replayed = game(num_players).replay(deal_seed, &state.history()).unwrap();
        prop_assert_eq!(replayed, state);
    }

    /// A seat's information state never depends on cards it cannot see.
    #[test]
    fn prop_information_state_hides_other_hands(
        num_players in table_size(),
        deal_seed in any::<u64>(),
        choice_seed in any::<u64>(),
        seat in 0u8..4,
        swap in (0usize..16, 0usize..16),
    ) {
        let seat = PlayerId::new(seat % num_players as u8);
        let (deal, other) = deals_differing_outside(num_players, deal_seed, seat, swap);
        let mut a = dealt_from(deal);
        let mut b = dealt_from(other);
        let mut rng = GameRng::new(choice_seed);

        loop {
            // The Open beggar declarer's hand is public.
            if a.selected_contract() == Some(Contract::OpenBeggar) && a.declarer() != Some(seat) {
                break;
            }
            prop_assert_eq!(
                a.information_state_string(seat).unwrap(),
                b.information_state_string(seat).unwrap()
            );
            if a.is_terminal() {
                break;
            }

            let action = *rng.choose(&a.legal_actions()).unwrap();
            if b.apply_action(action).is_err() {
                break;
            }
            a.apply_action(action).unwrap();
        }
    }

    /// Every card ends up in exactly one pile, and the piles count 70.
    #[test]
    fn prop_cards_are_conserved(
        num_players in table_size(),
        deal_seed in any::<u64>(),
        choice_seed in any::<u64>(),
    ) {
        let state = play_round(num_players, deal_seed, choice_seed);

        let mut all: Vec<Action> = state.talon().to_vec();
        for player in PlayerId::all(num_players) {
            prop_assert!(state.player_cards(player).unwrap().is_empty());
            all.extend_from_slice(state.collected_cards(player).unwrap());
        }
        prop_assert_eq!(card_points(&all), Ok(70));
        all.sort_unstable();
        prop_assert_eq!(all, (0..54).collect::<Vec<Action>>());
    }
}
