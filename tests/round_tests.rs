//! King calling, the talon exchange, trick play and information states on
//! fixed deals.

mod common;

use common::*;
use open_tarok::core::Turn;
use open_tarok::error::TarokError;
use open_tarok::games::tarok::{CompletedTrick, Contract, GamePhase, TarokState};

/// Seat 1 wins Two on the three-player deal: bid, pass, pass, hold.
fn two_by_seat_one() -> TarokState {
    let mut state = dealt_from(three_player_deal());
    apply_all(&mut state, &[3, 0, 0, 3]);
    state
}

/// Seat 1 wins Two on the four-player deal.
fn four_player_two() -> TarokState {
    let mut state = dealt_from(four_player_deal());
    apply_all(&mut state, &[3, 0, 0, 0, 3]);
    state
}

// === Talon exchange ===

#[test]
fn test_three_player_exchange() {
    init_logging();
    let mut state = two_by_seat_one();

    assert_eq!(state.selected_contract(), Some(Contract::Two));
    assert_eq!(state.declarer(), Some(P1));
    assert_eq!(state.current_game_phase(), GamePhase::TalonExchange);
    assert_eq!(
        state.talon_sets().unwrap(),
        vec![vec![14, 16], vec![18, 27], vec![28, 45]]
    );
    assert_eq!(state.legal_actions(), vec![0, 1, 2]);
    assert_eq!(state.action_to_string(2), "Talon set 3");
    assert_eq!(state.action_to_string(255), "Talon set 256");

    apply_all(&mut state, &[2]);
    let hand = state.player_cards(P1).unwrap();
    assert_eq!(hand.len(), 18);
    assert!(hand.contains(&28) && hand.contains(&45));
    assert_eq!(state.talon(), &[14, 16, 18, 27]);

    // Kings and the Skis stay in hand; plain taroks may go.
    assert_eq!(
        state.legal_actions(),
        vec![1, 2, 8, 12, 13, 15, 17, 22, 24, 28, 30, 35, 42, 50, 52]
    );
    apply_all(&mut state, &[22, 24]);

    assert_eq!(state.current_game_phase(), GamePhase::TricksPlaying);
    assert_eq!(state.player_cards(P1).unwrap().len(), 16);
    assert_eq!(state.collected_cards(P1).unwrap(), &[22, 24]);
    // Two is led by the forehand.
    assert_eq!(state.current_player(), Turn::Player(P0));
    assert_eq!(state.captured_mond_player(), None);
}

#[test]
fn test_talon_sets_outside_exchange() {
    let state = dealt_from(three_player_deal());
    assert_eq!(
        state.talon_sets().unwrap_err(),
        TarokError::PhaseViolation {
            operation: "talon_sets",
            phase: GamePhase::Bidding,
        }
    );
}

// === King calling ===

#[test]
fn test_called_king_finds_partner() {
    let mut state = four_player_two();
    assert_eq!(state.current_game_phase(), GamePhase::KingCalling);
    assert_eq!(state.current_player(), Turn::Player(P1));
    assert_eq!(state.legal_actions(), vec![29, 37, 45, 53]);
    assert_eq!(state.action_to_string(29), "King of Hearts");

    apply_all(&mut state, &[29]);
    assert_eq!(state.called_king(), Some(29));
    assert_eq!(state.partner(), Some(P2));
    assert_eq!(state.current_game_phase(), GamePhase::TalonExchange);
}

#[test]
fn test_called_king_in_talon_brings_the_rest() {
    init_logging();
    let mut state = four_player_two();
    // Call the King of Clubs, pick it up and discard both hearts.
    apply_all(&mut state, &[53, 2, 22, 23]);
    assert_eq!(state.partner(), None);
    assert_eq!(state.talon(), &[48, 49, 50, 51]);

    // Skis wins the first trick for seat 1.
    apply_all(&mut state, &[1, 21, 24, 36]);
    assert_eq!(state.current_player(), Turn::Player(P1));

    // Seat 0 trumps the called king and takes the rest of the talon.
    apply_all(&mut state, &[53, 25, 46]);
    assert_eq!(state.legal_actions(), (0..12).filter(|&c| c != 1).collect::<Vec<u8>>());
    apply_all(&mut state, &[2]);

    assert_eq!(state.completed_tricks()[1].winner, P0);
    assert!(state.talon().is_empty());
    let collected = state.collected_cards(P0).unwrap();
    for card in [48, 49, 50, 51, 53] {
        assert!(collected.contains(&card));
    }
}

#[test]
fn test_three_players_skip_king_calling() {
    let state = two_by_seat_one();
    assert_eq!(state.called_king(), None);
    assert_eq!(state.current_game_phase(), GamePhase::TalonExchange);
}

// === Tricks ===

#[test]
fn test_follow_suit_and_trick_winner() {
    let mut state = two_by_seat_one();
    apply_all(&mut state, &[2, 22, 24]);

    apply_all(&mut state, &[38]);
    assert_eq!(state.current_player(), Turn::Player(P1));
    assert_eq!(state.legal_actions(), vec![42, 45]);
    apply_all(&mut state, &[45]);
    assert_eq!(state.legal_actions(), vec![39, 44]);
    assert_eq!(state.trick_cards(), &[38, 45]);
    apply_all(&mut state, &[39]);

    let trick = &state.completed_tricks()[0];
    assert_eq!(trick.leader, P0);
    assert_eq!(trick.winner, P1);
    assert!(state.trick_cards().is_empty());
    assert_eq!(state.current_player(), Turn::Player(P1));
    assert_eq!(state.collected_cards(P1).unwrap(), &[22, 24, 38, 45, 39]);
}

#[test]
fn test_emperor_trick_and_captured_mond() {
    let mut state = two_by_seat_one();
    apply_all(&mut state, &[2, 22, 24, 38, 45, 39]);

    // Skis led; Pagat and Mond follow. Pagat takes the trick.
    apply_all(&mut state, &[21]);
    assert_eq!(state.legal_actions(), vec![0, 3, 5, 7, 10, 19]);
    apply_all(&mut state, &[0]);
    assert_eq!(state.legal_actions(), vec![4, 6, 9, 11, 20]);
    apply_all(&mut state, &[20]);

    assert_eq!(state.completed_tricks()[1].winner, P2);
    assert_eq!(state.current_player(), Turn::Player(P2));
    assert_eq!(state.captured_mond_player(), Some(P0));
    assert_eq!(state.captured_mond_penalties(), vec![-20, 0, 0]);
}

#[test]
fn test_klop_gifts_talon_cards() {
    let mut state = dealt_from(three_player_deal());
    apply_all(&mut state, &[0, 0, 1]);
    assert_eq!(state.selected_contract(), Some(Contract::Klop));
    assert_eq!(state.current_player(), Turn::Player(P0));

    apply_all(&mut state, &[38]);
    // Seat 1 has a single spade; seat 2 must beat it.
    assert_eq!(state.legal_actions(), vec![42]);
    apply_all(&mut state, &[42]);
    assert_eq!(state.legal_actions(), vec![44]);
    apply_all(&mut state, &[44]);

    let trick = &state.completed_tricks()[0];
    assert_eq!(trick.winner, P2);
    assert_eq!(trick.gift, Some(14));
    assert_eq!(state.talon(), &[16, 18, 27, 28, 45]);
    assert_eq!(state.collected_cards(P2).unwrap(), &[38, 42, 44, 14]);
    // No Mond penalty in negative contracts.
    assert_eq!(state.captured_mond_penalties(), vec![0, 0, 0]);
}

#[test]
fn test_completed_tricks_serialize() {
    let mut state = two_by_seat_one();
    apply_all(&mut state, &[2, 22, 24, 38, 45, 39]);

    let tricks: Vec<CompletedTrick> = state.completed_tricks().iter().cloned().collect();
    let json = serde_json::to_string(&tricks).unwrap();
    let back: Vec<CompletedTrick> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, tricks);

    let phase = serde_json::to_string(&state.current_game_phase()).unwrap();
    assert_eq!(phase, "\"TricksPlaying\"");
}

// === Information states ===

#[test]
fn test_discards_hidden_from_opponents() {
    let mut state = two_by_seat_one();
    apply_all(&mut state, &[2, 22, 24]);

    assert_eq!(
        state.information_state_string(P1).unwrap(),
        "1,2,8,12,13,15,17,21,22,24,29,30,35,42,50,52;3,0,0,3;14,16|18,27|28,45;2;22,24"
    );
    assert_eq!(
        state.information_state_string(P0).unwrap(),
        "4,6,9,11,20,25,32,33,34,36,38,40,41,43,46,53;3,0,0,3;14,16|18,27|28,45;2;x,x"
    );
}

#[test]
fn test_discarded_taroks_are_face_up() {
    let mut state = two_by_seat_one();
    apply_all(&mut state, &[2, 1, 22]);
    assert_eq!(state.current_game_phase(), GamePhase::TricksPlaying);

    let prefix = ";3,0,0,3;14,16|18,27|28,45;2;";
    assert!(state
        .information_state_string(P1)
        .unwrap()
        .ends_with(&format!("{}1,22", prefix)));
    for opponent in [P0, P2] {
        assert!(state
            .information_state_string(opponent)
            .unwrap()
            .ends_with(&format!("{}1,x", prefix)));
    }
}

#[test]
fn test_information_state_lists_tricks() {
    let mut state = dealt_from(three_player_deal());
    apply_all(&mut state, &[0, 0, 1, 38, 42, 44, 31]);

    assert_eq!(
        state.information_state_string(P2).unwrap(),
        "0,3,5,7,10,19,23,26,31,37,39,44,47,48,49,51;0,0,1;38,42,44+14;31"
    );
}

#[test]
fn test_information_state_errors() {
    let state = game(3)
        .new_initial_state_from_deal(three_player_deal())
        .unwrap();
    assert_eq!(state.information_state_string(P0).unwrap(), "");
    assert_eq!(
        state.information_state_string(P3).unwrap_err(),
        TarokError::UnknownPlayer(P3)
    );
}

#[test]
fn test_open_beggar_hand_is_public() {
    let mut state = dealt_from(three_player_deal());
    apply_all(&mut state, &[10, 0, 0, 10]);
    assert_eq!(state.selected_contract(), Some(Contract::OpenBeggar));
    assert_eq!(state.current_player(), Turn::Player(P1));

    let declarer_hand = "1,2,8,12,13,15,17,21,22,24,29,30,35,42,50,52";
    let info = state.information_state_string(P2).unwrap();
    assert!(info.ends_with(&format!(";{}", declarer_hand)));
}

// === Errors ===

#[test]
fn test_illegal_action_leaves_state_untouched() {
    let mut state = dealt_from(three_player_deal());
    let before = state.clone();

    let err = state.apply_action(5).unwrap_err();
    assert_eq!(
        err,
        TarokError::InvalidAction {
            action: 5,
            phase: GamePhase::Bidding,
        }
    );
    assert_eq!(state, before);
}

#[test]
fn test_rewards_before_the_end() {
    let state = two_by_seat_one();
    assert!(matches!(
        state.rewards(),
        Err(TarokError::PhaseViolation {
            operation: "rewards",
            ..
        })
    ));
    assert!(state.scores().is_err());
}

#[test]
fn test_wrong_table_size_for_deal() {
    let err = game(4)
        .new_initial_state_from_deal(three_player_deal())
        .unwrap_err();
    assert!(matches!(err, TarokError::Configuration(_)));
}

#[test]
fn test_finished_round_has_no_action_strings() {
    let mut state = dealt_from(three_player_deal());
    while !state.is_terminal() {
        let action = state.legal_actions()[0];
        state.apply_action(action).unwrap();
    }
    assert_eq!(state.current_player(), Turn::Terminal);
    assert!(state.legal_actions().is_empty());
    assert_eq!(state.action_to_string(3), "");
    assert_eq!(state.rewards().unwrap().len(), 3);
}
