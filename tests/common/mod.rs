//! Shared helpers for the integration tests.

#![allow(dead_code)]

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

use open_tarok::core::{Action, GameConfig, PlayerId};
use open_tarok::games::tarok::{Deal, TarokGame, TarokState, DEAL_ACTION};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Initialize logging once per test binary.
///
/// Level comes from `TEST_LOG`, then `RUST_LOG`, then `"warn"`.
pub fn init_logging() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

pub fn game(num_players: usize) -> TarokGame {
    TarokGame::new(GameConfig::default().with_num_players(num_players)).unwrap()
}

/// A seeded round with the deal already committed.
pub fn dealt(num_players: usize, seed: u64) -> TarokState {
    let mut state = game(num_players).new_initial_state_with_seed(seed);
    state.apply_action(DEAL_ACTION).unwrap();
    state
}

pub const P0: PlayerId = PlayerId(0);
pub const P1: PlayerId = PlayerId(1);
pub const P2: PlayerId = PlayerId(2);
pub const P3: PlayerId = PlayerId(3);

/// A fixed three-player deal.
///
/// Seat 0 holds the Mond, seat 1 the Skis, seat 2 the Pagat.
pub fn three_player_deal() -> Deal {
    Deal::new(
        vec![14, 16, 18, 27, 28, 45],
        vec![
            vec![4, 6, 9, 11, 20, 25, 32, 33, 34, 36, 38, 40, 41, 43, 46, 53],
            vec![1, 2, 8, 12, 13, 15, 17, 21, 22, 24, 29, 30, 35, 42, 50, 52],
            vec![0, 3, 5, 7, 10, 19, 23, 26, 31, 37, 39, 44, 47, 48, 49, 51],
        ],
    )
    .unwrap()
}

/// A fixed four-player deal with the King of Clubs in the talon.
///
/// Seat 0 holds taroks I to XII, seat 1 the rest of the taroks and two
/// hearts, seat 2 hearts and diamonds, seat 3 diamonds, spades and clubs.
pub fn four_player_deal() -> Deal {
    Deal::new(
        vec![48, 49, 50, 51, 52, 53],
        vec![
            (0..12).collect(),
            (12..24).collect(),
            (24..36).collect(),
            (36..48).collect(),
        ],
    )
    .unwrap()
}

/// A round on `deal` with the deal committed.
pub fn dealt_from(deal: Deal) -> TarokState {
    let mut state = game(deal.num_players())
        .new_initial_state_from_deal(deal)
        .unwrap();
    state.apply_action(DEAL_ACTION).unwrap();
    state
}

pub fn apply_all(state: &mut TarokState, actions: &[Action]) {
    for &action in actions {
        state
            .apply_action(action)
            .unwrap_or_else(|err| panic!("{} failed: {}\n{}", action, err, state));
    }
}
