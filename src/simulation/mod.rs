//! Random playouts over any `ExtensiveFormState`.
//!
//! Used by benchmarks and robustness tests, and as the rollout step of
//! sampling-based search.
//!
//! ## Usage
//!
//! ```rust
//! use open_tarok::core::GameRng;
//! use open_tarok::games::tarok::TarokGame;
//! use open_tarok::simulation::RandomPlayout;
//!
//! let game = TarokGame::default();
//! let mut state = game.new_initial_state_with_seed(1);
//! let mut rng = GameRng::new(1).for_context("playout");
//!
//! let outcome = RandomPlayout::default().run(&mut state, &mut rng).unwrap();
//! assert!(outcome.reached_terminal);
//! assert!(outcome.rewards.iter().sum::<f64>().abs() < 1e-9);
//! ```

mod playout;

pub use playout::{PlayoutOutcome, PlayoutPolicy, RandomPlayout, UniformRandom};
