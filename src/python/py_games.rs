//! Game bindings for Python.

use pyo3::prelude::*;

use crate::core::{Action, GameConfig, PlayerId, Turn};
use crate::games::tarok::{TarokGame, TarokState};
use crate::games::load_game as load_game_by_name;

use super::py_core::{turn_to_index, PyContract, PyGamePhase};

/// Python wrapper for TarokGame.
#[pyclass(name = "TarokGame")]
#[derive(Clone)]
pub struct PyTarokGame(pub TarokGame);

#[pymethods]
impl PyTarokGame {
    /// Create a table.
    ///
    /// # Arguments
    /// - num_players: 3 or 4
    /// - seed: deal seed; a fresh one is drawn per round when omitted
    #[new]
    #[pyo3(signature = (num_players = 3, seed = None))]
    fn new(num_players: usize, seed: Option<u64>) -> PyResult<Self> {
        let mut config = GameConfig::default().with_num_players(num_players);
        if let Some(seed) = seed {
            config = config.with_seed(seed);
        }
        Ok(Self(TarokGame::new(config)?))
    }

    /// Start a new round.
    #[pyo3(signature = (seed = None))]
    fn new_initial_state(&self, seed: Option<u64>) -> PyTarokState {
        let state = match seed {
            Some(seed) => self.0.new_initial_state_with_seed(seed),
            None => self.0.new_initial_state(),
        };
        PyTarokState(state)
    }

    /// Rebuild a round from its deal seed and action history.
    fn replay(&self, seed: u64, history: Vec<Action>) -> PyResult<PyTarokState> {
        Ok(PyTarokState(self.0.replay(seed, &history)?))
    }

    fn num_players(&self) -> usize {
        self.0.num_players()
    }

    fn num_distinct_actions(&self) -> usize {
        self.0.num_distinct_actions()
    }

    fn max_chance_outcomes(&self) -> usize {
        self.0.max_chance_outcomes()
    }

    fn max_game_length(&self) -> usize {
        self.0.max_game_length()
    }

    fn min_utility(&self) -> f64 {
        self.0.min_utility()
    }

    fn max_utility(&self) -> f64 {
        self.0.max_utility()
    }

    fn __repr__(&self) -> String {
        format!("TarokGame(num_players={})", self.0.num_players())
    }
}

/// Python wrapper for TarokState.
#[pyclass(name = "TarokState")]
#[derive(Clone)]
pub struct PyTarokState(pub TarokState);

#[pymethods]
impl PyTarokState {
    /// Seat to act: 0-based seat, -1 for chance, -4 when terminal.
    fn current_player(&self) -> i64 {
        turn_to_index(self.0.current_player())
    }

    fn current_game_phase(&self) -> PyGamePhase {
        self.0.current_game_phase().into()
    }

    fn legal_actions(&self) -> Vec<Action> {
        self.0.legal_actions()
    }

    fn chance_outcomes(&self) -> Vec<(Action, f64)> {
        self.0.chance_outcomes()
    }

    /// Apply an action. Raises ValueError if it is illegal.
    fn apply_action(&mut self, action: Action) -> PyResult<()> {
        Ok(self.0.apply_action(action)?)
    }

    fn is_terminal(&self) -> bool {
        self.0.is_terminal()
    }

    fn is_chance_node(&self) -> bool {
        matches!(self.0.current_player(), Turn::Chance)
    }

    /// Zero-sum rewards. Raises ValueError before the round is over.
    fn rewards(&self) -> PyResult<Vec<f64>> {
        Ok(self.0.rewards()?)
    }

    /// Raw scores. Raises ValueError before the round is over.
    fn scores(&self) -> PyResult<Vec<i32>> {
        Ok(self.0.scores()?)
    }

    fn information_state_string(&self, player: u8) -> PyResult<String> {
        Ok(self.0.information_state_string(PlayerId::new(player))?)
    }

    fn action_to_string(&self, action: Action) -> String {
        self.0.action_to_string(action)
    }

    /// Long card name. Raises ValueError for ids outside the deck.
    fn card_action_to_string(&self, action: Action) -> PyResult<String> {
        Ok(self.0.card_action_to_string(action)?)
    }

    fn history(&self) -> Vec<Action> {
        self.0.history()
    }

    fn player_cards(&self, player: u8) -> PyResult<Vec<Action>> {
        Ok(self.0.player_cards(PlayerId::new(player))?.to_vec())
    }

    fn talon(&self) -> Vec<Action> {
        self.0.talon().to_vec()
    }

    /// Talon sets on offer. Raises ValueError outside the exchange.
    fn talon_sets(&self) -> PyResult<Vec<Vec<Action>>> {
        Ok(self.0.talon_sets()?)
    }

    fn trick_cards(&self) -> Vec<Action> {
        self.0.trick_cards().to_vec()
    }

    fn collected_cards(&self, player: u8) -> PyResult<Vec<Action>> {
        Ok(self.0.collected_cards(PlayerId::new(player))?.to_vec())
    }

    fn captured_mond_penalties(&self) -> Vec<i32> {
        self.0.captured_mond_penalties()
    }

    /// The contract once bidding is over, else None.
    fn selected_contract(&self) -> Option<PyContract> {
        self.0.selected_contract().map(PyContract::from)
    }

    fn declarer(&self) -> Option<u8> {
        self.0.declarer().map(|p| p.0)
    }

    /// Independent copy of the state for search.
    #[pyo3(name = "clone")]
    fn clone_state(&self) -> Self {
        Self(self.0.clone())
    }

    fn __str__(&self) -> String {
        self.0.to_string()
    }

    fn __repr__(&self) -> String {
        format!(
            "TarokState(phase={}, to_act={})",
            self.0.current_game_phase(),
            self.0.current_player()
        )
    }
}

/// Load a game from a string such as `tarok(num_players=4)`.
#[pyfunction]
pub fn load_game(game_string: &str) -> PyResult<PyTarokGame> {
    Ok(PyTarokGame(load_game_by_name(game_string)?))
}
