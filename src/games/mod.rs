//! Game implementations and the by-name registry.
//!
//! ```
//! use open_tarok::games::load_game;
//!
//! let game = load_game("tarok(num_players=4,seed=7)").unwrap();
//! assert_eq!(game.num_players(), 4);
//! ```

pub mod tarok;

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::core::{parse_game_string, GameParams, ParamValue, MAX_PLAYERS, MIN_PLAYERS};
use crate::error::{Result, TarokError};
use tarok::TarokGame;

/// Static facts about a registered game.
#[derive(Clone, Debug, PartialEq)]
pub struct GameType {
    pub short_name: &'static str,
    pub long_name: &'static str,
    pub min_num_players: usize,
    pub max_num_players: usize,
    /// Accepted options with their defaults.
    pub parameters: Vec<(&'static str, ParamValue)>,
}

type Factory = fn(&GameParams) -> Result<TarokGame>;

/// Games constructible by name.
pub struct Registry {
    entries: FxHashMap<&'static str, (GameType, Factory)>,
}

impl Default for Registry {
    fn default() -> Self {
        let mut registry = Self {
            entries: FxHashMap::default(),
        };
        registry.register(tarok_game_type(), TarokGame::from_params);
        registry
    }
}

impl Registry {
    /// Register a game under its short name, replacing any previous entry.
    pub fn register(&mut self, game_type: GameType, factory: Factory) {
        self.entries.insert(game_type.short_name, (game_type, factory));
    }

    /// Registered short names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.entries.keys().copied().collect();
        names.sort_unstable();
        names
    }

    #[must_use]
    pub fn game_type(&self, name: &str) -> Option<&GameType> {
        self.entries.get(name).map(|(game_type, _)| game_type)
    }

    /// Create a game by short name.
    pub fn create(&self, name: &str, params: &GameParams) -> Result<TarokGame> {
        let (_, factory) = self
            .entries
            .get(name)
            .ok_or_else(|| TarokError::UnknownGame(name.to_string()))?;
        debug!(game = name, options = params.len(), "creating game");
        factory(params)
    }

    /// Create a game from a string such as `tarok(num_players=3,seed=0)`.
    pub fn load(&self, game_string: &str) -> Result<TarokGame> {
        let (name, params) = parse_game_string(game_string)?;
        self.create(&name, &params)
    }
}

fn tarok_game_type() -> GameType {
    GameType {
        short_name: "tarok",
        long_name: "Slovenian Tarok",
        min_num_players: MIN_PLAYERS,
        max_num_players: MAX_PLAYERS,
        parameters: vec![
            ("num_players", ParamValue::Int(MIN_PLAYERS as i64)),
            ("seed", ParamValue::Int(-1)),
        ],
    }
}

/// Load a game from a game string using the default registry.
pub fn load_game(game_string: &str) -> Result<TarokGame> {
    Registry::default().load(game_string)
}

/// Short names of all games in the default registry.
#[must_use]
pub fn registered_names() -> Vec<&'static str> {
    Registry::default().names()
}
