//! Game configuration.
//!
//! A table is configured by two options:
//!
//! - `num_players`: 3 or 4 (default 3)
//! - `seed`: deal seed; unset (or `-1`) draws a fresh seed per deal
//!
//! Options arrive either through the builder methods on [`GameConfig`] or as
//! a parameter map, usually parsed from a game string such as
//! `tarok(num_players=4,seed=7)`.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, TarokError};

/// Smallest supported table.
pub const MIN_PLAYERS: usize = 3;

/// Largest supported table.
pub const MAX_PLAYERS: usize = 4;

/// A single game option value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParamValue {
    Int(i64),
    Bool(bool),
    Str(String),
}

impl ParamValue {
    /// Interpret a raw option value: integers, then booleans, then strings.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if let Ok(value) = raw.parse::<i64>() {
            return ParamValue::Int(value);
        }
        match raw {
            "true" => ParamValue::Bool(true),
            "false" => ParamValue::Bool(false),
            _ => ParamValue::Str(raw.trim_matches('"').to_string()),
        }
    }
}

impl std::fmt::Display for ParamValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParamValue::Int(v) => write!(f, "{}", v),
            ParamValue::Bool(v) => write!(f, "{}", v),
            ParamValue::Str(v) => write!(f, "{}", v),
        }
    }
}

/// Named game options.
pub type GameParams = FxHashMap<String, ParamValue>;

/// Split a game string `name(key=value,...)` into its name and options.
///
/// ```
/// use open_tarok::core::{parse_game_string, ParamValue};
///
/// let (name, params) = parse_game_string("tarok(num_players=4,seed=7)").unwrap();
/// assert_eq!(name, "tarok");
/// assert_eq!(params["num_players"], ParamValue::Int(4));
/// ```
pub fn parse_game_string(game_string: &str) -> Result<(String, GameParams)> {
    let game_string = game_string.trim();
    let mut params = GameParams::default();

    let Some(open) = game_string.find('(') else {
        return Ok((game_string.to_string(), params));
    };
    let Some(body) = game_string[open + 1..].strip_suffix(')') else {
        return Err(TarokError::Configuration(format!(
            "unterminated option list in {:?}",
            game_string
        )));
    };

    for entry in body.split(',').map(str::trim).filter(|e| !e.is_empty()) {
        let Some((key, value)) = entry.split_once('=') else {
            return Err(TarokError::Configuration(format!(
                "option {:?} is not of the form key=value",
                entry
            )));
        };
        params.insert(key.trim().to_string(), ParamValue::parse(value));
    }

    Ok((game_string[..open].trim().to_string(), params))
}

/// Table configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of seats (3 or 4).
    pub num_players: usize,

    /// Deal seed. `None` draws a fresh seed for every new deal.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            num_players: MIN_PLAYERS,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Set the number of seats.
    #[must_use]
    pub fn with_num_players(mut self, num_players: usize) -> Self {
        self.num_players = num_players;
        self
    }

    /// Fix the deal seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build a configuration from named options.
    ///
    /// Unknown options are ignored.
    pub fn from_params(params: &GameParams) -> Result<Self> {
        let mut config = Self::default();

        for (key, value) in params {
            match (key.as_str(), value) {
                ("num_players", ParamValue::Int(n)) => {
                    config.num_players = usize::try_from(*n).map_err(|_| {
                        TarokError::Configuration(format!("num_players must be 3 or 4, got {}", n))
                    })?;
                }
                ("seed", ParamValue::Int(-1)) => config.seed = None,
                ("seed", ParamValue::Int(seed)) => {
                    config.seed = Some(u64::try_from(*seed).map_err(|_| {
                        TarokError::Configuration(format!("seed must be -1 or non-negative, got {}", seed))
                    })?);
                }
                ("num_players" | "seed", other) => {
                    return Err(TarokError::Configuration(format!(
                        "{} must be an integer, got {}",
                        key, other
                    )));
                }
                _ => debug!(option = %key, value = %value, "ignoring unrecognised game option"),
            }
        }

        config.validate()?;
        Ok(config)
    }

    /// Check that the configuration describes a playable table.
    pub fn validate(&self) -> Result<()> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&self.num_players) {
            return Err(TarokError::Configuration(format!(
                "num_players must be 3 or 4, got {}",
                self.num_players
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.num_players, 3);
        assert_eq!(config.seed, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = GameConfig::default().with_num_players(4).with_seed(9);
        assert_eq!(config.num_players, 4);
        assert_eq!(config.seed, Some(9));
    }

    #[test]
    fn test_validate_rejects_table_sizes() {
        for n in [0, 1, 2, 5, 8] {
            let err = GameConfig::default().with_num_players(n).validate().unwrap_err();
            assert!(matches!(err, TarokError::Configuration(_)));
        }
    }

    #[test]
    fn test_param_value_parse() {
        assert_eq!(ParamValue::parse("4"), ParamValue::Int(4));
        assert_eq!(ParamValue::parse("-1"), ParamValue::Int(-1));
        assert_eq!(ParamValue::parse("true"), ParamValue::Bool(true));
        assert_eq!(ParamValue::parse("\"abc\""), ParamValue::Str("abc".to_string()));
    }

    #[test]
    fn test_parse_game_string() {
        let (name, params) = parse_game_string("tarok(num_players=4, seed=7)").unwrap();
        assert_eq!(name, "tarok");
        assert_eq!(params.len(), 2);
        assert_eq!(params["seed"], ParamValue::Int(7));

        let (name, params) = parse_game_string("tarok").unwrap();
        assert_eq!(name, "tarok");
        assert!(params.is_empty());

        let (_, params) = parse_game_string("tarok()").unwrap();
        assert!(params.is_empty());
    }

    #[test]
    fn test_parse_game_string_malformed() {
        assert!(parse_game_string("tarok(num_players=4").is_err());
        assert!(parse_game_string("tarok(num_players)").is_err());
    }

    #[test]
    fn test_from_params() {
        let (_, params) = parse_game_string("tarok(num_players=4,seed=12,colour=red)").unwrap();
        let config = GameConfig::from_params(&params).unwrap();
        assert_eq!(config, GameConfig::default().with_num_players(4).with_seed(12));

        let (_, params) = parse_game_string("tarok(seed=-1)").unwrap();
        assert_eq!(GameConfig::from_params(&params).unwrap().seed, None);
    }

    #[test]
    fn test_from_params_rejects_bad_values() {
        for game_string in [
            "tarok(num_players=5)",
            "tarok(num_players=-3)",
            "tarok(num_players=three)",
            "tarok(seed=-2)",
            "tarok(seed=abc)",
        ] {
            let (_, params) = parse_game_string(game_string).unwrap();
            assert!(
                matches!(GameConfig::from_params(&params), Err(TarokError::Configuration(_))),
                "{} should be rejected",
                game_string
            );
        }
    }
}
