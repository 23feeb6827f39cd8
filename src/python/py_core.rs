//! Core type bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{PlayerId, Turn};
use crate::error::TarokError;
use crate::games::tarok::{Contract, GamePhase};

impl From<TarokError> for PyErr {
    fn from(err: TarokError) -> Self {
        PyValueError::new_err(err.to_string())
    }
}

/// Python wrapper for PlayerId.
#[pyclass(name = "PlayerId")]
#[derive(Clone, Debug)]
pub struct PyPlayerId(pub PlayerId);

#[pymethods]
impl PyPlayerId {
    /// Create a new player ID.
    #[new]
    fn new(id: u8) -> Self {
        Self(PlayerId::new(id))
    }

    /// Get the seat index (0-based).
    fn index(&self) -> usize {
        self.0.index()
    }

    /// Get the raw ID value.
    #[getter]
    fn id(&self) -> u8 {
        self.0 .0
    }

    fn __repr__(&self) -> String {
        format!("PlayerId({})", self.0 .0)
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __hash__(&self) -> u64 {
        u64::from(self.0 .0)
    }
}

/// Seat index for Python, with -1 for chance and -4 for terminal.
pub(crate) fn turn_to_index(turn: Turn) -> i64 {
    match turn {
        Turn::Chance => -1,
        Turn::Terminal => -4,
        Turn::Player(player) => i64::from(player.0),
    }
}

/// Round phase, comparable by value from Python.
#[pyclass(name = "GamePhase", eq, eq_int)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PyGamePhase {
    #[pyo3(name = "DEALING")]
    Dealing,
    #[pyo3(name = "BIDDING")]
    Bidding,
    #[pyo3(name = "KING_CALLING")]
    KingCalling,
    #[pyo3(name = "TALON_EXCHANGE")]
    TalonExchange,
    #[pyo3(name = "TRICKS_PLAYING")]
    TricksPlaying,
    #[pyo3(name = "FINISHED")]
    Finished,
}

impl From<GamePhase> for PyGamePhase {
    fn from(phase: GamePhase) -> Self {
        match phase {
            GamePhase::Dealing => Self::Dealing,
            GamePhase::Bidding => Self::Bidding,
            GamePhase::KingCalling => Self::KingCalling,
            GamePhase::TalonExchange => Self::TalonExchange,
            GamePhase::TricksPlaying => Self::TricksPlaying,
            GamePhase::Finished => Self::Finished,
        }
    }
}

/// Contract, comparable by value from Python.
#[pyclass(name = "Contract", eq, eq_int)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PyContract {
    #[pyo3(name = "KLOP")]
    Klop,
    #[pyo3(name = "THREE")]
    Three,
    #[pyo3(name = "TWO")]
    Two,
    #[pyo3(name = "ONE")]
    One,
    #[pyo3(name = "SOLO_THREE")]
    SoloThree,
    #[pyo3(name = "SOLO_TWO")]
    SoloTwo,
    #[pyo3(name = "SOLO_ONE")]
    SoloOne,
    #[pyo3(name = "BEGGAR")]
    Beggar,
    #[pyo3(name = "SOLO_WITHOUT")]
    SoloWithout,
    #[pyo3(name = "OPEN_BEGGAR")]
    OpenBeggar,
    #[pyo3(name = "COLOUR_VALAT_WITHOUT")]
    ColourValatWithout,
    #[pyo3(name = "VALAT_WITHOUT")]
    ValatWithout,
}

impl From<Contract> for PyContract {
    fn from(contract: Contract) -> Self {
        match contract {
            Contract::Klop => Self::Klop,
            Contract::Three => Self::Three,
            Contract::Two => Self::Two,
            Contract::One => Self::One,
            Contract::SoloThree => Self::SoloThree,
            Contract::SoloTwo => Self::SoloTwo,
            Contract::SoloOne => Self::SoloOne,
            Contract::Beggar => Self::Beggar,
            Contract::SoloWithout => Self::SoloWithout,
            Contract::OpenBeggar => Self::OpenBeggar,
            Contract::ColourValatWithout => Self::ColourValatWithout,
            Contract::ValatWithout => Self::ValatWithout,
        }
    }
}

impl From<PyContract> for Contract {
    fn from(contract: PyContract) -> Self {
        match contract {
            PyContract::Klop => Self::Klop,
            PyContract::Three => Self::Three,
            PyContract::Two => Self::Two,
            PyContract::One => Self::One,
            PyContract::SoloThree => Self::SoloThree,
            PyContract::SoloTwo => Self::SoloTwo,
            PyContract::SoloOne => Self::SoloOne,
            PyContract::Beggar => Self::Beggar,
            PyContract::SoloWithout => Self::SoloWithout,
            PyContract::OpenBeggar => Self::OpenBeggar,
            PyContract::ColourValatWithout => Self::ColourValatWithout,
            PyContract::ValatWithout => Self::ValatWithout,
        }
    }
}

#[pymethods]
impl PyContract {
    /// Bid action that selects this contract.
    fn bid_action(&self) -> u8 {
        Contract::from(*self).bid_action()
    }

    fn score(&self) -> i32 {
        Contract::from(*self).score()
    }
}
