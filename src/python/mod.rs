//! Python bindings for the Tarok engine.
//!
//! # Quick Start
//!
//! ```python
//! import open_tarok as tarok
//!
//! game = tarok.load_game("tarok(num_players=4)")
//! state = game.new_initial_state(seed=42)
//! while state.current_game_phase() != tarok.GamePhase.FINISHED:
//!     state.apply_action(state.legal_actions()[0])
//! print(state.rewards())
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_games;

pub use py_core::*;
pub use py_games::*;

/// open_tarok: Slovenian Tarok for search and RL.
#[pymodule]
fn open_tarok(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyPlayerId>()?;
    m.add_class::<PyGamePhase>()?;
    m.add_class::<PyContract>()?;
    m.add_class::<PyTarokGame>()?;
    m.add_class::<PyTarokState>()?;
    m.add_function(wrap_pyfunction!(load_game, m)?)?;
    Ok(())
}
