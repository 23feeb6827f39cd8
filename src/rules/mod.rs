//! Solver-facing interface.
//!
//! Search and learning code (tree enumeration, random playouts, CFR-style
//! solvers) talks to the game only through `ExtensiveFormState`, and never
//! interprets Tarok concepts directly.

pub mod engine;

pub use engine::ExtensiveFormState;
