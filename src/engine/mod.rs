//! The automaton engine.
//!
//! This module owns the automaton tables and the simulation:
//! - Construction (`new_state`, `new_transition`, `mark_state`)
//! - Composition of independently built automata (`add`)
//! - Epsilon-closure and parallel stepping over the active frontier
//! - Introspection of the frontier, markers and active transitions
//! - A whole-input driver (`run`) and a debug dump (`Display`)

mod automaton;
mod display;
pub mod error;
mod run;

pub use automaton::{ActiveSet, Automaton, InputOf, PredicateOf};
pub use error::AutomatonError;
pub use run::Run;
