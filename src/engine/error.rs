//! Automaton error types.

use crate::core::StateId;
use thiserror::Error;

/// Errors raised by the automaton's construction and frontier APIs.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AutomatonError {
    /// A state id was used that this automaton never allocated.
    #[error("Unknown state {state}: automaton has {state_count} states")]
    UnknownState { state: StateId, state_count: usize },
}
