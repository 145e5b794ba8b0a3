//! Build errors for the automaton builder.

use crate::engine::AutomatonError;
use thiserror::Error;

/// Errors that can occur when building an automaton from a declaration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Transition {index} references an undeclared state: {source}")]
    InvalidTransition {
        index: usize,
        #[source]
        source: AutomatonError,
    },

    #[error("Marker {index} references an undeclared state: {source}")]
    InvalidMarker {
        index: usize,
        #[source]
        source: AutomatonError,
    },
}
