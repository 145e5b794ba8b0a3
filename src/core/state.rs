//! State identity for automaton states.
//!
//! States are small dense integers handed out by the automaton in creation
//! order. They carry no data of their own; transitions and markers live in
//! tables indexed by the id.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Handle of a single automaton state.
///
/// Ids are assigned monotonically starting at zero and are never reused.
/// State `0` is always the start state of a non-empty automaton.
///
/// # Example
///
/// ```rust
/// use frontier::core::StateId;
///
/// let start = StateId::START;
/// assert_eq!(start.index(), 0);
/// assert_eq!(start.offset(StateId::new(3)), StateId::new(3));
/// assert_eq!(StateId::new(7).to_string(), "#7");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateId(usize);

impl StateId {
    /// The start state of every non-empty automaton.
    pub const START: StateId = StateId(0);

    /// Wrap a raw index.
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Raw index into the automaton's state tables.
    pub const fn index(self) -> usize {
        self.0
    }

    /// Shift this id by the first id of another block.
    ///
    /// Used when splicing one automaton into another: id `i` of the spliced
    /// automaton becomes `offset + i` in the host.
    pub const fn offset(self, by: StateId) -> Self {
        Self(self.0 + by.0)
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
