//! Transition guards.
//!
//! Every transition is labelled either with epsilon (taken without consuming
//! input) or with a predicate that must match the consumed input value.

use std::fmt;

/// Label of a transition.
///
/// `Epsilon` is a distinct case rather than a missing predicate, so a store
/// never has to guess whether "no predicate" means "always" or "never".
///
/// # Example
///
/// ```rust
/// use frontier::core::Guard;
///
/// let eps: Guard<char> = Guard::Epsilon;
/// let on_a = Guard::Predicate('a');
///
/// assert!(eps.is_epsilon());
/// assert_eq!(on_a.predicate(), Some(&'a'));
/// assert_eq!(on_a.to_string(), "'a'>");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Guard<P> {
    /// Traversed without consuming input.
    Epsilon,
    /// Traversed when the predicate matches the input value.
    Predicate(P),
}

impl<P> Guard<P> {
    /// Check whether this is the epsilon label.
    pub fn is_epsilon(&self) -> bool {
        matches!(self, Self::Epsilon)
    }

    /// The predicate, if this is not an epsilon label.
    pub fn predicate(&self) -> Option<&P> {
        match self {
            Self::Epsilon => None,
            Self::Predicate(p) => Some(p),
        }
    }
}

impl<P> From<P> for Guard<P> {
    fn from(predicate: P) -> Self {
        Self::Predicate(predicate)
    }
}

/// Renders the edge prefix used by the automaton dump: `'p'>` or `eps>`.
impl<P: fmt::Display> fmt::Display for Guard<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Epsilon => f.write_str("eps>"),
            Self::Predicate(p) => write!(f, "'{p}'>"),
        }
    }
}
