//! Builder API for declaring automata in one expression.
//!
//! The incremental construction API on [`Automaton`](crate::engine::Automaton)
//! is what a pattern compiler drives. This module adds a declarative
//! alternative for fixed tables, tests and small hand-written automata.

pub mod error;
pub mod machine;

pub use error::BuildError;
pub use machine::AutomatonBuilder;

use crate::engine::Automaton;
use crate::store::SymbolFactory;
use std::hash::Hash;

/// Build an automaton accepting exactly the given sequence of symbols.
///
/// The sequence `s1..sn` becomes the chain `0 -s1-> 1 ... -sn-> n` with
/// state `n` marked by `marker`. Such chains are the usual leaves folded
/// into larger automata with [`Automaton::add`].
///
/// # Example
///
/// ```
/// use frontier::builder::literal;
///
/// let mut word = literal("if".chars(), "KEYWORD").unwrap();
/// assert!(word.accepts("if".chars()));
/// assert!(!word.accepts("i".chars()));
/// ```
pub fn literal<T, M, I>(symbols: I, marker: M) -> Result<Automaton<SymbolFactory<T>, M>, BuildError>
where
    T: Eq + Hash + Clone,
    M: Eq + Hash + Clone,
    I: IntoIterator<Item = T>,
{
    let symbols: Vec<T> = symbols.into_iter().collect();
    let last = symbols.len();
    let mut builder = AutomatonBuilder::new(SymbolFactory::<T>::new())
        .states(last + 1)
        .mark(last, marker);
    for (index, symbol) in symbols.into_iter().enumerate() {
        builder = builder.transition(index, index + 1, symbol);
    }
    builder.build()
}
