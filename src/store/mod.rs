//! Per-state transition stores.
//!
//! The automaton never looks inside a predicate. Each state owns one store
//! that maps stored guards to destination states and answers point queries
//! against an input value. The store representation is injected through a
//! [`StoreFactory`], which keeps the engine agnostic of how predicates are
//! represented or matched.
//!
//! Three stores ship with the crate:
//! - [`SymbolStore`]: predicates are exact input values
//! - [`RangeStore`]: predicates are inclusive ranges over an ordered input
//! - [`MatcherStore`]: predicates are named closures

mod matcher;
mod range;
mod symbol;

pub use matcher::MatcherStore;
pub use range::{RangeStore, SymbolRange};
pub use symbol::SymbolStore;

use crate::core::{Guard, StateId};
use std::fmt;
use std::marker::PhantomData;

/// Multimap from guards to destination states, queryable by input value.
///
/// Implementations must keep insertion order for [`entries`](Self::entries)
/// so that automaton dumps are deterministic.
pub trait TransitionStore {
    /// Stored predicate type.
    type Predicate;

    /// Input value type predicates are matched against.
    type Input: ?Sized;

    /// Record an edge to `to` labelled with `guard`.
    fn put(&mut self, guard: Guard<Self::Predicate>, to: StateId);

    /// Destinations of every predicate edge matching `value`.
    ///
    /// Epsilon edges are never returned here. Duplicates are allowed.
    fn query(&self, value: &Self::Input) -> Vec<StateId>;

    /// Destinations of every epsilon edge.
    fn epsilon(&self) -> &[StateId];

    /// Copy every edge of `other` into `self`, relabelling destinations.
    fn merge_from(&mut self, other: &Self, relabel: &dyn Fn(StateId) -> StateId);

    /// Every stored edge in insertion order.
    fn entries(&self) -> Vec<(&Guard<Self::Predicate>, StateId)>;

    /// Number of stored edges, epsilon included.
    fn len(&self) -> usize {
        self.entries().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Strategy producing empty stores of one kind.
pub trait StoreFactory {
    type Store: TransitionStore;

    /// A fresh store with no edges.
    fn empty(&self) -> Self::Store;
}

/// Factory for any store with a `Default` empty value.
///
/// # Example
///
/// ```rust
/// use frontier::store::{DefaultFactory, StoreFactory, SymbolStore, TransitionStore};
///
/// let factory = DefaultFactory::<SymbolStore<char>>::new();
/// assert!(factory.empty().is_empty());
/// ```
pub struct DefaultFactory<S> {
    _phantom: PhantomData<fn() -> S>,
}

impl<S> DefaultFactory<S> {
    pub fn new() -> Self {
        Self {
            _phantom: PhantomData,
        }
    }
}

impl<S> Default for DefaultFactory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Clone for DefaultFactory<S> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<S> Copy for DefaultFactory<S> {}

impl<S> fmt::Debug for DefaultFactory<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DefaultFactory")
    }
}

impl<S: TransitionStore + Default> StoreFactory for DefaultFactory<S> {
    type Store = S;

    fn empty(&self) -> S {
        S::default()
    }
}

/// Factory for [`SymbolStore`].
pub type SymbolFactory<T> = DefaultFactory<SymbolStore<T>>;

/// Factory for [`RangeStore`].
pub type RangeFactory<T> = DefaultFactory<RangeStore<T>>;

/// Factory for [`MatcherStore`].
pub type MatcherFactory<T> = DefaultFactory<MatcherStore<T>>;
