//! Store whose predicates are exact input values.

use super::TransitionStore;
use crate::core::{Guard, StateId};
use std::collections::HashMap;
use std::hash::Hash;

/// Transition store matching input by equality.
///
/// Keeps an insertion-ordered edge list for enumeration and a hash index
/// for point queries.
///
/// # Example
///
/// ```rust
/// use frontier::core::{Guard, StateId};
/// use frontier::store::{SymbolStore, TransitionStore};
///
/// let mut store = SymbolStore::new();
/// store.put(Guard::Predicate('a'), StateId::new(1));
/// store.put(Guard::Predicate('a'), StateId::new(2));
/// store.put(Guard::Epsilon, StateId::new(3));
///
/// assert_eq!(store.query(&'a'), vec![StateId::new(1), StateId::new(2)]);
/// assert!(store.query(&'b').is_empty());
/// assert_eq!(store.epsilon(), &[StateId::new(3)]);
/// ```
#[derive(Clone, Debug)]
pub struct SymbolStore<T> {
    edges: Vec<(Guard<T>, StateId)>,
    index: HashMap<T, Vec<StateId>>,
    epsilon: Vec<StateId>,
}

impl<T> SymbolStore<T> {
    pub fn new() -> Self {
        Self {
            edges: Vec::new(),
            index: HashMap::new(),
            epsilon: Vec::new(),
        }
    }
}

impl<T> Default for SymbolStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Eq + Hash + Clone> TransitionStore for SymbolStore<T> {
    type Predicate = T;
    type Input = T;

    fn put(&mut self, guard: Guard<T>, to: StateId) {
        match &guard {
            Guard::Epsilon => self.epsilon.push(to),
            Guard::Predicate(symbol) => self.index.entry(symbol.clone()).or_default().push(to),
        }
        self.edges.push((guard, to));
    }

    fn query(&self, value: &T) -> Vec<StateId> {
        self.index.get(value).cloned().unwrap_or_default()
    }

    fn epsilon(&self) -> &[StateId] {
        &self.epsilon
    }

    fn merge_from(&mut self, other: &Self, relabel: &dyn Fn(StateId) -> StateId) {
        for (guard, to) in &other.edges {
            self.put(guard.clone(), relabel(*to));
        }
    }

    fn entries(&self) -> Vec<(&Guard<T>, StateId)> {
        self.edges.iter().map(|(guard, to)| (guard, *to)).collect()
    }

    fn len(&self) -> usize {
        self.edges.len()
    }
}
