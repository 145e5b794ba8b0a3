//! Store whose predicates are inclusive ranges over an ordered input.

use super::TransitionStore;
use crate::core::{Guard, StateId};
use std::fmt;

/// Inclusive range `lo..=hi` of input values, i.e. a character class.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SymbolRange<T> {
    pub lo: T,
    pub hi: T,
}

impl<T: Ord> SymbolRange<T> {
    /// Range from `lo` to `hi`. Bounds given in the wrong order are swapped.
    pub fn new(lo: T, hi: T) -> Self {
        if lo <= hi {
            Self { lo, hi }
        } else {
            Self { lo: hi, hi: lo }
        }
    }

    pub fn contains(&self, value: &T) -> bool {
        self.lo <= *value && *value <= self.hi
    }
}

impl<T: Ord + Clone> SymbolRange<T> {
    /// Range holding exactly one value.
    pub fn single(value: T) -> Self {
        Self {
            lo: value.clone(),
            hi: value,
        }
    }
}

impl<T: fmt::Display + PartialEq> fmt::Display for SymbolRange<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.lo == self.hi {
            write!(f, "{}", self.lo)
        } else {
            write!(f, "{}-{}", self.lo, self.hi)
        }
    }
}

/// Transition store matching input against ranges.
///
/// Queries scan every stored range; out-degree per state is expected to be
/// small.
///
/// # Example
///
/// ```rust
/// use frontier::core::{Guard, StateId};
/// use frontier::store::{RangeStore, SymbolRange, TransitionStore};
///
/// let mut store = RangeStore::new();
/// store.put(Guard::Predicate(SymbolRange::new('a', 'z')), StateId::new(1));
/// store.put(Guard::Predicate(SymbolRange::new('0', '9')), StateId::new(2));
///
/// assert_eq!(store.query(&'q'), vec![StateId::new(1)]);
/// assert_eq!(store.query(&'5'), vec![StateId::new(2)]);
/// assert!(store.query(&'!').is_empty());
/// ```
#[derive(Clone, Debug)]
pub struct RangeStore<T> {
    edges: Vec<(Guard<SymbolRange<T>>, StateId)>,
    epsilon: Vec<StateId>,
}

impl<T> RangeStore<T> {
    pub fn new() -> Self {
        Self {
            edges: Vec::new(),
            epsilon: Vec::new(),
        }
    }
}

impl<T> Default for RangeStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord + Clone> TransitionStore for RangeStore<T> {
    type Predicate = SymbolRange<T>;
    type Input = T;

    fn put(&mut self, guard: Guard<SymbolRange<T>>, to: StateId) {
        if guard.is_epsilon() {
            self.epsilon.push(to);
        }
        self.edges.push((guard, to));
    }

    fn query(&self, value: &T) -> Vec<StateId> {
        self.edges
            .iter()
            .filter_map(|(guard, to)| match guard {
                Guard::Predicate(range) if range.contains(value) => Some(*to),
                _ => None,
            })
            .collect()
    }

    fn epsilon(&self) -> &[StateId] {
        &self.epsilon
    }

    fn merge_from(&mut self, other: &Self, relabel: &dyn Fn(StateId) -> StateId) {
        for (guard, to) in &other.edges {
            self.put(guard.clone(), relabel(*to));
        }
    }

    fn entries(&self) -> Vec<(&Guard<SymbolRange<T>>, StateId)> {
        self.edges.iter().map(|(guard, to)| (guard, *to)).collect()
    }

    fn len(&self) -> usize {
        self.edges.len()
    }
}
