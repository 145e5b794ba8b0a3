//! Store whose predicates are closures.

use super::TransitionStore;
use crate::core::{Guard, Matcher, StateId};

/// Transition store evaluating a [`Matcher`] per edge.
pub struct MatcherStore<T> {
    edges: Vec<(Guard<Matcher<T>>, StateId)>,
    epsilon: Vec<StateId>,
}

impl<T> MatcherStore<T> {
    pub fn new() -> Self {
        Self {
            edges: Vec::new(),
            epsilon: Vec::new(),
        }
    }
}

impl<T> Default for MatcherStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for MatcherStore<T> {
    fn clone(&self) -> Self {
        Self {
            edges: self.edges.clone(),
            epsilon: self.epsilon.clone(),
        }
    }
}

impl<T> std::fmt::Debug for MatcherStore<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MatcherStore")
            .field("edges", &self.edges)
            .finish()
    }
}

impl<T> TransitionStore for MatcherStore<T> {
    type Predicate = Matcher<T>;
    type Input = T;

    fn put(&mut self, guard: Guard<Matcher<T>>, to: StateId) {
        if guard.is_epsilon() {
            self.epsilon.push(to);
        }
        self.edges.push((guard, to));
    }

    fn query(&self, value: &T) -> Vec<StateId> {
        self.edges
            .iter()
            .filter_map(|(guard, to)| match guard {
                Guard::Predicate(matcher) if matcher.check(value) => Some(*to),
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

    fn entries(&self) -> Vec<(&Guard<Matcher<T>>, StateId)> {
        self.edges.iter().map(|(guard, to)| (guard, *to)).collect()
    }

    fn len(&self) -> usize {
        self.edges.len()
    }
}
