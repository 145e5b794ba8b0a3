//! Builder for constructing automata from a declared table.

use crate::builder::error::BuildError;
use crate::core::{Guard, StateId};
use crate::engine::{Automaton, PredicateOf};
use crate::store::StoreFactory;
use std::hash::Hash;

/// Builder declaring states, transitions and markers with a fluent API.
///
/// Nothing is validated until [`build`](Self::build); declarations may refer
/// to states by raw index in any order.
pub struct AutomatonBuilder<F: StoreFactory, M> {
    factory: F,
    states: usize,
    transitions: Vec<(StateId, StateId, Guard<PredicateOf<F>>)>,
    markers: Vec<(StateId, M)>,
}

impl<F: StoreFactory, M: Eq + Hash + Clone> AutomatonBuilder<F, M> {
    /// Create a new builder over the given store factory.
    pub fn new(factory: F) -> Self {
        Self {
            factory,
            states: 0,
            transitions: Vec::new(),
            markers: Vec::new(),
        }
    }

    /// Set the number of states to allocate.
    pub fn states(mut self, count: usize) -> Self {
        self.states = count;
        self
    }

    /// Add a predicate transition.
    pub fn transition(
        mut self,
        from: usize,
        to: usize,
        predicate: impl Into<Guard<PredicateOf<F>>>,
    ) -> Self {
        self.transitions
            .push((StateId::new(from), StateId::new(to), predicate.into()));
        self
    }

    /// Add an epsilon transition.
    pub fn epsilon(mut self, from: usize, to: usize) -> Self {
        self.transitions
            .push((StateId::new(from), StateId::new(to), Guard::Epsilon));
        self
    }

    /// Mark a state as accepting.
    pub fn mark(mut self, state: usize, marker: M) -> Self {
        self.markers.push((StateId::new(state), marker));
        self
    }

    /// Build the automaton, reset to its start frontier.
    /// Returns an error if any declaration names a state beyond the count.
    pub fn build(self) -> Result<Automaton<F, M>, BuildError> {
        let mut automaton = Automaton::new(self.factory);
        for _ in 0..self.states {
            automaton.new_state();
        }
        for (index, (from, to, guard)) in self.transitions.into_iter().enumerate() {
            automaton
                .new_transition(from, to, guard)
                .map_err(|source| BuildError::InvalidTransition { index, source })?;
        }
        for (index, (state, marker)) in self.markers.into_iter().enumerate() {
            automaton
                .mark_state(state, marker)
                .map_err(|source| BuildError::InvalidMarker { index, source })?;
        }
        automaton.reset();
        Ok(automaton)
    }
}

impl<F: StoreFactory + Default, M: Eq + Hash + Clone> Default for AutomatonBuilder<F, M> {
    fn default() -> Self {
        Self::new(F::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::AutomatonError;
    use crate::store::SymbolFactory;
    use std::collections::HashSet;

    type Builder = AutomatonBuilder<SymbolFactory<char>, &'static str>;

    #[test]
    fn empty_builder_builds_empty_automaton() {
        let nfa = Builder::default().build().unwrap();

        assert!(nfa.is_empty());
        assert!(nfa.active_states().is_empty());
    }

    #[test]
    fn fluent_api_builds_automaton() {
        let mut nfa = Builder::default()
            .states(3)
            .transition(0, 1, 'a')
            .epsilon(1, 2)
            .mark(2, "DONE")
            .build()
            .unwrap();

        assert_eq!(nfa.state_count(), 3);
        assert!(nfa.step(&'a'));
        assert_eq!(nfa.markers(), HashSet::from(["DONE"]));
    }

    #[test]
    fn built_automaton_starts_closed() {
        let nfa = Builder::default().states(2).epsilon(0, 1).build().unwrap();

        assert_eq!(nfa.active_states().len(), 2);
    }

    #[test]
    fn builder_validates_transition_states() {
        let result = Builder::default()
            .states(2)
            .transition(0, 1, 'a')
            .transition(1, 5, 'b')
            .build();

        assert!(matches!(
            result,
            Err(BuildError::InvalidTransition {
                index: 1,
                source: AutomatonError::UnknownState { state_count: 2, .. }
            })
        ));
    }

    #[test]
    fn builder_validates_marker_states() {
        let result = Builder::default().states(1).mark(3, "X").build();

        assert!(matches!(
            result,
            Err(BuildError::InvalidMarker { index: 0, .. })
        ));
    }
}
