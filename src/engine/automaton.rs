//! Nondeterministic automaton with an epsilon-closed frontier.

use crate::core::{Guard, StateId};
use crate::engine::error::AutomatonError;
use crate::store::{StoreFactory, TransitionStore};
use std::collections::{BTreeSet, HashSet};
use std::hash::Hash;
use tracing::{debug, trace};

/// Set of states the simulation currently occupies.
pub type ActiveSet = BTreeSet<StateId>;

/// Predicate type stored by the factory's stores.
pub type PredicateOf<F> = <<F as StoreFactory>::Store as TransitionStore>::Predicate;

/// Input type consumed by the factory's stores.
pub type InputOf<F> = <<F as StoreFactory>::Store as TransitionStore>::Input;

/// Nondeterministic finite automaton driven one input value at a time.
///
/// States, their transition stores and their marker sets live in
/// state-indexed tables that only grow. The active set is kept closed under
/// epsilon transitions by every mutator except [`add`](Self::add).
///
/// # Example
///
/// ```rust
/// use frontier::engine::Automaton;
/// use frontier::store::SymbolFactory;
///
/// let mut nfa = Automaton::new(SymbolFactory::<char>::new());
/// let start = nfa.new_state();
/// let end = nfa.new_state();
/// nfa.new_transition(start, end, 'a').unwrap();
/// nfa.mark_state(end, "ACCEPT").unwrap();
///
/// nfa.reset();
/// assert!(nfa.step(&'a'));
/// assert!(nfa.markers().contains("ACCEPT"));
/// assert!(!nfa.step(&'b'));
/// ```
pub struct Automaton<F: StoreFactory, M> {
    factory: F,
    transitions: Vec<F::Store>,
    markers: Vec<HashSet<M>>,
    active: ActiveSet,
}

impl<F: StoreFactory, M> Automaton<F, M> {
    /// Create an automaton with no states.
    ///
    /// Every state allocated later receives a store made by `factory`.
    pub fn new(factory: F) -> Self {
        Self {
            factory,
            transitions: Vec::new(),
            markers: Vec::new(),
            active: ActiveSet::new(),
        }
    }

    pub fn factory(&self) -> &F {
        &self.factory
    }

    /// Number of allocated states.
    pub fn state_count(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    /// Iterate over every allocated state in id order.
    pub fn states(&self) -> impl Iterator<Item = StateId> {
        (0..self.state_count()).map(StateId::new)
    }

    /// Allocate the next state.
    ///
    /// The very first state becomes active as soon as it exists.
    pub fn new_state(&mut self) -> StateId {
        let state = StateId::new(self.transitions.len());
        self.transitions.push(self.factory.empty());
        self.markers.push(HashSet::new());
        if state == StateId::START {
            self.active.insert(state);
        }
        trace!(%state, "allocated state");
        state
    }

    /// Record a transition from `from` to `to`.
    ///
    /// An epsilon transition re-closes the active set straight away, so the
    /// frontier stays closed even while the automaton is being built.
    pub fn new_transition(
        &mut self,
        from: StateId,
        to: StateId,
        guard: impl Into<Guard<PredicateOf<F>>>,
    ) -> Result<(), AutomatonError> {
        self.check(from)?;
        self.check(to)?;
        let guard = guard.into();
        let epsilon = guard.is_epsilon();
        self.transitions[from.index()].put(guard, to);
        trace!(%from, %to, epsilon, "added transition");
        if epsilon {
            let mut active = std::mem::take(&mut self.active);
            self.close(&mut active);
            self.active = active;
        }
        Ok(())
    }

    /// Outgoing transitions of one state.
    pub fn transitions(&self, state: StateId) -> Option<&F::Store> {
        self.transitions.get(state.index())
    }

    /// Marker set of one state.
    pub fn markers_of(&self, state: StateId) -> Option<&HashSet<M>> {
        self.markers.get(state.index())
    }

    /// Read-only view of the current frontier.
    ///
    /// Changing the frontier goes through [`reset`](Self::reset),
    /// [`step`](Self::step) or [`set_active_states`](Self::set_active_states).
    pub fn active_states(&self) -> &ActiveSet {
        &self.active
    }

    /// Replace the frontier wholesale and close it.
    ///
    /// Nothing changes if any of the given ids is unknown.
    pub fn set_active_states<I>(&mut self, states: I) -> Result<(), AutomatonError>
    where
        I: IntoIterator<Item = StateId>,
    {
        let mut active = ActiveSet::new();
        for state in states {
            self.check(state)?;
            active.insert(state);
        }
        self.close(&mut active);
        self.active = active;
        Ok(())
    }

    /// Restart a run: the frontier becomes the closure of the start state.
    pub fn reset(&mut self) {
        let mut active = ActiveSet::new();
        if !self.is_empty() {
            active.insert(StateId::START);
            self.close(&mut active);
        }
        debug!(active = active.len(), "reset automaton");
        self.active = active;
    }

    /// Consume one input value.
    ///
    /// Every live branch advances at once. When no active state has a
    /// matching transition the step fails, `false` is returned and the
    /// frontier is left exactly as it was.
    pub fn step(&mut self, value: &InputOf<F>) -> bool {
        let mut next = ActiveSet::new();
        for from in &self.active {
            next.extend(self.transitions[from.index()].query(value));
        }
        if next.is_empty() {
            debug!(active = self.active.len(), "step rejected input");
            return false;
        }
        self.close(&mut next);
        debug!(from = self.active.len(), to = next.len(), "step advanced");
        self.active = next;
        true
    }

    /// Closure of an arbitrary set of states, leaving the automaton alone.
    pub fn epsilon_closure<I>(&self, states: I) -> Result<ActiveSet, AutomatonError>
    where
        I: IntoIterator<Item = StateId>,
    {
        let mut closed = ActiveSet::new();
        for state in states {
            self.check(state)?;
            closed.insert(state);
        }
        self.close(&mut closed);
        Ok(closed)
    }

    /// Combined view of every transition leaving the frontier.
    ///
    /// The result is a fresh store; destinations keep their ids.
    pub fn active_transitions(&self) -> F::Store {
        let mut combined = self.factory.empty();
        for state in &self.active {
            combined.merge_from(&self.transitions[state.index()], &|to: StateId| to);
        }
        combined
    }

    /// Every state, active or not, that carries at least one marker.
    pub fn marked(&self) -> BTreeSet<StateId> {
        self.markers
            .iter()
            .enumerate()
            .filter(|(_, markers)| !markers.is_empty())
            .map(|(index, _)| StateId::new(index))
            .collect()
    }

    /// Make every state non-accepting. Transitions are untouched.
    pub fn drop_markers(&mut self) {
        for markers in &mut self.markers {
            markers.clear();
        }
        debug!(states = self.markers.len(), "dropped markers");
    }

    // Expands `states` in place. Only states discovered in the previous
    // round are rescanned, so each state enters the frontier at most once.
    fn close(&self, states: &mut ActiveSet) {
        let mut suspects: Vec<StateId> = states.iter().copied().collect();
        while !suspects.is_empty() {
            let mut next = ActiveSet::new();
            for from in &suspects {
                for &to in self.transitions[from.index()].epsilon() {
                    if !states.contains(&to) {
                        next.insert(to);
                    }
                }
            }
            states.extend(next.iter().copied());
            suspects = next.into_iter().collect();
        }
    }

    fn check(&self, state: StateId) -> Result<(), AutomatonError> {
        if state.index() < self.state_count() {
            Ok(())
        } else {
            Err(AutomatonError::UnknownState {
                state,
                state_count: self.state_count(),
            })
        }
    }
}

impl<F: StoreFactory, M: Eq + Hash + Clone> Automaton<F, M> {
    /// Mark `state` as accepting under `marker`. Re-adding is a no-op.
    pub fn mark_state(&mut self, state: StateId, marker: M) -> Result<(), AutomatonError> {
        self.check(state)?;
        self.markers[state.index()].insert(marker);
        trace!(%state, "marked state");
        Ok(())
    }

    /// Union of the marker sets of every active state.
    pub fn markers(&self) -> HashSet<M> {
        self.active
            .iter()
            .flat_map(|state| self.markers[state.index()].iter().cloned())
            .collect()
    }

    /// Whether any active state carries a marker.
    pub fn is_accepting(&self) -> bool {
        self.active
            .iter()
            .any(|state| !self.markers[state.index()].is_empty())
    }

    /// Splice `other` into this automaton as a fresh block of states.
    ///
    /// State `i` of `other` becomes `offset + i` here, where `offset` is the
    /// first newly allocated id; transitions, markers and active states are
    /// copied under that shift. Returns the id `other`'s start state became,
    /// or `None` when `other` has no states (nothing changes then).
    ///
    /// The merged frontier is *not* re-closed. Callers wire the returned
    /// entry point in and then close via [`reset`](Self::reset) or
    /// [`set_active_states`](Self::set_active_states).
    pub fn add(&mut self, other: &Self) -> Option<StateId> {
        if other.is_empty() {
            return None;
        }
        let offset = self.new_state();
        for _ in 1..other.state_count() {
            self.new_state();
        }

        self.active
            .extend(other.active.iter().map(|state| state.offset(offset)));

        let relabel = move |state: StateId| state.offset(offset);
        let stores = &mut self.transitions[offset.index()..];
        for (target, store) in stores.iter_mut().zip(&other.transitions) {
            target.merge_from(store, &relabel);
        }
        let marker_sets = &mut self.markers[offset.index()..];
        for (target, markers) in marker_sets.iter_mut().zip(&other.markers) {
            target.extend(markers.iter().cloned());
        }

        debug!(%offset, states = other.state_count(), "composed automaton");
        Some(offset)
    }
}

impl<F: StoreFactory + Default, M> Default for Automaton<F, M> {
    fn default() -> Self {
        Self::new(F::default())
    }
}
