//! Whole-input driver on top of single steps.

use crate::engine::{Automaton, InputOf};
use crate::store::StoreFactory;
use std::borrow::Borrow;
use std::collections::HashSet;
use std::hash::Hash;
use tracing::debug;

/// Outcome of feeding an input sequence from a fresh start.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Run<M: Eq + Hash> {
    /// Number of input values consumed by successful steps.
    pub consumed: usize,
    /// Whether every input value was consumed.
    pub completed: bool,
    /// Markers of the frontier the run stopped on.
    pub markers: HashSet<M>,
}

impl<M: Eq + Hash> Run<M> {
    /// Completed and ended on an accepting frontier.
    pub fn is_match(&self) -> bool {
        self.completed && !self.markers.is_empty()
    }
}

impl<F: StoreFactory, M: Eq + Hash + Clone> Automaton<F, M> {
    /// Reset, then step through `inputs` until one is rejected.
    ///
    /// The automaton is left on the frontier the run stopped on.
    ///
    /// # Example
    ///
    /// ```rust
    /// use frontier::engine::Automaton;
    /// use frontier::store::SymbolFactory;
    ///
    /// // a b*
    /// let mut nfa = Automaton::new(SymbolFactory::<char>::new());
    /// let s0 = nfa.new_state();
    /// let s1 = nfa.new_state();
    /// nfa.new_transition(s0, s1, 'a').unwrap();
    /// nfa.new_transition(s1, s1, 'b').unwrap();
    /// nfa.mark_state(s1, "AB").unwrap();
    ///
    /// let run = nfa.run("abbc".chars());
    /// assert_eq!(run.consumed, 3);
    /// assert!(!run.completed);
    ///
    /// assert!(nfa.accepts("abb".chars()));
    /// assert!(!nfa.accepts("b".chars()));
    /// ```
    pub fn run<I>(&mut self, inputs: I) -> Run<M>
    where
        I: IntoIterator,
        I::Item: Borrow<InputOf<F>>,
    {
        self.reset();
        let mut consumed = 0;
        let mut completed = true;
        for input in inputs {
            if !self.step(input.borrow()) {
                completed = false;
                break;
            }
            consumed += 1;
        }
        debug!(consumed, completed, "run finished");
        Run {
            consumed,
            completed,
            markers: self.markers(),
        }
    }

    /// Whether the whole input is consumed and ends on an accepting frontier.
    pub fn accepts<I>(&mut self, inputs: I) -> bool
    where
        I: IntoIterator,
        I::Item: Borrow<InputOf<F>>,
    {
        self.run(inputs).is_match()
    }
}
