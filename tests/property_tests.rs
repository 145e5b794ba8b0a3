//! Property-based tests for closure, stepping and composition.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated automata.

use frontier::core::{Guard, StateId};
use frontier::engine::Automaton;
use frontier::store::{SymbolFactory, TransitionStore};
use frontier::AutomatonBuilder;
use proptest::prelude::*;

type Nfa = Automaton<SymbolFactory<char>, u8>;

#[derive(Clone, Debug)]
struct Blueprint {
    states: usize,
    // `None` stands for an epsilon edge.
    edges: Vec<(usize, usize, Option<char>)>,
    marks: Vec<(usize, u8)>,
}

impl Blueprint {
    fn build(&self) -> Nfa {
        let mut builder =
            AutomatonBuilder::<SymbolFactory<char>, u8>::default().states(self.states);
        for &(from, to, symbol) in &self.edges {
            builder = match symbol {
                Some(c) => builder.transition(from, to, c),
                None => builder.epsilon(from, to),
            };
        }
        for &(state, marker) in &self.marks {
            builder = builder.mark(state, marker);
        }
        builder.build().unwrap()
    }
}

prop_compose! {
    fn arbitrary_symbol()(variant in 0..3u8) -> char {
        (b'a' + variant) as char
    }
}

prop_compose! {
    fn arbitrary_blueprint()(states in 1..8usize)(
        edges in prop::collection::vec(
            (0..states, 0..states, prop::option::weighted(0.7, arbitrary_symbol())),
            0..24,
        ),
        marks in prop::collection::vec((0..states, 0..4u8), 0..4),
        states in Just(states),
    ) -> Blueprint {
        Blueprint { states, edges, marks }
    }
}

fn is_closed(nfa: &Nfa) -> bool {
    let active = nfa.active_states();
    &nfa.epsilon_closure(active.iter().copied()).unwrap() == active
}

proptest! {
    #[test]
    fn closure_is_idempotent(blueprint in arbitrary_blueprint(), seed in 0..8usize) {
        let nfa = blueprint.build();
        let start = StateId::new(seed % blueprint.states);

        let once = nfa.epsilon_closure([start]).unwrap();
        let twice = nfa.epsilon_closure(once.iter().copied()).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn closure_contains_its_input(blueprint in arbitrary_blueprint(), seed in 0..8usize) {
        let nfa = blueprint.build();
        let start = StateId::new(seed % blueprint.states);

        prop_assert!(nfa.epsilon_closure([start]).unwrap().contains(&start));
    }

    #[test]
    fn closure_is_closed_under_epsilon_edges(blueprint in arbitrary_blueprint()) {
        let nfa = blueprint.build();
        let closed = nfa.epsilon_closure(nfa.states()).unwrap();
        prop_assert_eq!(closed.len(), blueprint.states);

        let mut nfa = blueprint.build();
        nfa.reset();
        for state in nfa.active_states() {
            for to in nfa.transitions(*state).unwrap().epsilon() {
                prop_assert!(nfa.active_states().contains(to));
            }
        }
    }

    #[test]
    fn reset_starts_from_closed_start(blueprint in arbitrary_blueprint()) {
        let mut nfa = blueprint.build();
        nfa.reset();

        prop_assert!(nfa.active_states().contains(&StateId::START));
        prop_assert!(is_closed(&nfa));
    }

    #[test]
    fn steps_keep_frontier_closed(
        blueprint in arbitrary_blueprint(),
        input in prop::collection::vec(arbitrary_symbol(), 0..10),
    ) {
        let mut nfa = blueprint.build();
        nfa.reset();

        for symbol in input {
            let before = nfa.active_states().clone();
            if nfa.step(&symbol) {
                prop_assert!(!nfa.active_states().is_empty());
            } else {
                prop_assert_eq!(nfa.active_states(), &before);
            }
            prop_assert!(is_closed(&nfa));
        }
    }

    #[test]
    fn run_matches_manual_stepping(
        blueprint in arbitrary_blueprint(),
        input in prop::collection::vec(arbitrary_symbol(), 0..10),
    ) {
        let mut manual = blueprint.build();
        manual.reset();
        let mut consumed = 0;
        for symbol in &input {
            if !manual.step(symbol) {
                break;
            }
            consumed += 1;
        }

        let mut driven = blueprint.build();
        let run = driven.run(input.iter());

        prop_assert_eq!(run.consumed, consumed);
        prop_assert_eq!(run.completed, consumed == input.len());
        prop_assert_eq!(run.markers, manual.markers());
        prop_assert_eq!(driven.active_states(), manual.active_states());
    }

    #[test]
    fn add_preserves_structure(host in arbitrary_blueprint(), part in arbitrary_blueprint()) {
        let mut nfa = host.build();
        let other = part.build();

        let offset = nfa.add(&other).unwrap();
        prop_assert_eq!(offset, StateId::new(host.states));
        prop_assert_eq!(nfa.state_count(), host.states + part.states);

        for state in other.states() {
            let expected: Vec<_> = other
                .transitions(state)
                .unwrap()
                .entries()
                .into_iter()
                .map(|(guard, to)| (guard.clone(), to.offset(offset)))
                .collect();
            let actual: Vec<_> = nfa
                .transitions(state.offset(offset))
                .unwrap()
                .entries()
                .into_iter()
                .map(|(guard, to)| (guard.clone(), to))
                .collect();
            prop_assert_eq!(actual, expected);
            prop_assert_eq!(
                nfa.markers_of(state.offset(offset)),
                other.markers_of(state)
            );
        }

        for state in nfa.states().take(host.states) {
            prop_assert_eq!(
                nfa.transitions(state).unwrap().len(),
                host.build().transitions(state).unwrap().len()
            );
        }
    }

    #[test]
    fn add_copies_shifted_frontier(host in arbitrary_blueprint(), part in arbitrary_blueprint()) {
        let mut nfa = host.build();
        let other = part.build();
        let before = nfa.active_states().clone();

        let offset = nfa.add(&other).unwrap();

        let mut expected = before;
        expected.extend(other.active_states().iter().map(|s| s.offset(offset)));
        prop_assert_eq!(nfa.active_states(), &expected);
    }

    #[test]
    fn add_empty_is_identity(host in arbitrary_blueprint()) {
        let mut nfa = host.build();
        let dump = nfa.to_string();

        prop_assert_eq!(nfa.add(&Nfa::default()), None);
        prop_assert_eq!(nfa.state_count(), host.states);
        prop_assert_eq!(nfa.to_string(), dump);
    }

    #[test]
    fn drop_markers_silences_every_frontier(
        blueprint in arbitrary_blueprint(),
        input in prop::collection::vec(arbitrary_symbol(), 0..6),
    ) {
        let mut nfa = blueprint.build();
        nfa.drop_markers();
        prop_assert!(nfa.marked().is_empty());

        nfa.reset();
        prop_assert!(nfa.markers().is_empty());
        for symbol in input {
            nfa.step(&symbol);
            prop_assert!(nfa.markers().is_empty());
        }
    }

    #[test]
    fn active_transitions_answer_like_stepping(
        blueprint in arbitrary_blueprint(),
        symbol in arbitrary_symbol(),
    ) {
        let mut nfa = blueprint.build();
        nfa.reset();
        let combined = nfa.active_transitions();
        let predicted = nfa.epsilon_closure(combined.query(&symbol)).unwrap();

        if nfa.step(&symbol) {
            prop_assert_eq!(nfa.active_states(), &predicted);
        } else {
            prop_assert!(predicted.is_empty());
        }
    }

    #[test]
    fn checkpoint_roundtrip_restores_frontier(
        blueprint in arbitrary_blueprint(),
        input in prop::collection::vec(arbitrary_symbol(), 0..6),
    ) {
        let mut nfa = blueprint.build();
        nfa.run(input.iter());
        let bytes = nfa.checkpoint().to_binary().unwrap();

        let mut resumed = blueprint.build();
        let checkpoint = frontier::Checkpoint::from_binary(&bytes).unwrap();
        resumed.restore(&checkpoint).unwrap();
        prop_assert_eq!(resumed.active_states(), nfa.active_states());
    }

    #[test]
    fn epsilon_guard_is_never_queried(
        blueprint in arbitrary_blueprint(),
        symbol in arbitrary_symbol(),
    ) {
        let nfa = blueprint.build();
        for state in nfa.states() {
            let store = nfa.transitions(state).unwrap();
            let by_symbol = store
                .entries()
                .into_iter()
                .filter(|(guard, _)| **guard == Guard::Predicate(symbol))
                .count();
            prop_assert_eq!(store.query(&symbol).len(), by_symbol);
        }
    }
}
