//! Frontier: a nondeterministic finite automaton runtime
//!
//! Frontier stores states, predicate-guarded transitions and accept markers,
//! and simulates the automaton one input value at a time over a *set* of
//! live states. The set is kept closed under epsilon transitions, all
//! branches advance in parallel, and nothing is ever backtracked or
//! determinized.
//!
//! # Core Concepts
//!
//! - **States**: dense ids handed out by the automaton (`StateId`)
//! - **Guards**: epsilon or a predicate stored in a per-state `TransitionStore`
//! - **Markers**: tags attached to accepting states
//! - **Frontier**: the epsilon-closed set of active states
//! - **Composition**: splicing one automaton into another with `add`
//!
//! # Example
//!
//! ```rust
//! use frontier::core::Guard;
//! use frontier::engine::Automaton;
//! use frontier::store::SymbolFactory;
//! use std::collections::HashSet;
//!
//! // Fragment accepting "b", built independently.
//! let mut tail = Automaton::new(SymbolFactory::<char>::new());
//! let t0 = tail.new_state();
//! let t1 = tail.new_state();
//! tail.new_transition(t0, t1, 'b').unwrap();
//! tail.mark_state(t1, "AB").unwrap();
//!
//! // "a" followed by the spliced fragment.
//! let mut nfa = Automaton::new(SymbolFactory::<char>::new());
//! let s0 = nfa.new_state();
//! let s1 = nfa.new_state();
//! nfa.new_transition(s0, s1, 'a').unwrap();
//! let entry = nfa.add(&tail).unwrap();
//! nfa.new_transition(s1, entry, Guard::Epsilon).unwrap();
//!
//! nfa.reset();
//! assert!(nfa.step(&'a'));
//! assert!(nfa.step(&'b'));
//! assert_eq!(nfa.markers(), HashSet::from(["AB"]));
//! ```

pub mod builder;
pub mod checkpoint;
pub mod core;
pub mod engine;
pub mod store;

// Re-export commonly used types
pub use crate::core::{Guard, Matcher, StateId};
pub use builder::{AutomatonBuilder, BuildError};
pub use checkpoint::{Checkpoint, CheckpointError};
pub use engine::{ActiveSet, Automaton, AutomatonError, Run};
pub use store::{StoreFactory, TransitionStore};
