//! Core value types of the automaton.
//!
//! This module contains the small, self-contained building blocks:
//! - State identity via `StateId`
//! - Transition labels via `Guard` (epsilon or predicate)
//! - Closure predicates via `Matcher`
//!
//! Nothing in this module owns automaton structure; that lives in
//! [`crate::engine`].

mod guard;
mod matcher;
mod state;

pub use guard::Guard;
pub use matcher::Matcher;
pub use state::StateId;
