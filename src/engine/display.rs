//! Textual dump of an automaton for debugging.
//!
//! One line per state in id order:
//!
//! ```text
//! #<id>[:<marker>[,<marker>]*]:[ '<predicate>'><dest>| eps><dest>]*
//! ```
//!
//! Markers are sorted by their rendering so the dump is stable across runs;
//! edges appear in insertion order.

use crate::engine::Automaton;
use crate::store::{StoreFactory, TransitionStore};
use std::fmt;

impl<F, M> fmt::Display for Automaton<F, M>
where
    F: StoreFactory,
    <F::Store as TransitionStore>::Predicate: fmt::Display,
    M: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for state in self.states() {
            write!(f, "#{}", state.index())?;

            if let Some(markers) = self.markers_of(state) {
                let mut rendered: Vec<String> = markers.iter().map(ToString::to_string).collect();
                rendered.sort();
                if !rendered.is_empty() {
                    write!(f, ":{}", rendered.join(","))?;
                }
            }
            f.write_str(":")?;

            if let Some(store) = self.transitions(state) {
                for (guard, to) in store.entries() {
                    write!(f, " {guard}{}", to.index())?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
