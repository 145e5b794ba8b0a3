//! Closure predicates over input values.
//!
//! A `Matcher` wraps a pure boolean function. It is the predicate type of
//! [`MatcherStore`](crate::store::MatcherStore) and lets a builder express
//! arbitrary character classes without a dedicated store.

use std::fmt;
use std::sync::Arc;

/// Named pure predicate over input values of type `T`.
///
/// The name is used only for display; two matchers are never compared.
///
/// # Example
///
/// ```rust
/// use frontier::core::Matcher;
///
/// let digit = Matcher::new("digit", |c: &char| c.is_ascii_digit());
///
/// assert!(digit.check(&'7'));
/// assert!(!digit.check(&'x'));
/// assert_eq!(digit.name(), "digit");
/// ```
pub struct Matcher<T> {
    name: Arc<str>,
    predicate: Arc<dyn Fn(&T) -> bool + Send + Sync>,
}

impl<T> Matcher<T> {
    /// Create a matcher from a pure predicate function.
    ///
    /// The predicate must be deterministic and thread-safe (Send + Sync).
    pub fn new<F>(name: impl Into<Arc<str>>, predicate: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            predicate: Arc::new(predicate),
        }
    }

    /// Check whether the value satisfies the predicate.
    pub fn check(&self, value: &T) -> bool {
        (self.predicate)(value)
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl<T: PartialEq + Send + Sync + 'static> Matcher<T> {
    /// Matcher accepting exactly one value.
    pub fn exactly(name: impl Into<Arc<str>>, expected: T) -> Self {
        Self::new(name, move |value: &T| *value == expected)
    }
}

impl<T> Clone for Matcher<T> {
    fn clone(&self) -> Self {
        Self {
            name: Arc::clone(&self.name),
            predicate: Arc::clone(&self.predicate),
        }
    }
}

impl<T> fmt::Debug for Matcher<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Matcher").field("name", &self.name).finish()
    }
}

impl<T> fmt::Display for Matcher<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
