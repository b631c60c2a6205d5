//! ONE-OF combinator - first accepting alternative wins
//!
//! # Examples
//!
//! ```
//! use tessel_schema::prelude::*;
//!
//! let port = one_of([int().boxed(), string().boxed()]);
//! assert_eq!(port.coerce_root(&Value::from(80)).unwrap(), Value::Int(80));
//! assert_eq!(port.coerce_root(&Value::from("http")).unwrap(), Value::from("http"));
//! assert!(port.coerce_root(&Value::Bool(true)).is_err());
//! ```

use crate::foundation::{BoxedChecker, Checker, CheckerExt, CoerceError, Path, Value};

/// Tries alternatives in order and returns the first success.
///
/// When every alternative fails the individual errors are discarded and a
/// single `unexpected value <repr>` error is reported at the current path.
/// An empty `OneOf` rejects everything.
#[derive(Debug, Default)]
pub struct OneOf {
    alternatives: Vec<BoxedChecker>,
}

impl OneOf {
    /// Creates a combinator over `alternatives`, tried in order.
    #[must_use]
    pub fn new(alternatives: Vec<BoxedChecker>) -> Self {
        Self { alternatives }
    }

    /// Appends another alternative, keeping the chain flat.
    #[must_use]
    pub fn or<C: Checker + 'static>(mut self, other: C) -> Self {
        self.alternatives.push(other.boxed());
        self
    }

    /// The alternatives, in the order they are tried.
    pub fn alternatives(&self) -> &[BoxedChecker] {
        &self.alternatives
    }
}

impl Checker for OneOf {
    fn coerce(&self, value: &Value, path: &Path) -> Result<Value, CoerceError> {
        for alternative in &self.alternatives {
            if let Ok(out) = alternative.coerce(value, path) {
                return Ok(out);
            }
        }
        tracing::trace!(
            %path,
            alternatives = self.alternatives.len(),
            kind = value.kind(),
            "no alternative accepted value"
        );
        Err(CoerceError::unexpected(value, path))
    }
}

/// Creates a [`OneOf`] combinator.
#[must_use]
pub fn one_of(alternatives: impl IntoIterator<Item = BoxedChecker>) -> OneOf {
    OneOf::new(alternatives.into_iter().collect())
}
