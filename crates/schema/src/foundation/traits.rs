//! Core traits for the coercion system
//!
//! This module defines [`Checker`], the one operation every schema node
//! implements, and [`CheckerExt`], the fluent helpers built on top of it.

use crate::combinators::one_of::OneOf;
use crate::foundation::{CoerceError, Path, Value};
use std::fmt;
use std::sync::Arc;

// ============================================================================
// CORE CHECKER TRAIT
// ============================================================================

/// A composable unit that coerces one dynamically-typed value into a
/// specific shape.
///
/// Implementations are immutable and hold no per-call state, so a checker
/// graph built once can be shared between threads and reused forever.
///
/// # Examples
///
/// ```
/// use tessel_schema::foundation::{Checker, CoerceError, Path, Value};
///
/// #[derive(Debug)]
/// struct Even;
///
/// impl Checker for Even {
///     fn coerce(&self, value: &Value, path: &Path) -> Result<Value, CoerceError> {
///         match value.as_i64() {
///             Some(i) if i % 2 == 0 => Ok(Value::Int(i)),
///             _ => Err(CoerceError::expected("even int", value, path)),
///         }
///     }
/// }
///
/// assert_eq!(Even.coerce(&Value::Uint(4), &Path::root()).unwrap(), Value::Int(4));
/// assert!(Even.coerce(&Value::Int(3), &Path::root()).is_err());
/// ```
pub trait Checker: fmt::Debug + Send + Sync {
    /// Validates `value` and returns its normalized form.
    ///
    /// `path` locates `value` inside the top-level input and is only used to
    /// prefix error messages. Composite checkers extend it before handing
    /// nested values to their children.
    fn coerce(&self, value: &Value, path: &Path) -> Result<Value, CoerceError>;

    /// The literal this checker accepts, if it accepts exactly one.
    ///
    /// Field map sets read it to dispatch on a selector field without
    /// trying every candidate against the whole input.
    fn constant(&self) -> Option<&Value> {
        None
    }
}

/// A heap-allocated, type-erased checker.
pub type BoxedChecker = Box<dyn Checker>;

impl<C: Checker + ?Sized> Checker for Box<C> {
    fn coerce(&self, value: &Value, path: &Path) -> Result<Value, CoerceError> {
        (**self).coerce(value, path)
    }

    fn constant(&self) -> Option<&Value> {
        (**self).constant()
    }
}

impl<C: Checker + ?Sized> Checker for Arc<C> {
    fn coerce(&self, value: &Value, path: &Path) -> Result<Value, CoerceError> {
        (**self).coerce(value, path)
    }

    fn constant(&self) -> Option<&Value> {
        (**self).constant()
    }
}

impl<C: Checker + ?Sized> Checker for &C {
    fn coerce(&self, value: &Value, path: &Path) -> Result<Value, CoerceError> {
        (**self).coerce(value, path)
    }

    fn constant(&self) -> Option<&Value> {
        (**self).constant()
    }
}

// ============================================================================
// CHECKER EXTENSION TRAIT
// ============================================================================

/// Extension trait providing combinator methods for checkers.
///
/// Automatically implemented for every sized [`Checker`].
///
/// # Examples
///
/// ```
/// use tessel_schema::prelude::*;
///
/// let port = int().or(string());
/// assert_eq!(port.coerce_root(&Value::from(80)).unwrap(), Value::Int(80));
/// ```
pub trait CheckerExt: Checker + Sized + 'static {
    /// Erases the concrete type.
    fn boxed(self) -> BoxedChecker {
        Box::new(self)
    }

    /// Tries `self`, then `other`; the first success wins.
    fn or<C: Checker + 'static>(self, other: C) -> OneOf {
        OneOf::new(vec![self.boxed(), other.boxed()])
    }

    /// Coerces a value at the root path.
    fn coerce_root(&self, value: &Value) -> Result<Value, CoerceError> {
        self.coerce(value, &Path::root())
    }
}

impl<C: Checker + 'static> CheckerExt for C {}
