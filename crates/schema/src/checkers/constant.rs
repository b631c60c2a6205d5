//! Literal checker

use crate::foundation::{Checker, CoerceError, Path, Value};

/// Accepts exactly one literal value and returns it unchanged.
///
/// Field map sets recognize a `Const` selector field through
/// [`Checker::constant`].
///
/// # Examples
///
/// ```
/// use tessel_schema::prelude::*;
///
/// let kind = constant("mysql");
/// assert!(kind.coerce_root(&Value::from("mysql")).is_ok());
/// assert!(kind.coerce_root(&Value::from("pgsql")).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Const {
    value: Value,
    expected: String,
}

impl Const {
    /// Creates a checker for `value`.
    pub fn new(value: impl Into<Value>) -> Self {
        let value = value.into();
        let expected = value.repr();
        Self { value, expected }
    }

    /// The accepted literal.
    #[must_use]
    pub fn value(&self) -> &Value {
        &self.value
    }
}

impl Checker for Const {
    fn coerce(&self, value: &Value, path: &Path) -> Result<Value, CoerceError> {
        if *value == self.value {
            Ok(value.clone())
        } else {
            Err(CoerceError::expected(self.expected.clone(), value, path))
        }
    }

    fn constant(&self) -> Option<&Value> {
        Some(&self.value)
    }
}

/// Creates a [`Const`] checker.
pub fn constant(value: impl Into<Value>) -> Const {
    Const::new(value)
}
