//! Checkers for absent and unconstrained values

use crate::foundation::{Checker, CoerceError, Path, Value};
use std::borrow::Cow;

// ============================================================================
// NIL
// ============================================================================

/// Accepts only [`Value::Nothing`].
///
/// The label names what was expected to be empty in the error message:
/// `expected empty <label>, got ...`. It defaults to `value`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Nil {
    expected: Cow<'static, str>,
}

impl Nil {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            expected: Cow::Borrowed("empty value"),
        }
    }

    /// Replaces the label. An empty label keeps the default.
    #[must_use]
    pub fn with_label(self, label: &str) -> Self {
        if label.is_empty() {
            return self;
        }
        Self {
            expected: Cow::Owned(format!("empty {label}")),
        }
    }
}

impl Default for Nil {
    fn default() -> Self {
        Self::new()
    }
}

impl Checker for Nil {
    fn coerce(&self, value: &Value, path: &Path) -> Result<Value, CoerceError> {
        match value {
            Value::Nothing => Ok(Value::Nothing),
            other => Err(CoerceError::expected(self.expected.clone(), other, path)),
        }
    }
}

/// Creates a [`Nil`] checker with the given label.
#[must_use]
pub fn nil(label: &str) -> Nil {
    Nil::new().with_label(label)
}

// ============================================================================
// ANY
// ============================================================================

crate::checker! {
    /// Accepts every value, including [`Value::Nothing`], and returns it
    /// unchanged.
    pub Any;
    coerce(value, _path) {
        Ok(value.clone())
    }
    fn any();
}
