//! Text checkers

use crate::foundation::{Checker, CoerceError, Path, Value};
use std::borrow::Cow;

crate::checker! {
    /// Accepts text only. Numbers are not converted; see
    /// [`Stringified`](super::Stringified) for that.
    pub Str;
    coerce(value, path) {
        match value {
            Value::String(s) => Ok(Value::String(s.clone())),
            other => Err(CoerceError::expected("string", other, path)),
        }
    }
    fn string();
}

/// Accepts text that is not empty.
///
/// The label names the expectation in errors, `expected non-empty <label>`;
/// it defaults to `string`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NonEmptyString {
    expected: Cow<'static, str>,
}

impl NonEmptyString {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            expected: Cow::Borrowed("non-empty string"),
        }
    }

    /// Replaces the label. An empty label keeps the default.
    #[must_use]
    pub fn with_label(self, label: &str) -> Self {
        if label.is_empty() {
            return self;
        }
        Self {
            expected: Cow::Owned(format!("non-empty {label}")),
        }
    }
}

impl Default for NonEmptyString {
    fn default() -> Self {
        Self::new()
    }
}

impl Checker for NonEmptyString {
    fn coerce(&self, value: &Value, path: &Path) -> Result<Value, CoerceError> {
        match value {
            Value::String(s) if !s.is_empty() => Ok(Value::String(s.clone())),
            other => Err(CoerceError::expected(self.expected.clone(), other, path)),
        }
    }
}

/// Creates a [`NonEmptyString`] checker with the given label.
#[must_use]
pub fn non_empty_string(label: &str) -> NonEmptyString {
    NonEmptyString::new().with_label(label)
}
