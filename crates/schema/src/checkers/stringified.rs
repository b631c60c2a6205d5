//! Stringifying checker

use crate::foundation::{BoxedChecker, Checker, CheckerExt, CoerceError, Path, Value};

/// Accepts scalars and returns them as text.
///
/// Booleans, numbers and text are rendered in their canonical form. With an
/// inner checker, any value that checker accepts is also accepted, and the
/// inner checker's result is rendered with [`Value::to_text`]; values it
/// rejects still get the scalar rules.
///
/// # Examples
///
/// ```
/// use tessel_schema::prelude::*;
///
/// let version = stringified();
/// assert_eq!(version.coerce_root(&Value::from(2)).unwrap(), Value::from("2"));
///
/// let wait = stringified_with(time_duration());
/// assert_eq!(
///     wait.coerce_root(&Value::Duration(std::time::Duration::from_secs(90))).unwrap(),
///     Value::from("1m 30s"),
/// );
/// ```
#[derive(Debug, Default)]
pub struct Stringified {
    inner: Option<BoxedChecker>,
}

impl Stringified {
    #[must_use]
    pub const fn new() -> Self {
        Self { inner: None }
    }

    /// Also accepts whatever `inner` accepts.
    #[must_use]
    pub fn with(inner: impl Checker + 'static) -> Self {
        Self {
            inner: Some(inner.boxed()),
        }
    }
}

impl Checker for Stringified {
    fn coerce(&self, value: &Value, path: &Path) -> Result<Value, CoerceError> {
        if let Some(inner) = &self.inner
            && let Ok(out) = inner.coerce(value, path)
        {
            return Ok(Value::String(out.to_text()));
        }
        match value {
            Value::Bool(_) | Value::Int(_) | Value::Uint(_) | Value::Float(_) => {
                Ok(Value::String(value.to_text()))
            }
            Value::String(s) => Ok(Value::String(s.clone())),
            other => Err(CoerceError::unexpected(other, path)),
        }
    }
}

/// Creates a [`Stringified`] checker for scalars only.
#[must_use]
pub const fn stringified() -> Stringified {
    Stringified::new()
}

/// Creates a [`Stringified`] checker that also accepts what `inner` accepts.
#[must_use]
pub fn stringified_with(inner: impl Checker + 'static) -> Stringified {
    Stringified::with(inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checkers::{time_duration, url};
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use std::time::Duration;

    fn at() -> Path {
        Path::from("<path>")
    }

    #[rstest]
    #[case(Value::Bool(true), "true")]
    #[case(Value::Int(-1), "-1")]
    #[case(Value::Uint(7), "7")]
    #[case(Value::Float(1.5), "1.5")]
    #[case(Value::from("foo"), "foo")]
    fn renders_scalars(#[case] input: Value, #[case] expected: &str) {
        assert_eq!(
            stringified().coerce(&input, &at()).unwrap(),
            Value::from(expected)
        );
    }

    #[rstest]
    #[case(Value::list(["foo"]), r#"<path>: unexpected value ["foo"]"#)]
    #[case(Value::map([("a", 1)]), r#"<path>: unexpected value {"a": 1}"#)]
    #[case(Value::Nothing, "<path>: unexpected value nothing")]
    fn rejects_containers(#[case] input: Value, #[case] message: &str) {
        assert_eq!(
            stringified().coerce(&input, &at()).unwrap_err().to_string(),
            message
        );
    }

    #[test]
    fn inner_result_is_rendered() {
        let checker = stringified_with(url());
        assert_eq!(
            checker
                .coerce(&Value::from("http://example.com"), &at())
                .unwrap(),
            Value::from("http://example.com")
        );
    }

    #[test]
    fn inner_accepts_non_scalars() {
        let checker = stringified_with(time_duration());
        assert_eq!(
            checker
                .coerce(&Value::Duration(Duration::from_secs(90)), &at())
                .unwrap(),
            Value::from("1m 30s")
        );
    }

    #[test]
    fn falls_back_to_scalar_rules() {
        let checker = stringified_with(url());
        assert_eq!(
            checker.coerce(&Value::Int(3), &at()).unwrap(),
            Value::from("3")
        );
        assert_eq!(
            checker.coerce(&Value::from("a b"), &at()).unwrap(),
            Value::from("a b")
        );
    }
}
