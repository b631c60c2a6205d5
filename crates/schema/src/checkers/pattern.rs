//! Checkers for text that must follow a syntax

use crate::foundation::{CoerceError, Value};

crate::checker! {
    /// Accepts text that compiles as a regular expression and returns it
    /// unchanged.
    pub SimpleRegexp;
    coerce(value, path) {
        match value {
            Value::String(s) if regex::Regex::new(s).is_ok() => Ok(Value::String(s.clone())),
            Value::String(_) => Err(CoerceError::expected("valid regexp", value, path)),
            other => Err(CoerceError::expected("regexp string", other, path)),
        }
    }
    fn simple_regexp();
}

/// Length of the canonical hyphenated form.
const UUID_LEN: usize = 36;

crate::checker! {
    /// Accepts text in the canonical hyphenated UUID form
    /// (`xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx`) and returns it unchanged.
    pub Uuid;
    coerce(value, path) {
        match value {
            Value::String(s) if is_uuid(s) => Ok(Value::String(s.clone())),
            other => Err(CoerceError::expected("uuid", other, path)),
        }
    }
    fn uuid();
}

fn is_uuid(s: &str) -> bool {
    s.len() == UUID_LEN && ::uuid::Uuid::try_parse(s).is_ok()
}
