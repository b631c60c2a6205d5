//! Boolean checker

use crate::foundation::{CoerceError, Value};

crate::checker! {
    /// Accepts booleans and their common spellings.
    ///
    /// `"1"`, `"true"`, `"True"`, `"TRUE"` become `true`; `"0"`, `"false"`,
    /// `"False"`, `"FALSE"` become `false`. Nothing else converts.
    pub Bool;
    coerce(value, path) {
        match value {
            Value::Bool(b) => Ok(Value::Bool(*b)),
            Value::String(s) => parse_bool(s)
                .map(Value::Bool)
                .ok_or_else(|| CoerceError::expected("bool", value, path)),
            other => Err(CoerceError::expected("bool", other, path)),
        }
    }
    fn boolean();
}

fn parse_bool(s: &str) -> Option<bool> {
    match s {
        "1" | "true" | "True" | "TRUE" => Some(true),
        "0" | "false" | "False" | "FALSE" => Some(false),
        _ => None,
    }
}
