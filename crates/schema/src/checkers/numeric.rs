//! Numeric checkers
//!
//! - [`Int`] / [`Uint`]: exact integers, from numbers or decimal text
//! - [`ForceInt`] / [`ForceUint`]: lossy integers, truncating floats
//! - [`Float`]: any number, widened to `f64`
//!
//! The strict forms never lose information; the forced forms truncate toward
//! zero and are meant for sloppy inputs such as `"3.7"` timeouts.

use crate::foundation::{CoerceError, Value};

// ============================================================================
// EXACT INTEGERS
// ============================================================================

crate::checker! {
    /// Accepts signed integers, unsigned integers that fit in `i64`, and
    /// decimal text with an optional sign.
    pub Int;
    coerce(value, path) {
        let parsed = match value {
            Value::Int(i) => Some(*i),
            Value::Uint(u) => i64::try_from(*u).ok(),
            Value::String(s) => s.parse::<i64>().ok(),
            _ => None,
        };
        parsed
            .map(Value::Int)
            .ok_or_else(|| CoerceError::expected("int", value, path))
    }
    fn int();
}

crate::checker! {
    /// Accepts unsigned integers, non-negative signed integers, and unsigned
    /// decimal text (no sign).
    pub Uint;
    coerce(value, path) {
        let parsed = match value {
            Value::Int(i) => u64::try_from(*i).ok(),
            Value::Uint(u) => Some(*u),
            Value::String(s) => parse_unsigned(s),
            _ => None,
        };
        parsed
            .map(Value::Uint)
            .ok_or_else(|| CoerceError::expected("uint", value, path))
    }
    fn uint();
}

// ============================================================================
// FORCED INTEGERS
// ============================================================================

crate::checker! {
    /// Accepts any number or numeric text and truncates it to `i64`.
    ///
    /// Out-of-range floats saturate at the `i64` bounds; `NaN` becomes 0.
    pub ForceInt;
    coerce(value, path) {
        let parsed = match value {
            Value::Int(i) => Some(*i),
            Value::Uint(u) => Some(*u as i64),
            Value::Float(f) => Some(*f as i64),
            Value::String(s) => s
                .parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().map(|f| f as i64)),
            _ => None,
        };
        parsed
            .map(Value::Int)
            .ok_or_else(|| CoerceError::expected("number", value, path))
    }
    fn force_int();
}

crate::checker! {
    /// Accepts any non-negative number or numeric text and truncates it to
    /// `u64`.
    pub ForceUint;
    coerce(value, path) {
        let parsed = match value {
            Value::Int(i) => u64::try_from(*i).ok(),
            Value::Uint(u) => Some(*u),
            Value::Float(f) => truncate_unsigned(*f),
            Value::String(s) => parse_unsigned(s)
                .or_else(|| s.parse::<f64>().ok().and_then(truncate_unsigned)),
            _ => None,
        };
        parsed
            .map(Value::Uint)
            .ok_or_else(|| CoerceError::expected("uint", value, path))
    }
    fn force_uint();
}

// ============================================================================
// FLOATS
// ============================================================================

crate::checker! {
    /// Accepts any number and widens it to `f64`. Text is rejected.
    pub Float;
    coerce(value, path) {
        match value {
            Value::Int(i) => Ok(Value::Float(*i as f64)),
            Value::Uint(u) => Ok(Value::Float(*u as f64)),
            Value::Float(f) => Ok(Value::Float(*f)),
            other => Err(CoerceError::expected("float", other, path)),
        }
    }
    fn float();
}

fn parse_unsigned(s: &str) -> Option<u64> {
    if s.bytes().all(|b| b.is_ascii_digit()) {
        s.parse().ok()
    } else {
        None
    }
}

fn truncate_unsigned(f: f64) -> Option<u64> {
    if f < 0.0 { None } else { Some(f as u64) }
}
