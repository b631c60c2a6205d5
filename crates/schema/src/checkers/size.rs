//! Size checker
//!
//! Sizes are written as a number with an optional binary suffix and are
//! normalized to megabytes: `"512"` is 512 MB, `"18G"` is 18432 MB, `"1.5T"`
//! is 1572864 MB. Accepted suffixes are `M`, `G`, `T`, `P`, `E`, `Z` and `Y`,
//! each optionally followed by `B` or `iB`.

use crate::foundation::{CoerceError, SizeError, Value};

const SUFFIXES: &str = "MGTPEZY";

crate::checker! {
    /// Accepts size text and returns the size in megabytes as a `Uint`,
    /// rounded up.
    ///
    /// Parse failures are reported without a path.
    pub Size;
    coerce(value, path) {
        match value {
            Value::String(s) if s.is_empty() => {
                Err(CoerceError::expected("empty string", value, path))
            }
            Value::String(s) => Ok(Value::Uint(parse_size(s)?)),
            other => Err(CoerceError::expected("string", other, path)),
        }
    }
    fn size();
}

/// Parses a size string into megabytes, rounding up.
///
/// The suffix starts at the first character that is neither an ASCII digit
/// nor `.`.
///
/// # Examples
///
/// ```
/// use tessel_schema::checkers::parse_size;
///
/// assert_eq!(parse_size("18G").unwrap(), 18 * 1024);
/// assert_eq!(parse_size("0.5").unwrap(), 1);
/// assert!(parse_size("3W").is_err());
/// ```
pub fn parse_size(input: &str) -> Result<u64, SizeError> {
    let split = input.find(|c: char| c != '.' && !c.is_ascii_digit());
    let (number, multiplier) = match split {
        Some(at) if at > 0 => {
            let suffix = &input[at..];
            let multiplier = multiplier(suffix).ok_or_else(|| SizeError::InvalidSuffix {
                suffix: suffix.to_owned(),
            })?;
            (&input[..at], multiplier)
        }
        _ => (input, 1.0),
    };

    let megabytes = number
        .parse::<f64>()
        .ok()
        .filter(|n| *n >= 0.0)
        .ok_or_else(|| SizeError::InvalidNumber {
            number: number.to_owned(),
        })?;
    Ok((megabytes * multiplier).ceil() as u64)
}

fn multiplier(suffix: &str) -> Option<f64> {
    SUFFIXES.chars().enumerate().find_map(|(power, base)| {
        let rest = suffix.strip_prefix(base)?;
        matches!(rest, "" | "B" | "iB").then(|| (1_u64 << (power * 10)) as f64)
    })
}
