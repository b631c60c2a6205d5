//! Error types for coercion failures
//!
//! Every checker reports failure through [`CoerceError`]. Messages carry the
//! rendered [`Path`] as a prefix (omitted at the root) followed by a body in
//! one of a few fixed shapes:
//!
//! - `expected <want>, got <kind>(<repr>)`
//! - `expected <want>, got nothing`
//! - `unexpected value <repr>`
//! - `unknown key "<k>" (value <repr>)`
//! - `conversion to <target>: <parse error>`

use crate::foundation::path::{Path, PathPrefix};
use crate::foundation::value::Value;
use std::borrow::Cow;
use std::fmt;

// ============================================================================
// COERCE ERROR
// ============================================================================

/// The single failure type produced by every checker.
///
/// A schema whose default does not satisfy its own field checker fails
/// through this type too, in the same shape as bad input.
#[derive(Debug, Clone, thiserror::Error)]
#[non_exhaustive]
pub enum CoerceError {
    /// The value is present but has the wrong shape, or is absent.
    #[error("{}expected {expected}, got {got}", PathPrefix(.path))]
    Expected {
        path: Path,
        expected: Cow<'static, str>,
        got: Got,
    },

    /// No alternative accepted the value.
    #[error("{}unexpected value {value}", PathPrefix(.path))]
    Unexpected { path: Path, value: String },

    /// A strict field map saw a key it does not declare.
    #[error("{}unknown key {key:?} (value {value})", PathPrefix(.path))]
    UnknownKey {
        path: Path,
        key: String,
        value: String,
    },

    /// Text was recognized as the right kind but failed to parse.
    #[error("{}conversion to {target}: {source}", PathPrefix(.path))]
    Conversion {
        path: Path,
        target: &'static str,
        #[source]
        source: ConversionError,
    },

    /// A size string could not be parsed. Reported without a path.
    #[error(transparent)]
    Size(#[from] SizeError),
}

impl CoerceError {
    /// Builds an `expected <want>, got ...` error for `got` at `path`.
    pub fn expected(expected: impl Into<Cow<'static, str>>, got: &Value, path: &Path) -> Self {
        Self::Expected {
            path: path.clone(),
            expected: expected.into(),
            got: Got::from(got),
        }
    }

    /// Builds an `unexpected value <repr>` error.
    pub fn unexpected(value: &Value, path: &Path) -> Self {
        Self::Unexpected {
            path: path.clone(),
            value: value.repr(),
        }
    }

    /// Builds an `unknown key` error for a strict field map.
    pub fn unknown_key(key: impl Into<String>, value: &Value, path: &Path) -> Self {
        Self::UnknownKey {
            path: path.clone(),
            key: key.into(),
            value: value.repr(),
        }
    }

    /// Wraps a lower-level parse failure.
    pub fn conversion(
        target: &'static str,
        source: impl Into<ConversionError>,
        path: &Path,
    ) -> Self {
        Self::Conversion {
            path: path.clone(),
            target,
            source: source.into(),
        }
    }

    /// The location of the failure, if the error carries one.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Expected { path, .. }
            | Self::Unexpected { path, .. }
            | Self::UnknownKey { path, .. }
            | Self::Conversion { path, .. } => Some(path),
            Self::Size(_) => None,
        }
    }

    /// The `<want>` part of an `expected ...` error.
    #[must_use]
    pub fn expected_description(&self) -> Option<&str> {
        match self {
            Self::Expected { expected, .. } => Some(expected),
            _ => None,
        }
    }

    /// Returns true when the failure was caused by an absent value.
    #[must_use]
    pub fn is_missing(&self) -> bool {
        matches!(
            self,
            Self::Expected {
                got: Got::Nothing,
                ..
            }
        )
    }
}

// ============================================================================
// ACTUAL VALUE DESCRIPTION
// ============================================================================

/// What a checker actually received, as rendered after `got`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Got {
    /// The value was absent.
    Nothing,
    /// A present value, described by kind and literal.
    Value { kind: &'static str, repr: String },
}

impl From<&Value> for Got {
    fn from(value: &Value) -> Self {
        match value {
            Value::Nothing => Self::Nothing,
            other => Self::Value {
                kind: other.kind(),
                repr: other.repr(),
            },
        }
    }
}

impl fmt::Display for Got {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nothing => f.write_str("nothing"),
            Self::Value { kind, repr } => write!(f, "{kind}({repr})"),
        }
    }
}

// ============================================================================
// WRAPPED PARSE ERRORS
// ============================================================================

/// Underlying parser failures embedded in [`CoerceError::Conversion`].
#[derive(Debug, Clone, thiserror::Error)]
#[non_exhaustive]
pub enum ConversionError {
    #[error(transparent)]
    Time(#[from] chrono::ParseError),

    #[error(transparent)]
    Duration(#[from] humantime::DurationError),
}

/// Failures of the size parser.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum SizeError {
    #[error("invalid multiplier suffix {suffix:?}, expected one of MGTPEZY")]
    InvalidSuffix { suffix: String },

    #[error("expected a non-negative number, got {number:?}")]
    InvalidNumber { number: String },
}
