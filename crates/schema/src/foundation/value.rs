//! The dynamically-typed value every checker consumes and produces.
//!
//! [`Value`] is a closed enum: decoders turn JSON/YAML into it, checkers
//! pattern-match on it, and coerced results come back as it. Numeric input
//! of any width collapses into three canonical variants (`Int`, `Uint`,
//! `Float`) through the `From` impls below.

use chrono::{DateTime, FixedOffset, SecondsFormat, Utc};
use fluent_uri::UriRef;
use indexmap::IndexMap;
use std::fmt;
use std::time::Duration;

/// Ordered map used for every map-shaped value.
///
/// Iteration follows insertion order, so repeated coercions of the same
/// input report the same first failure.
pub type ValueMap = IndexMap<Key, Value>;

/// A parsed URI reference, absolute (`http://host/a`) or relative (`a/b`).
pub type UrlRef = UriRef<String>;

// ============================================================================
// VALUE
// ============================================================================

/// A dynamically-typed datum.
#[derive(Debug, Clone, Default)]
pub enum Value {
    /// Absent value (`null`, a missing field).
    #[default]
    Nothing,
    /// Boolean.
    Bool(bool),
    /// Signed integer.
    Int(i64),
    /// Unsigned integer.
    Uint(u64),
    /// Floating point number.
    Float(f64),
    /// UTF-8 text.
    String(String),
    /// Ordered sequence.
    List(Vec<Value>),
    /// Mapping from [`Key`] to value.
    Map(ValueMap),
    /// An already-parsed URI reference.
    Url(UrlRef),
    /// An already-parsed point in time.
    Time(DateTime<FixedOffset>),
    /// An already-parsed time span.
    Duration(Duration),
}

impl Value {
    /// Builds a list from anything convertible into values.
    pub fn list<T: Into<Value>>(items: impl IntoIterator<Item = T>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }

    /// Builds a map from key/value pairs, keeping their order.
    pub fn map<K: Into<Key>, V: Into<Value>>(entries: impl IntoIterator<Item = (K, V)>) -> Self {
        Self::Map(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Short name of the variant, used as the `<kind>` in `got <kind>(<repr>)`.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Nothing => "nothing",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Uint(_) => "uint",
            Self::Float(_) => "float",
            Self::String(_) => "string",
            Self::List(_) => "list",
            Self::Map(_) => "map",
            Self::Url(_) => "url",
            Self::Time(_) => "time",
            Self::Duration(_) => "duration",
        }
    }

    /// Literal rendering used inside error messages.
    ///
    /// Strings are quoted and escaped; containers render their elements the
    /// same way, maps in their own order.
    #[must_use]
    pub fn repr(&self) -> String {
        Repr(self).to_string()
    }

    /// Canonical textual form.
    ///
    /// Text and URLs come out unquoted; times use RFC 3339 and durations the
    /// humantime format. Everything else falls back to [`repr`](Self::repr).
    #[must_use]
    pub fn to_text(&self) -> String {
        match self {
            Self::String(s) => s.clone(),
            Self::Url(u) => u.as_str().to_owned(),
            Self::Time(t) => format_time(t),
            Self::Duration(d) => humantime::format_duration(*d).to_string(),
            other => other.repr(),
        }
    }

    /// Returns true for [`Value::Nothing`].
    #[must_use]
    pub const fn is_nothing(&self) -> bool {
        matches!(self, Self::Nothing)
    }

    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Signed view of an `Int`, or of a `Uint` that fits.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            Self::Uint(u) => i64::try_from(*u).ok(),
            _ => None,
        }
    }

    /// Unsigned view of a `Uint`, or of a non-negative `Int`.
    #[must_use]
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Self::Uint(u) => Some(*u),
            Self::Int(i) => u64::try_from(*i).ok(),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Self::List(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_map(&self) -> Option<&ValueMap> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_url(&self) -> Option<&UrlRef> {
        match self {
            Self::Url(u) => Some(u),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_time(&self) -> Option<&DateTime<FixedOffset>> {
        match self {
            Self::Time(t) => Some(t),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_duration(&self) -> Option<Duration> {
        match self {
            Self::Duration(d) => Some(*d),
            _ => None,
        }
    }

    /// Looks up a text key in a map value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Self::Map(map) => map.get(&Key::String(key.to_owned())),
            _ => None,
        }
    }
}

/// Deep equality.
///
/// `Int` and `Uint` compare by numeric value; every other variant only
/// equals itself.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Nothing, Self::Nothing) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Uint(a), Self::Uint(b)) => a == b,
            (Self::Int(i), Self::Uint(u)) | (Self::Uint(u), Self::Int(i)) => {
                u64::try_from(*i).is_ok_and(|i| i == *u)
            }
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::String(a), Self::String(b)) => a == b,
            (Self::List(a), Self::List(b)) => a == b,
            (Self::Map(a), Self::Map(b)) => a == b,
            (Self::Url(a), Self::Url(b)) => a.as_str() == b.as_str(),
            (Self::Time(a), Self::Time(b)) => a == b,
            (Self::Duration(a), Self::Duration(b)) => a == b,
            _ => false,
        }
    }
}

fn format_time(t: &DateTime<FixedOffset>) -> String {
    t.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

struct Repr<'a>(&'a Value);

impl fmt::Display for Repr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Value::Nothing => f.write_str("nothing"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(i) => write!(f, "{i}"),
            Value::Uint(u) => write!(f, "{u}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::String(s) => write!(f, "{s:?}"),
            Value::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", Repr(item))?;
                }
                f.write_str("]")
            }
            Value::Map(map) => {
                f.write_str("{")?;
                for (i, (key, value)) in map.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}: {}", key.repr(), Repr(value))?;
                }
                f.write_str("}")
            }
            Value::Url(u) => write!(f, "{:?}", u.as_str()),
            Value::Time(t) => f.write_str(&format_time(t)),
            Value::Duration(d) => write!(f, "{}", humantime::format_duration(*d)),
        }
    }
}

// ============================================================================
// KEY
// ============================================================================

/// The hashable subset of [`Value`] allowed as a map key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    String(String),
    Int(i64),
    Uint(u64),
    Bool(bool),
}

impl Key {
    /// Kind name, matching [`Value::kind`].
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::String(_) => "string",
            Self::Int(_) => "int",
            Self::Uint(_) => "uint",
            Self::Bool(_) => "bool",
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Literal rendering, strings quoted.
    #[must_use]
    pub fn repr(&self) -> String {
        match self {
            Self::String(s) => format!("{s:?}"),
            other => other.to_string(),
        }
    }
}

/// Unquoted textual form, used when a key becomes a path segment.
impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => f.write_str(s),
            Self::Int(i) => write!(f, "{i}"),
            Self::Uint(u) => write!(f, "{u}"),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<Key> for Value {
    fn from(key: Key) -> Self {
        match key {
            Key::String(s) => Self::String(s),
            Key::Int(i) => Self::Int(i),
            Key::Uint(u) => Self::Uint(u),
            Key::Bool(b) => Self::Bool(b),
        }
    }
}

/// Fails with the original value when it cannot key a map.
impl TryFrom<Value> for Key {
    type Error = Value;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(s) => Ok(Self::String(s)),
            Value::Int(i) => Ok(Self::Int(i)),
            Value::Uint(u) => Ok(Self::Uint(u)),
            Value::Bool(b) => Ok(Self::Bool(b)),
            other => Err(other),
        }
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Self::String(s.to_owned())
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<bool> for Key {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

// ============================================================================
// CONVERSIONS
// ============================================================================

macro_rules! signed_conversions {
    ($($ty:ty),*) => {$(
        impl From<$ty> for Value {
            fn from(v: $ty) -> Self {
                Self::Int(i64::from(v))
            }
        }

        impl From<$ty> for Key {
            fn from(v: $ty) -> Self {
                Self::Int(i64::from(v))
            }
        }
    )*};
}

macro_rules! unsigned_conversions {
    ($($ty:ty),*) => {$(
        impl From<$ty> for Value {
            fn from(v: $ty) -> Self {
                Self::Uint(u64::from(v))
            }
        }

        impl From<$ty> for Key {
            fn from(v: $ty) -> Self {
                Self::Uint(u64::from(v))
            }
        }
    )*};
}

signed_conversions!(i8, i16, i32, i64);
unsigned_conversions!(u8, u16, u32, u64);

impl From<isize> for Value {
    fn from(v: isize) -> Self {
        Self::Int(v as i64)
    }
}

impl From<usize> for Value {
    fn from(v: usize) -> Self {
        Self::Uint(v as u64)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Self::Float(f64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Self::list(items)
    }
}

impl From<ValueMap> for Value {
    fn from(map: ValueMap) -> Self {
        Self::Map(map)
    }
}

impl From<UrlRef> for Value {
    fn from(u: UrlRef) -> Self {
        Self::Url(u)
    }
}

impl From<DateTime<FixedOffset>> for Value {
    fn from(t: DateTime<FixedOffset>) -> Self {
        Self::Time(t)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(t: DateTime<Utc>) -> Self {
        Self::Time(t.fixed_offset())
    }
}

impl From<Duration> for Value {
    fn from(d: Duration) -> Self {
        Self::Duration(d)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Nothing, Into::into)
    }
}
