//! FIELD MAP combinator - coerces a map with a declared set of text fields
//!
//! A [`FieldMap`] is described by two tables:
//!
//! - [`Fields`]: field name → checker, in declaration order
//! - [`Defaults`]: field name → [`FieldDefault`], for fields that may be absent
//!
//! # Examples
//!
//! ```
//! use tessel_schema::prelude::*;
//!
//! let server = field_map(
//!     Fields::new()
//!         .field("host", string())
//!         .field("port", int())
//!         .field("tls", boolean()),
//!     Defaults::new().value("port", 8080).omit("tls"),
//! );
//!
//! let out = server.coerce_root(&Value::map([("host", "localhost")])).unwrap();
//! assert_eq!(out, Value::map([("host", Value::from("localhost")), ("port", Value::Int(8080))]));
//! ```

use crate::foundation::{BoxedChecker, Checker, CheckerExt, CoerceError, Key, Path, Value, ValueMap};
use indexmap::IndexMap;

// ============================================================================
// FIELDS
// ============================================================================

/// Ordered table of field name → checker.
#[derive(Debug, Default)]
pub struct Fields(IndexMap<String, BoxedChecker>);

impl Fields {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a field. Redeclaring a name replaces its checker in place.
    pub fn field(mut self, name: impl Into<String>, checker: impl Checker + 'static) -> Self {
        self.insert(name, checker);
        self
    }

    /// Declares a field on an existing table.
    pub fn insert(&mut self, name: impl Into<String>, checker: impl Checker + 'static) {
        self.0.insert(name.into(), checker.boxed());
    }

    pub fn get(&self, name: &str) -> Option<&BoxedChecker> {
        self.0.get(name)
    }

    /// Field names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &BoxedChecker)> {
        self.0.iter().map(|(name, checker)| (name.as_str(), checker))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<N: Into<String>> FromIterator<(N, BoxedChecker)> for Fields {
    fn from_iter<I: IntoIterator<Item = (N, BoxedChecker)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(n, c)| (n.into(), c)).collect())
    }
}

// ============================================================================
// DEFAULTS
// ============================================================================

/// What to do when a declared field is absent from the input.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FieldDefault {
    /// Coerce [`Value::Nothing`] through the field checker.
    #[default]
    Required,
    /// Leave the field out of the result.
    Omit,
    /// Coerce this value through the field checker and use the result.
    Value(Value),
}

static REQUIRED: FieldDefault = FieldDefault::Required;

/// Table of field name → [`FieldDefault`]. Fields not listed are required.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Defaults(IndexMap<String, FieldDefault>);

impl Defaults {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Lets `name` be absent from both input and result.
    pub fn omit(self, name: impl Into<String>) -> Self {
        self.with(name, FieldDefault::Omit)
    }

    /// Uses `value` when `name` is absent.
    pub fn value(self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.with(name, FieldDefault::Value(value.into()))
    }

    pub fn with(mut self, name: impl Into<String>, default: FieldDefault) -> Self {
        self.0.insert(name.into(), default);
        self
    }

    /// The default for `name`; [`FieldDefault::Required`] when unlisted.
    pub fn get(&self, name: &str) -> &FieldDefault {
        self.0.get(name).unwrap_or(&REQUIRED)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<N: Into<String>> FromIterator<(N, FieldDefault)> for Defaults {
    fn from_iter<I: IntoIterator<Item = (N, FieldDefault)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(n, d)| (n.into(), d)).collect())
    }
}

// ============================================================================
// FIELD MAP
// ============================================================================

/// Coerces a map with text keys against a declared set of fields.
///
/// Fields are visited in declaration order; the first failure aborts. The
/// result holds exactly the declared fields that were present or defaulted,
/// in declaration order. Undeclared input keys are dropped, or rejected when
/// the map is [strict](Self::strict).
#[derive(Debug, Default)]
pub struct FieldMap {
    fields: Fields,
    defaults: Defaults,
    strict: bool,
}

impl FieldMap {
    #[must_use]
    pub fn new(fields: Fields, defaults: Defaults) -> Self {
        Self {
            fields,
            defaults,
            strict: false,
        }
    }

    /// Rejects input keys that are not declared fields.
    #[must_use]
    pub fn strict(mut self) -> Self {
        self.strict = true;
        self
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    pub fn fields(&self) -> &Fields {
        &self.fields
    }

    pub fn defaults(&self) -> &Defaults {
        &self.defaults
    }

    fn check_unknown_keys(&self, entries: &ValueMap, path: &Path) -> Result<(), CoerceError> {
        for (key, value) in entries {
            let Key::String(name) = key else { continue };
            if self.fields.get(name).is_none() {
                tracing::trace!(%path, key = %name, "rejecting unknown key");
                return Err(CoerceError::unknown_key(name.clone(), value, path));
            }
        }
        Ok(())
    }
}

impl Checker for FieldMap {
    fn coerce(&self, value: &Value, path: &Path) -> Result<Value, CoerceError> {
        let Value::Map(entries) = value else {
            return Err(CoerceError::expected("map", value, path));
        };
        if entries.keys().any(|key| !matches!(key, Key::String(_))) {
            return Err(CoerceError::expected("map[string]", value, path));
        }

        let mut out = ValueMap::with_capacity(self.fields.len());
        for (name, checker) in self.fields.iter() {
            let key = Key::from(name);
            let field_path = path.key(name);
            let coerced = match (entries.get(&key), self.defaults.get(name)) {
                (Some(raw), _) => checker.coerce(raw, &field_path)?,
                (None, FieldDefault::Required) => checker.coerce(&Value::Nothing, &field_path)?,
                (None, FieldDefault::Omit) => {
                    tracing::trace!(path = %field_path, "omitting absent field");
                    continue;
                }
                (None, FieldDefault::Value(default)) => {
                    tracing::trace!(path = %field_path, default = %default.repr(), "installing default");
                    checker.coerce(default, &field_path)?
                }
            };
            out.insert(key, coerced);
        }

        if self.strict {
            self.check_unknown_keys(entries, path)?;
        }
        Ok(Value::Map(out))
    }
}

/// Creates a [`FieldMap`] that ignores undeclared keys.
pub fn field_map(fields: Fields, defaults: Defaults) -> FieldMap {
    FieldMap::new(fields, defaults)
}

/// Creates a [`FieldMap`] that rejects undeclared keys.
pub fn strict_field_map(fields: Fields, defaults: Defaults) -> FieldMap {
    FieldMap::new(fields, defaults).strict()
}
