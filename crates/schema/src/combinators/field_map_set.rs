//! FIELD MAP SET combinator - dispatches on a selector field

use crate::combinators::field_map::FieldMap;
use crate::foundation::{Checker, CoerceError, Key, Path, Value};

static NOTHING: Value = Value::Nothing;

/// Chooses one of several [`FieldMap`]s by the value of a selector field.
///
/// Each candidate declares the selector with a [`Const`](crate::checkers::Const)
/// checker. The candidate whose constant equals the raw selector value is
/// chosen and coerces the whole input; its errors are returned unchanged.
/// Candidates that do not declare the selector as a constant never match.
///
/// # Examples
///
/// ```
/// use tessel_schema::prelude::*;
///
/// let storage = field_map_set("type", vec![
///     field_map(fields! { "type" => constant("disk"), "path" => string() }, defaults! {}),
///     field_map(fields! { "type" => constant("s3"), "bucket" => string() }, defaults! {}),
/// ]);
///
/// let s3 = Value::map([("type", "s3"), ("bucket", "assets")]);
/// assert_eq!(storage.coerce_root(&s3).unwrap(), s3);
/// assert!(storage.coerce_root(&Value::map([("type", "tape")])).is_err());
/// ```
#[derive(Debug)]
pub struct FieldMapSet {
    selector: String,
    candidates: Vec<FieldMap>,
}

impl FieldMapSet {
    #[must_use]
    pub fn new(selector: impl Into<String>, candidates: Vec<FieldMap>) -> Self {
        Self {
            selector: selector.into(),
            candidates,
        }
    }

    /// The name of the selector field.
    pub fn selector(&self) -> &str {
        &self.selector
    }

    pub fn candidates(&self) -> &[FieldMap] {
        &self.candidates
    }

    fn candidate_for(&self, selector: &Value) -> Option<&FieldMap> {
        self.candidates.iter().find(|candidate| {
            candidate
                .fields()
                .get(&self.selector)
                .and_then(|checker| checker.constant())
                .is_some_and(|constant| constant == selector)
        })
    }
}

impl Checker for FieldMapSet {
    fn coerce(&self, value: &Value, path: &Path) -> Result<Value, CoerceError> {
        let Value::Map(entries) = value else {
            return Err(CoerceError::expected("map", value, path));
        };
        let selector_path = path.key(self.selector.as_str());
        let selector = entries
            .get(&Key::from(self.selector.as_str()))
            .unwrap_or(&NOTHING);
        let Some(candidate) = self.candidate_for(selector) else {
            return Err(CoerceError::expected("supported selector", selector, &selector_path));
        };
        tracing::trace!(%path, selector = %selector.repr(), "dispatching on selector");
        candidate.coerce(value, path)
    }
}

/// Creates a [`FieldMapSet`] combinator.
pub fn field_map_set(selector: impl Into<String>, candidates: Vec<FieldMap>) -> FieldMapSet {
    FieldMapSet::new(selector, candidates)
}
