//! MAP combinators - coerce every key and value of a map

use crate::checkers::{Str, string};
use crate::foundation::{Checker, CoerceError, Key, Path, Value, ValueMap};

/// Accepts a map and coerces every key and every value.
///
/// Key failures are reported at the map's own path; value failures at the
/// path extended by the coerced key. Entries keep their input order.
#[derive(Debug, Clone, Copy, Default)]
pub struct Map<K, V> {
    key: K,
    value: V,
}

impl<K, V> Map<K, V> {
    pub fn new(key: K, value: V) -> Self {
        Self { key, value }
    }
}

impl<K: Checker, V: Checker> Checker for Map<K, V> {
    fn coerce(&self, value: &Value, path: &Path) -> Result<Value, CoerceError> {
        let Value::Map(entries) = value else {
            return Err(CoerceError::expected("map", value, path));
        };
        let mut out = ValueMap::with_capacity(entries.len());
        for (key, item) in entries {
            let coerced = self.key.coerce(&Value::from(key.clone()), path)?;
            let key = Key::try_from(coerced)
                .map_err(|other| CoerceError::expected("map key", &other, path))?;
            let item = self.value.coerce(item, &path.key(key.to_string()))?;
            out.insert(key, item);
        }
        Ok(Value::Map(out))
    }
}

/// Creates a [`Map`] combinator.
pub fn map<K: Checker, V: Checker>(key: K, value: V) -> Map<K, V> {
    Map::new(key, value)
}

/// A [`Map`] whose keys must be text.
pub type StringMap<V> = Map<Str, V>;

/// Creates a [`StringMap`] combinator.
pub fn string_map<V: Checker>(value: V) -> StringMap<V> {
    Map::new(string(), value)
}
