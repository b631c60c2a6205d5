//! LIST combinator - coerces every element of a list

use crate::foundation::{Checker, CoerceError, Path, Value};

/// Accepts a list and coerces each element with the element checker.
///
/// Elements are checked in order at `path[i]`; the first failure aborts.
///
/// # Examples
///
/// ```
/// use tessel_schema::prelude::*;
///
/// let ports = list(int());
/// assert_eq!(
///     ports.coerce_root(&Value::list(["80", "443"])).unwrap(),
///     Value::list([80, 443]),
/// );
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct List<C> {
    element: C,
}

impl<C> List<C> {
    pub fn new(element: C) -> Self {
        Self { element }
    }

    /// The element checker.
    pub fn element(&self) -> &C {
        &self.element
    }
}

impl<C: Checker> Checker for List<C> {
    fn coerce(&self, value: &Value, path: &Path) -> Result<Value, CoerceError> {
        let Value::List(items) = value else {
            return Err(CoerceError::expected("list", value, path));
        };
        items
            .iter()
            .enumerate()
            .map(|(i, item)| self.element.coerce(item, &path.index(i)))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::List)
    }
}

/// Creates a [`List`] combinator.
pub fn list<C: Checker>(element: C) -> List<C> {
    List::new(element)
}
