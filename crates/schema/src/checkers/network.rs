//! URL checker

use crate::foundation::{CoerceError, UrlRef, Value};

crate::checker! {
    /// Accepts a URI reference, either as text or already parsed.
    ///
    /// Relative references such as `"foo"` or `"/a/b"` are accepted as well
    /// as absolute URLs. The text is kept as written, without normalization.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tessel_schema::prelude::*;
    ///
    /// let out = url().coerce_root(&Value::from("/a/b")).unwrap();
    /// assert_eq!(out.to_text(), "/a/b");
    /// assert!(url().coerce_root(&Value::from(":::")).is_err());
    /// ```
    pub UrlString;
    coerce(value, path) {
        match value {
            Value::Url(u) => Ok(Value::Url(u.clone())),
            Value::String(s) => UrlRef::parse(s.clone())
                .map(Value::Url)
                .map_err(|_| CoerceError::expected("valid url", value, path)),
            other => Err(CoerceError::expected("url string", other, path)),
        }
    }
    fn url();
}
