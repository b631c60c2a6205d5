//! Prelude module for convenient imports.
//!
//! Provides a single `use tessel_schema::prelude::*;` import that brings in
//! the core traits, the value model, every checker and every combinator.
//!
//! # Examples
//!
//! ```
//! use tessel_schema::prelude::*;
//!
//! let tags = list(non_empty_string("tag"));
//! let limits = string_map(size());
//! let port = int().or(stringified());
//! ```

// ============================================================================
// FOUNDATION: Core traits, values, errors
// ============================================================================

pub use crate::foundation::{
    BoxedChecker, Checker, CheckerExt, CoerceError, CoerceResult, ConversionError, Got, Key, Path,
    PathSegment, SizeError, UrlRef, Value, ValueMap,
};

// ============================================================================
// CHECKERS: All built-in leaf checkers
// ============================================================================

#[allow(clippy::wildcard_imports)]
pub use crate::checkers::*;

// ============================================================================
// COMBINATORS: Composite checkers and their builders
// ============================================================================

pub use crate::combinators::{
    Defaults, FieldDefault, FieldMap, FieldMapSet, Fields, List, Map, OneOf, StringMap, field_map,
    field_map_set, list, map, one_of, string_map, strict_field_map,
};

// ============================================================================
// MACROS
// ============================================================================

pub use crate::{checker, defaults, fields};
