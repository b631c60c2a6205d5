//! Combinators that build checkers out of other checkers
//!
//! - [`OneOf`]: ordered alternatives
//! - [`List`]: every element of a list
//! - [`Map`] / [`StringMap`]: every key and value of a map
//! - [`FieldMap`]: a declared set of text fields, with [`Defaults`]
//! - [`FieldMapSet`]: a choice of field maps keyed by a selector field

pub mod field_map;
pub mod field_map_set;
pub mod list;
pub mod map;
pub mod one_of;

pub use field_map::{Defaults, FieldDefault, FieldMap, Fields, field_map, strict_field_map};
pub use field_map_set::{FieldMapSet, field_map_set};
pub use list::{List, list};
pub use map::{Map, StringMap, map, string_map};
pub use one_of::{OneOf, one_of};
