//! Leaf checkers for scalar values
//!
//! # Categories
//!
//! - **Literals**: [`Const`], [`Nil`], [`Any`]
//! - **Booleans**: [`Bool`]
//! - **Numbers**: [`Int`], [`Uint`], [`ForceInt`], [`ForceUint`], [`Float`]
//! - **Text**: [`Str`], [`NonEmptyString`], [`Stringified`]
//! - **Formats**: [`UrlString`], [`SimpleRegexp`], [`Uuid`], [`Size`]
//! - **Temporal**: [`Time`], [`TimeDuration`]
//!
//! Every checker has a lowercase factory function of the same purpose
//! (`int()`, `non_empty_string("name")`, `constant("mysql")`, ...).

pub mod boolean;
pub mod constant;
pub mod network;
pub mod nullable;
pub mod numeric;
pub mod pattern;
pub mod size;
pub mod string;
pub mod stringified;
pub mod temporal;

pub use boolean::{Bool, boolean};
pub use constant::{Const, constant};
pub use network::{UrlString, url};
pub use nullable::{Any, Nil, any, nil};
pub use numeric::{Float, ForceInt, ForceUint, Int, Uint, float, force_int, force_uint, int, uint};
pub use pattern::{SimpleRegexp, Uuid, simple_regexp, uuid};
pub use size::{Size, parse_size, size};
pub use string::{NonEmptyString, Str, non_empty_string, string};
pub use stringified::{Stringified, stringified, stringified_with};
pub use temporal::{Time, TimeDuration, time, time_duration, zero_time};
