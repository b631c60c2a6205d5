//! # tessel-schema
//!
//! Composable coercion of loosely-typed configuration values.
//!
//! A schema is a tree of [`Checker`](foundation::Checker)s. Coercing a
//! [`Value`](foundation::Value) either returns its normalized form (text
//! turned into numbers, durations, URLs; defaults installed) or the first
//! failure, located by a dotted [`Path`](foundation::Path).
//!
//! ## Quick Start
//!
//! ```
//! use tessel_schema::prelude::*;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let server = strict_field_map(
//!     fields! {
//!         "host" => non_empty_string("host name"),
//!         "port" => int(),
//!         "timeout" => time_duration(),
//!     },
//!     defaults! {
//!         "port" => 8080,
//!         "timeout" => "30s",
//!     },
//! );
//!
//! let raw: Value = serde_json::from_str(r#"{"host": "db.local", "port": "5432"}"#)?;
//! let out = server.coerce_root(&raw)?;
//! assert_eq!(out.get("port"), Some(&Value::Int(5432)));
//! # Ok(())
//! # }
//! ```
//!
//! ## Building Checkers
//!
//! Use the [`checker!`] macro for stateless checkers, or implement
//! [`Checker`](foundation::Checker) manually for anything with configuration.
//!
//! ## Built-in Checkers
//!
//! - **Literals**: [`Const`](checkers::Const), [`Nil`](checkers::Nil), [`Any`](checkers::Any)
//! - **Scalars**: [`Bool`](checkers::Bool), [`Int`](checkers::Int), [`Uint`](checkers::Uint),
//!   [`ForceInt`](checkers::ForceInt), [`ForceUint`](checkers::ForceUint),
//!   [`Float`](checkers::Float)
//! - **Text**: [`Str`](checkers::Str), [`NonEmptyString`](checkers::NonEmptyString),
//!   [`Stringified`](checkers::Stringified)
//! - **Formats**: [`UrlString`](checkers::UrlString), [`SimpleRegexp`](checkers::SimpleRegexp),
//!   [`Uuid`](checkers::Uuid), [`Size`](checkers::Size), [`Time`](checkers::Time),
//!   [`TimeDuration`](checkers::TimeDuration)
//! - **Structure**: [`OneOf`](combinators::OneOf), [`List`](combinators::List),
//!   [`Map`](combinators::Map), [`FieldMap`](combinators::FieldMap),
//!   [`FieldMapSet`](combinators::FieldMapSet)

// CoerceError carries the rendered path and got-description inline; boxing it
// would add an allocation to every failing branch of OneOf.
#![allow(clippy::result_large_err)]

pub mod checkers;
pub mod combinators;
pub mod foundation;
pub mod json;
mod macros;
pub mod prelude;
