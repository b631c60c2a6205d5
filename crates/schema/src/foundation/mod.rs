//! Core coercion types and traits
//!
//! This module contains the building blocks every checker shares:
//!
//! - **Values**: [`Value`], [`Key`], [`ValueMap`]
//! - **Paths**: [`Path`], [`PathSegment`]
//! - **Errors**: [`CoerceError`], [`ConversionError`], [`SizeError`]
//! - **Traits**: [`Checker`], [`CheckerExt`]
//!
//! # Examples
//!
//! ```
//! use tessel_schema::foundation::{Checker, Path, Value};
//! use tessel_schema::checkers::int;
//!
//! let out = int().coerce(&Value::from("42"), &Path::root()).unwrap();
//! assert_eq!(out, Value::Int(42));
//! ```

pub mod error;
pub mod path;
pub mod traits;
pub mod value;

pub use error::{CoerceError, ConversionError, Got, SizeError};
pub use path::{Path, PathSegment};
pub use traits::{BoxedChecker, Checker, CheckerExt};
pub use value::{Key, UrlRef, Value, ValueMap};

/// A coercion result.
pub type CoerceResult<T = Value> = Result<T, CoerceError>;

