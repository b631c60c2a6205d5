//! Macros for declaring checkers and schemas with minimal boilerplate.
//!
//! # Available Macros
//!
//! - [`checker!`]: Declare a unit checker (struct + `Checker` impl + factory fn)
//! - [`fields!`]: Build a [`Fields`](crate::combinators::Fields) table
//! - [`defaults!`]: Build a [`Defaults`](crate::combinators::Defaults) table
//!
//! # Examples
//!
//! ```
//! use tessel_schema::prelude::*;
//!
//! let server = field_map(
//!     fields! {
//!         "host" => string(),
//!         "port" => int(),
//!         "tls" => boolean(),
//!     },
//!     defaults! {
//!         "port" => 8080,
//!         "tls" => omit,
//!     },
//! );
//! assert_eq!(server.fields().len(), 3);
//! ```

// ============================================================================
// CHECKER MACRO
// ============================================================================

/// Declares a stateless checker: a unit struct, its `Checker` implementation,
/// and a `const` factory function.
///
/// `#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]` is always
/// applied. The two identifiers in `coerce(..)` name the value and path
/// parameters inside the body.
///
/// ```
/// use tessel_schema::prelude::*;
///
/// checker! {
///     /// Accepts only `true`.
///     pub True;
///     coerce(value, path) {
///         match value {
///             Value::Bool(true) => Ok(Value::Bool(true)),
///             other => Err(CoerceError::expected("true", other, path)),
///         }
///     }
///     fn true_only();
/// }
///
/// assert!(true_only().coerce_root(&Value::Bool(true)).is_ok());
/// assert!(true_only().coerce_root(&Value::Bool(false)).is_err());
/// ```
#[macro_export]
macro_rules! checker {
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident;
        coerce($value:ident, $path:ident) $body:block
        fn $factory:ident();
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        $vis struct $name;

        impl $crate::foundation::Checker for $name {
            fn coerce(
                &self,
                $value: &$crate::foundation::Value,
                $path: &$crate::foundation::Path,
            ) -> $crate::foundation::CoerceResult
            $body
        }

        #[doc = concat!("Creates a [`", stringify!($name), "`] checker.")]
        #[must_use]
        $vis const fn $factory() -> $name {
            $name
        }
    };
}

// ============================================================================
// SCHEMA TABLE MACROS
// ============================================================================

/// Builds a [`Fields`](crate::combinators::Fields) table from
/// `name => checker` pairs, keeping their order.
#[macro_export]
macro_rules! fields {
    ($($name:expr => $checker:expr),* $(,)?) => {
        $crate::combinators::Fields::new()$(.field($name, $checker))*
    };
}

/// Builds a [`Defaults`](crate::combinators::Defaults) table.
///
/// Each entry is either `name => omit` (the field may be absent) or
/// `name => value` (a literal default, converted with `Into<Value>`).
#[macro_export]
macro_rules! defaults {
    (@acc $defaults:expr;) => {
        $defaults
    };
    (@acc $defaults:expr; $name:expr => omit $(, $($rest:tt)*)?) => {
        $crate::defaults!(@acc $defaults.omit($name); $($($rest)*)?)
    };
    (@acc $defaults:expr; $name:expr => $value:expr $(, $($rest:tt)*)?) => {
        $crate::defaults!(@acc $defaults.value($name, $value); $($($rest)*)?)
    };
    ($($body:tt)*) => {
        $crate::defaults!(@acc $crate::combinators::Defaults::new(); $($body)*)
    };
}
