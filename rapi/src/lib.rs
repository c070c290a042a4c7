//! # rapi
//!
//! `Option` and `Result` containers with a total combinator algebra.
//!
//! ## Overview
//!
//! - [`Option<T>`] is [`Some`] or [`None`]; a `Some` always holds a value.
//! - [`Result<T, E>`] is [`Ok`] or [`Err`], the same shape with an error
//!   payload in the failure variant.
//! - [`Slot<V>`] is a single-item mutable binding; `Slot<Option<T>>` offers
//!   the in-place `take`/`get_or_insert` family.
//!
//! Operations that can fail (`unwrap`, `expect`, copying out of a `None`,
//! wrapping an absent value) return [`Fallible`] with a [`RapiError`]; the
//! crate never panics on caller input.
//!
//! ## Example
//!
//! ```rust
//! use rapi::{None, Option, Some};
//!
//! # fn main() -> Result<(), rapi::RapiError> {
//! let foo = Some(42).map(|x| x * 2).or(Some(68)).map(|x| x + 10).unwrap()?;
//! assert_eq!(foo, 94);
//!
//! let bar = None.map(|x: i32| x * 2).or(Some(68)).map(|x| x + 10).unwrap()?;
//! assert_eq!(bar, 78);
//!
//! let mut current: Option<i32> = Some(117);
//! assert_eq!(current.take(), Some(117));
//! assert_eq!(current, None);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod option;
pub mod result;
pub mod slot;

pub use error::{Fallible, RapiError};
pub use option::Option;
pub use option::Option::{None, Some};
pub use result::Result;
pub use result::Result::{Err, Ok};
pub use slot::Slot;

/// Fixed diagnostics carried by [`RapiError`].
pub mod constants {
    /// Message of the `Unwrap` error raised by `Option::unwrap` on `None`.
    pub const OPTION_UNWRAP_NONE: &str = "called `Option::unwrap()` on a `None` value";

    /// Message raised when copying out of a `None`.
    pub const OPTION_NOTHING_TO_COPY: &str =
        "`option` is none. It does not contain value to copy.";

    /// Message raised when a required value is absent.
    pub const VALUE_ABSENT: &str = "`value` cannot be absent.";

    /// Message raised when a required error payload is absent.
    pub const ERROR_ABSENT: &str = "`error` cannot be absent.";
}

/// Prelude for glob-importing the containers.
///
/// Importing it shadows the standard `Option`/`Result` and their variants.
pub mod prelude {
    pub use super::{Err, Fallible, None, Ok, Option, RapiError, Result, Slot, Some};
}
