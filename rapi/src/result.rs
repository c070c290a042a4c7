//! Success-or-failure values.
//!
//! [`Result<T, E>`] mirrors [`Option`](crate::Option) with an error payload
//! in place of the empty variant: `Ok` plays the role of `Some` and `Err`
//! short-circuits like `None`.
//!
//! Inside this module `Ok`/`Err` without a path are the standard ones used
//! by [`Fallible`]; the container's variants are always written
//! `Result::Ok`/`Result::Err`.

use core::fmt;

use crate::constants::{ERROR_ABSENT, VALUE_ABSENT};
use crate::error::{Fallible, RapiError};
use crate::option::{Iter, Option};

type StdOption<T> = core::option::Option<T>;
type StdResult<T, E> = core::result::Result<T, E>;

/// Either a success value ([`Ok`](Result::Ok)) or an error
/// ([`Err`](Result::Err)).
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Result<T, E> {
    /// Success value.
    Ok(T),
    /// Error value.
    Err(E),
}

impl<T, E> Result<T, E> {
    /// Wrap a success value coming from a nullable source.
    pub fn try_ok(value: StdOption<T>) -> Fallible<Self> {
        value
            .map(Result::Ok)
            .ok_or_else(|| RapiError::invalid_argument(VALUE_ABSENT))
    }

    /// Wrap an error value coming from a nullable source.
    pub fn try_err(error: StdOption<E>) -> Fallible<Self> {
        error
            .map(Result::Err)
            .ok_or_else(|| RapiError::invalid_argument(ERROR_ABSENT))
    }

    /// Returns `true` on `Ok`.
    #[inline]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Result::Ok(_))
    }

    /// Returns `true` on `Err`.
    #[inline]
    pub const fn is_err(&self) -> bool {
        !self.is_ok()
    }

    /// The success value, if any.
    #[inline]
    pub fn ok(self) -> Option<T> {
        match self {
            Result::Ok(value) => Option::Some(value),
            Result::Err(_) => Option::None,
        }
    }

    /// The error value, if any.
    #[inline]
    pub fn err(self) -> Option<E> {
        match self {
            Result::Ok(_) => Option::None,
            Result::Err(error) => Option::Some(error),
        }
    }

    /// Converts from `&Result<T, E>` to `Result<&T, &E>`.
    #[inline]
    pub fn as_ref(&self) -> Result<&T, &E> {
        match self {
            Result::Ok(value) => Result::Ok(value),
            Result::Err(error) => Result::Err(error),
        }
    }

    /// Converts from `&mut Result<T, E>` to `Result<&mut T, &mut E>`.
    #[inline]
    pub fn as_mut(&mut self) -> Result<&mut T, &mut E> {
        match self {
            Result::Ok(value) => Result::Ok(value),
            Result::Err(error) => Result::Err(error),
        }
    }

    /// Maps the success value, leaving an error untouched.
    #[inline]
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Result<U, E> {
        match self {
            Result::Ok(value) => Result::Ok(f(value)),
            Result::Err(error) => Result::Err(error),
        }
    }

    /// Maps the error value, leaving a success untouched.
    #[inline]
    pub fn map_err<G, F: FnOnce(E) -> G>(self, f: F) -> Result<T, G> {
        match self {
            Result::Ok(value) => Result::Ok(value),
            Result::Err(error) => Result::Err(f(error)),
        }
    }

    /// Applies `f` to the success value, or returns `default`.
    #[inline]
    pub fn map_or<U, F: FnOnce(T) -> U>(self, default: U, f: F) -> U {
        match self {
            Result::Ok(value) => f(value),
            Result::Err(_) => default,
        }
    }

    /// Applies `f` to the success value, or `default` to the error.
    #[inline]
    pub fn map_or_else<U, D, F>(self, default: D, f: F) -> U
    where
        D: FnOnce(E) -> U,
        F: FnOnce(T) -> U,
    {
        match self {
            Result::Ok(value) => f(value),
            Result::Err(error) => default(error),
        }
    }

    /// Returns `other` on `Ok`, otherwise this error.
    #[inline]
    pub fn and<U>(self, other: Result<U, E>) -> Result<U, E> {
        match self {
            Result::Ok(_) => other,
            Result::Err(error) => Result::Err(error),
        }
    }

    /// Calls `f` with the success value; errors short-circuit.
    #[inline]
    pub fn and_then<U, F: FnOnce(T) -> Result<U, E>>(self, f: F) -> Result<U, E> {
        match self {
            Result::Ok(value) => f(value),
            Result::Err(error) => Result::Err(error),
        }
    }

    /// Returns this success, otherwise `other`.
    #[inline]
    pub fn or<G>(self, other: Result<T, G>) -> Result<T, G> {
        match self {
            Result::Ok(value) => Result::Ok(value),
            Result::Err(_) => other,
        }
    }

    /// Returns this success, otherwise recovers from the error with `f`.
    #[inline]
    pub fn or_else<G, F: FnOnce(E) -> Result<T, G>>(self, f: F) -> Result<T, G> {
        match self {
            Result::Ok(value) => Result::Ok(value),
            Result::Err(error) => f(error),
        }
    }

    /// Returns the success value or `default`.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Result::Ok(value) => value,
            Result::Err(_) => default,
        }
    }

    /// Returns the success value or computes one from the error.
    #[inline]
    pub fn unwrap_or_else<F: FnOnce(E) -> T>(self, f: F) -> T {
        match self {
            Result::Ok(value) => value,
            Result::Err(error) => f(error),
        }
    }

    /// Returns the success value or `T::default()`.
    #[inline]
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        self.unwrap_or_else(|_| T::default())
    }

    /// Returns the success value, or an [`RapiError::Unwrap`] of the form
    /// `"{message}: {error:?}"`.
    pub fn expect(self, message: &str) -> Fallible<T>
    where
        E: fmt::Debug,
    {
        match self {
            Result::Ok(value) => Ok(value),
            Result::Err(error) => Err(RapiError::unwrap_failed(
                "Result::expect",
                format!("{message}: {error:?}"),
            )),
        }
    }

    /// Returns the success value, or an [`RapiError::Unwrap`] naming the
    /// operation and the error.
    pub fn unwrap(self) -> Fallible<T>
    where
        E: fmt::Debug,
    {
        match self {
            Result::Ok(value) => Ok(value),
            Result::Err(error) => Err(RapiError::unwrap_failed(
                "Result::unwrap",
                format!("called `Result::unwrap()` on an `Err` value: {error:?}"),
            )),
        }
    }

    /// Returns the error value, or an [`RapiError::Unwrap`] of the form
    /// `"{message}: {value:?}"`.
    pub fn expect_err(self, message: &str) -> Fallible<E>
    where
        T: fmt::Debug,
    {
        match self {
            Result::Ok(value) => Err(RapiError::unwrap_failed(
                "Result::expect_err",
                format!("{message}: {value:?}"),
            )),
            Result::Err(error) => Ok(error),
        }
    }

    /// Returns the error value, or an [`RapiError::Unwrap`] naming the
    /// operation and the success value.
    pub fn unwrap_err(self) -> Fallible<E>
    where
        T: fmt::Debug,
    {
        match self {
            Result::Ok(value) => Err(RapiError::unwrap_failed(
                "Result::unwrap_err",
                format!("called `Result::unwrap_err()` on an `Ok` value: {value:?}"),
            )),
            Result::Err(error) => Ok(error),
        }
    }

    /// Iterates over the success value, if any.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.as_ref().ok().into_std())
    }

    /// Converts into the standard library's result.
    #[inline]
    pub fn into_std(self) -> StdResult<T, E> {
        match self {
            Result::Ok(value) => Ok(value),
            Result::Err(error) => Err(error),
        }
    }
}

impl<T, E> From<StdResult<T, E>> for Result<T, E> {
    fn from(value: StdResult<T, E>) -> Self {
        match value {
            Ok(value) => Result::Ok(value),
            Err(error) => Result::Err(error),
        }
    }
}

impl<T, E> From<Result<T, E>> for StdResult<T, E> {
    fn from(value: Result<T, E>) -> Self {
        value.into_std()
    }
}
