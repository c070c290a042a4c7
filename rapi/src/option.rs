//! Optional values.
//!
//! [`Option<T>`] is either [`Some`] holding exactly one value or [`None`]
//! holding nothing. Absence is a variant, never a sentinel, so a `Some`
//! cannot wrap a missing value and every combinator is total.
//!
//! Combinators that conceptually replace "the current option" in place
//! (`take`, `get_or_insert`, `get_or_insert_with`, `insert`, `replace`) take
//! `&mut self`: the receiver is the mutable cell, so there is no second
//! handle that has to alias it.

use core::iter::FusedIterator;
use core::mem;

use tracing::trace;

use crate::constants::{OPTION_NOTHING_TO_COPY, OPTION_UNWRAP_NONE, VALUE_ABSENT};
use crate::error::{Fallible, RapiError};
use crate::result::Result;

use self::Option::{None, Some};

type StdOption<T> = core::option::Option<T>;

/// A value that is either present ([`Some`]) or absent ([`None`]).
///
/// Equality compares contents: two `None`s are equal, two `Some`s are equal
/// when their values are, and a `Some` never equals a `None`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Option<T> {
    /// No value.
    None,
    /// Some value `T`.
    Some(T),
}

impl<T> Option<T> {
    /// Wrap a value coming from a nullable source.
    ///
    /// Fails with [`RapiError::InvalidArgument`] when `value` is absent.
    pub fn try_some(value: StdOption<T>) -> Fallible<Self> {
        match value {
            StdOption::Some(value) => Ok(Some(value)),
            StdOption::None => Err(RapiError::invalid_argument(VALUE_ABSENT)),
        }
    }

    /// Copy an existing `Some` into a new one.
    ///
    /// The copy is shallow: the new option holds a clone of the value, so
    /// for shared handles such as `Rc<T>` both options point at the same
    /// allocation. Copy the resource first if that is not what you want.
    ///
    /// ```
    /// use std::rc::Rc;
    /// use rapi::{Option, Some};
    ///
    /// let foo = Some(Rc::new("foo"));
    /// let brother = Option::some_from(&foo).unwrap();
    /// assert_eq!(foo, brother);
    /// assert!(Rc::ptr_eq(&foo.unwrap().unwrap(), &brother.unwrap().unwrap()));
    /// ```
    ///
    /// Fails with [`RapiError::InvalidArgument`] when `option` is `None`:
    /// there is nothing to copy.
    pub fn some_from(option: &Option<T>) -> Fallible<Self>
    where
        T: Clone,
    {
        match option {
            Some(value) => Ok(Some(value.clone())),
            None => Err(RapiError::invalid_argument(OPTION_NOTHING_TO_COPY)),
        }
    }

    /// Returns `true` if the option holds a value.
    #[inline]
    pub const fn is_some(&self) -> bool {
        matches!(self, Some(_))
    }

    /// Returns `true` if the option holds nothing.
    #[inline]
    pub const fn is_none(&self) -> bool {
        !self.is_some()
    }

    /// Converts from `&Option<T>` to `Option<&T>`.
    #[inline]
    pub fn as_ref(&self) -> Option<&T> {
        match self {
            Some(value) => Some(value),
            None => None,
        }
    }

    /// Converts from `&mut Option<T>` to `Option<&mut T>`.
    #[inline]
    pub fn as_mut(&mut self) -> Option<&mut T> {
        match self {
            Some(value) => Some(value),
            None => None,
        }
    }

    /// Returns the contained value, or an [`RapiError::Unwrap`] carrying
    /// `message` if there is none.
    pub fn expect(self, message: &str) -> Fallible<T> {
        match self {
            Some(value) => Ok(value),
            None => Err(RapiError::unwrap_failed("Option::expect", message)),
        }
    }

    /// Returns the contained value, or a fixed [`RapiError::Unwrap`].
    ///
    /// Prefer [`unwrap_or`](Self::unwrap_or),
    /// [`unwrap_or_else`](Self::unwrap_or_else) or a combinator that handles
    /// the `None` case.
    pub fn unwrap(self) -> Fallible<T> {
        match self {
            Some(value) => Ok(value),
            None => Err(RapiError::unwrap_failed("Option::unwrap", OPTION_UNWRAP_NONE)),
        }
    }

    /// Returns the contained value or `default`.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Some(value) => value,
            None => default,
        }
    }

    /// Returns the contained value or computes one from `f`.
    ///
    /// `f` only runs on `None`.
    #[inline]
    pub fn unwrap_or_else<F: FnOnce() -> T>(self, f: F) -> T {
        match self {
            Some(value) => value,
            None => f(),
        }
    }

    /// Returns the contained value or `T::default()`.
    #[inline]
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        self.unwrap_or_else(T::default)
    }

    /// Maps `Some(v)` to `Some(f(v))`; `None` stays `None` and `f` never runs.
    #[inline]
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Option<U> {
        match self {
            Some(value) => Some(f(value)),
            None => None,
        }
    }

    /// Applies `f` to the contained value, or returns `default`.
    #[inline]
    pub fn map_or<U, F: FnOnce(T) -> U>(self, default: U, f: F) -> U {
        match self {
            Some(value) => f(value),
            None => default,
        }
    }

    /// Applies `f` to the contained value, or computes a default with
    /// `default`. Exactly one of the two closures runs.
    #[inline]
    pub fn map_or_else<U, D, F>(self, default: D, f: F) -> U
    where
        D: FnOnce() -> U,
        F: FnOnce(T) -> U,
    {
        match self {
            Some(value) => f(value),
            None => default(),
        }
    }

    /// Transforms into a [`Result`], mapping `Some(v)` to `Ok(v)` and
    /// `None` to `Err(err)`.
    #[inline]
    pub fn ok_or<E>(self, err: E) -> Result<T, E> {
        match self {
            Some(value) => Result::Ok(value),
            None => Result::Err(err),
        }
    }

    /// Like [`ok_or`](Self::ok_or) with a lazily computed error.
    #[inline]
    pub fn ok_or_else<E, F: FnOnce() -> E>(self, err: F) -> Result<T, E> {
        match self {
            Some(value) => Result::Ok(value),
            None => Result::Err(err()),
        }
    }

    /// Returns `other` if the option is `Some`, otherwise `None`.
    ///
    /// The receiver's value is dropped.
    #[inline]
    pub fn and<U>(self, other: Option<U>) -> Option<U> {
        match self {
            Some(_) => other,
            None => None,
        }
    }

    /// Returns `None` if the option is `None`, otherwise calls `f` with the
    /// wrapped value and returns the result.
    ///
    /// ```
    /// use rapi::{None, Option, Some};
    ///
    /// fn sq(x: u32) -> Option<u32> { Some(x * x) }
    /// fn nope(_: u32) -> Option<u32> { None }
    ///
    /// assert_eq!(Some(2).and_then(sq).and_then(sq), Some(16));
    /// assert_eq!(Some(2).and_then(sq).and_then(nope), None);
    /// assert_eq!(None.and_then(sq).and_then(sq), None);
    /// ```
    #[inline]
    pub fn and_then<U, F: FnOnce(T) -> Option<U>>(self, f: F) -> Option<U> {
        match self {
            Some(value) => f(value),
            None => None,
        }
    }

    /// Keeps the value only if `predicate` accepts it.
    #[inline]
    pub fn filter<P: FnOnce(&T) -> bool>(self, predicate: P) -> Self {
        if let Some(value) = self {
            if predicate(&value) {
                return Some(value);
            }
        }
        None
    }

    /// Returns the option if it holds a value, otherwise `other`.
    #[inline]
    pub fn or(self, other: Option<T>) -> Option<T> {
        match self {
            Some(_) => self,
            None => other,
        }
    }

    /// Returns the option if it holds a value, otherwise the result of `f`.
    #[inline]
    pub fn or_else<F: FnOnce() -> Option<T>>(self, f: F) -> Option<T> {
        match self {
            Some(_) => self,
            None => f(),
        }
    }

    /// Returns whichever side is `Some` when exactly one of them is.
    #[inline]
    pub fn xor(self, other: Option<T>) -> Option<T> {
        match (self, other) {
            (Some(value), None) | (None, Some(value)) => Some(value),
            _ => None,
        }
    }

    /// Stores `value`, dropping any previous content, and returns a
    /// reference to it.
    pub fn insert(&mut self, value: T) -> &mut T {
        trace!(was_some = self.is_some(), "option overwritten");
        *self = None;
        self.get_or_insert_with(|| value)
    }

    /// Inserts `value` if the option is `None`, then returns a reference to
    /// the contained value.
    ///
    /// On `Some` the option is left untouched and `value` is dropped; the
    /// returned reference points at the existing value, not at `value`.
    pub fn get_or_insert(&mut self, value: T) -> &mut T {
        self.get_or_insert_with(|| value)
    }

    /// Inserts the value produced by `f` if the option is `None`, then
    /// returns a reference to the contained value.
    ///
    /// `f` only runs on `None`.
    pub fn get_or_insert_with<F: FnOnce() -> T>(&mut self, f: F) -> &mut T {
        if self.is_none() {
            trace!("empty option filled in place");
            *self = Some(f());
        }
        // Filled above when empty; the arm only satisfies the borrow checker.
        match self {
            Some(value) => value,
            None => unreachable!("option was just filled"),
        }
    }

    /// Takes the value out, leaving `None` in its place.
    ///
    /// Taking from `None` leaves it as is and returns `None`.
    pub fn take(&mut self) -> Option<T> {
        if self.is_some() {
            trace!("value taken out of option");
        }
        mem::take(self)
    }

    /// Stores `value` and returns the previous content.
    pub fn replace(&mut self, value: T) -> Option<T> {
        trace!(was_some = self.is_some(), "option replaced");
        mem::replace(self, Some(value))
    }

    /// Iterates over the zero or one contained values.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.as_ref().into_std())
    }

    /// Converts into the standard library's option.
    #[inline]
    pub fn into_std(self) -> StdOption<T> {
        match self {
            Some(value) => StdOption::Some(value),
            None => StdOption::None,
        }
    }
}

impl<T> Option<Option<T>> {
    /// Removes one level of nesting.
    #[inline]
    pub fn flatten(self) -> Option<T> {
        self.and_then(|inner| inner)
    }
}

impl<T> Default for Option<T> {
    fn default() -> Self {
        None
    }
}

impl<T> From<StdOption<T>> for Option<T> {
    fn from(value: StdOption<T>) -> Self {
        match value {
            StdOption::Some(value) => Some(value),
            StdOption::None => None,
        }
    }
}

impl<T> From<Option<T>> for StdOption<T> {
    fn from(value: Option<T>) -> Self {
        value.into_std()
    }
}

/// Iterator over a borrowed option or result value.
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    inner: StdOption<&'a T>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(inner: StdOption<&'a T>) -> Self {
        Self { inner }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> StdOption<&'a T> {
        self.inner.take()
    }

    fn size_hint(&self) -> (usize, StdOption<usize>) {
        let n = usize::from(self.inner.is_some());
        (n, StdOption::Some(n))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> StdOption<Self::Item> {
        self.inner.take()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// Owning iterator over the zero or one values of an option.
#[derive(Debug, Clone)]
pub struct IntoIter<T> {
    inner: StdOption<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> StdOption<T> {
        self.inner.take()
    }

    fn size_hint(&self) -> (usize, StdOption<usize>) {
        let n = usize::from(self.inner.is_some());
        (n, StdOption::Some(n))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for Option<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter {
            inner: self.into_std(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Option<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Option<T> {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> core::result::Result<S::Ok, S::Error> {
        match self {
            Some(value) => serializer.serialize_some(value),
            None => serializer.serialize_none(),
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for Option<T> {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> core::result::Result<Self, D::Error> {
        StdOption::<T>::deserialize(deserializer).map(Option::from)
    }
}
