//! Single-item mutable binding.
//!
//! A [`Slot`] always holds exactly one value. `Slot<Option<T>>` is the
//! container used to replace an option in place: its combinators forward to
//! the option stored inside, so the slot and the option it holds can never
//! disagree.

use core::mem;

use tracing::trace;

use crate::constants::VALUE_ABSENT;
use crate::error::{Fallible, RapiError};
use crate::option::Option;

type StdOption<T> = core::option::Option<T>;

/// A mutable cell holding exactly one `V`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Slot<V> {
    value: V,
}

impl<V> Slot<V> {
    /// Create a slot holding `value`.
    pub fn new(value: V) -> Self {
        Self { value }
    }

    /// Create a slot from a nullable source; absent values are rejected.
    pub fn try_new(value: StdOption<V>) -> Fallible<Self> {
        value
            .map(Self::new)
            .ok_or_else(|| RapiError::invalid_argument(VALUE_ABSENT))
    }

    /// Current content.
    pub fn get(&self) -> &V {
        &self.value
    }

    /// Mutable access to the current content.
    pub fn get_mut(&mut self) -> &mut V {
        &mut self.value
    }

    /// Replace the content.
    pub fn set(&mut self, value: V) {
        trace!("slot overwritten");
        self.value = value;
    }

    /// Replace the content from a nullable source. On rejection the slot
    /// keeps its current value.
    pub fn try_set(&mut self, value: StdOption<V>) -> Fallible<()> {
        let value = value.ok_or_else(|| RapiError::invalid_argument(VALUE_ABSENT))?;
        self.set(value);
        Ok(())
    }

    /// Replace the content and return the previous one.
    pub fn replace(&mut self, value: V) -> V {
        trace!("slot replaced");
        mem::replace(&mut self.value, value)
    }

    /// Consume the slot, returning its content.
    pub fn into_inner(self) -> V {
        self.value
    }
}

impl<V> From<V> for Slot<V> {
    fn from(value: V) -> Self {
        Self::new(value)
    }
}

impl<T> Slot<Option<T>> {
    /// Whether the held option is `Some`.
    pub fn is_some(&self) -> bool {
        self.value.is_some()
    }

    /// Whether the held option is `None`.
    pub fn is_none(&self) -> bool {
        self.value.is_none()
    }

    /// Take the held value out, leaving `None` in the slot.
    ///
    /// An empty slot stays empty and yields `None`.
    pub fn take(&mut self) -> Option<T> {
        self.value.take()
    }

    /// Fill an empty slot with `value`; a full slot keeps its value.
    /// Returns the value now held.
    pub fn get_or_insert(&mut self, value: T) -> &mut T {
        self.value.get_or_insert(value)
    }

    /// Fill an empty slot with the result of `f`; `f` only runs when the
    /// slot is empty. Returns the value now held.
    pub fn get_or_insert_with<F: FnOnce() -> T>(&mut self, f: F) -> &mut T {
        self.value.get_or_insert_with(f)
    }
}
