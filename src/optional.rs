//! Optional Values
//!
//! [`Optional`] represents a value or its absence as an explicit tagged union.
//! It exists alongside `std::option::Option` because it carries a wire
//! contract the standard type only gets through field attributes: an absent
//! value always serializes to `null` and `null` always deserializes to
//! absent, so `Optional`-typed fields round-trip through JSON without any
//! `#[serde(...)]` annotations on the containing struct.
//!
//! Construction is explicit (`present`/`absent`), the value is immutable once
//! wrapped, and every combinator short-circuits on the absent path without
//! invoking the supplied function.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{FxError, FxResult};

/// A value of type `T`, or its absence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Optional<T> {
    /// A value is present.
    Present(T),
    /// No value.
    Absent,
}

/// Absent, regardless of whether `T` itself has a default.
impl<T> Default for Optional<T> {
    fn default() -> Self {
        Optional::Absent
    }
}

impl<T> Optional<T> {
    /// Wraps a value.
    pub fn present(value: T) -> Self {
        Optional::Present(value)
    }

    /// The absent container.
    pub fn absent() -> Self {
        Optional::Absent
    }

    /// True when a value is present.
    pub fn is_present(&self) -> bool {
        matches!(self, Optional::Present(_))
    }

    /// True when no value is present.
    pub fn is_absent(&self) -> bool {
        !self.is_present()
    }

    /// Returns the wrapped value, or `default` when absent.
    pub fn get_or(self, default: T) -> T {
        match self {
            Optional::Present(value) => value,
            Optional::Absent => default,
        }
    }

    /// Returns the wrapped value, or computes one when absent.
    pub fn get_or_else<F>(self, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Optional::Present(value) => value,
            Optional::Absent => f(),
        }
    }

    /// Returns the wrapped value, or [`FxError::Empty`] when absent.
    pub fn get(self) -> FxResult<T> {
        match self {
            Optional::Present(value) => Ok(value),
            Optional::Absent => Err(FxError::Empty),
        }
    }

    /// Borrows the wrapped value without copying, or `None` when absent.
    pub fn unwrap_ref(&self) -> Option<&T> {
        match self {
            Optional::Present(value) => Some(value),
            Optional::Absent => None,
        }
    }

    /// Applies `f` to the wrapped value. Absent passes through unchanged and
    /// `f` is not invoked.
    pub fn map<U, F>(self, f: F) -> Optional<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Optional::Present(value) => Optional::Present(f(value)),
            Optional::Absent => Optional::Absent,
        }
    }

    /// Applies `f`, which itself returns an [`Optional`], to the wrapped
    /// value. The result is `f`'s output directly, never double-wrapped.
    /// Absent passes through unchanged and `f` is not invoked.
    pub fn flat_map<U, F>(self, f: F) -> Optional<U>
    where
        F: FnOnce(T) -> Optional<U>,
    {
        match self {
            Optional::Present(value) => f(value),
            Optional::Absent => Optional::Absent,
        }
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(value) => Optional::Present(value),
            None => Optional::Absent,
        }
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(opt: Optional<T>) -> Self {
        match opt {
            Optional::Present(value) => Some(value),
            Optional::Absent => None,
        }
    }
}

/// Present serializes as the inner value, Absent as `null`.
impl<T: Serialize> Serialize for Optional<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Optional::Present(value) => serializer.serialize_some(value),
            Optional::Absent => serializer.serialize_none(),
        }
    }
}

/// `null` deserializes to Absent; anything else deserializes `T` and yields
/// Present.
impl<'de, T: Deserialize<'de>> Deserialize<'de> for Optional<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Optional::from)
    }
}
